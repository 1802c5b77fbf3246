#![forbid(unsafe_code)]

//! Debug overlay that visualizes the active hover polygon.
//!
//! The application owns a single [`HoverOverlay`] and hands out
//! [`OverlayHandle`]s to the trackers that opt into visibility. Only one
//! tracker is expected to be active at a time; when several draw, the last
//! writer wins. After [`HoverOverlay::shutdown`] every handle becomes inert.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use crate::geometry::Point;

#[derive(Debug, Default)]
struct OverlayState {
    alive: bool,
    polygon: Option<[Point; 4]>,
    draws: u64,
}

/// Owner of the overlay surface.
#[derive(Debug)]
pub struct HoverOverlay {
    state: Rc<RefCell<OverlayState>>,
}

impl Default for HoverOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverOverlay {
    /// Create the overlay surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(OverlayState {
                alive: true,
                ..OverlayState::default()
            })),
        }
    }

    /// A handle trackers use to draw into this overlay.
    #[must_use]
    pub fn handle(&self) -> OverlayHandle {
        OverlayHandle {
            state: Rc::clone(&self.state),
        }
    }

    /// Tear down the surface. Outstanding handles stop drawing.
    pub fn shutdown(&self) {
        let mut state = self.state.borrow_mut();
        state.alive = false;
        state.polygon = None;
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state.borrow().alive
    }

    /// The polygon currently shown, if any.
    #[must_use]
    pub fn polygon(&self) -> Option<[Point; 4]> {
        self.state.borrow().polygon
    }

    /// Total number of accepted draws.
    #[must_use]
    pub fn draw_count(&self) -> u64 {
        self.state.borrow().draws
    }

    /// Render the current polygon as an SVG `<polygon>` element.
    #[must_use]
    pub fn to_svg(&self) -> Option<String> {
        self.polygon().map(|points| polygon_svg(&points))
    }
}

/// Shared drawing handle. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct OverlayHandle {
    state: Rc<RefCell<OverlayState>>,
}

impl OverlayHandle {
    /// Show `polygon`, replacing whatever was drawn before.
    pub fn draw(&self, polygon: [Point; 4]) {
        let mut state = self.state.borrow_mut();
        if !state.alive {
            return;
        }
        state.polygon = Some(polygon);
        state.draws += 1;
    }

    /// Remove the drawn polygon.
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        if state.alive {
            state.polygon = None;
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state.borrow().alive
    }
}

fn polygon_svg(points: &[Point; 4]) -> String {
    let mut attr = String::with_capacity(64);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            attr.push(' ');
        }
        let _ = write!(attr, "{},{}", p.x, p.y);
    }
    format!(
        "<polygon points=\"{attr}\" fill=\"rgba(255, 0, 0, 0.2)\" stroke=\"red\" pointer-events=\"none\" />"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn last_writer_wins() {
        let overlay = HoverOverlay::new();
        let a = overlay.handle();
        let b = overlay.handle();
        a.draw(square());
        let mut moved = square();
        moved[0] = Point::new(1.0, 1.0);
        b.draw(moved);
        assert_eq!(overlay.polygon(), Some(moved));
        assert_eq!(overlay.draw_count(), 2);
    }

    #[test]
    fn shutdown_makes_handles_inert() {
        let overlay = HoverOverlay::new();
        let handle = overlay.handle();
        handle.draw(square());
        overlay.shutdown();
        assert!(!handle.is_alive());
        assert_eq!(overlay.polygon(), None);
        handle.draw(square());
        assert_eq!(overlay.polygon(), None);
        assert_eq!(overlay.draw_count(), 1);
    }

    #[test]
    fn svg_lists_points_in_order() {
        let overlay = HoverOverlay::new();
        assert_eq!(overlay.to_svg(), None);
        overlay.handle().draw(square());
        let svg = overlay.to_svg().unwrap_or_default();
        assert!(svg.starts_with("<polygon points=\"0,0 10,0 10,10 0,10\""));
    }

    #[test]
    fn clear_removes_polygon() {
        let overlay = HoverOverlay::new();
        let handle = overlay.handle();
        handle.draw(square());
        handle.clear();
        assert_eq!(overlay.polygon(), None);
    }
}
