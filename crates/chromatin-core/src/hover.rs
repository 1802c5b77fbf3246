#![forbid(unsafe_code)]

//! Hover-intent tracking for flyouts.
//!
//! When a menu or tooltip opens next to its anchor, the pointer has to cross
//! a gap to reach it. [`HoverIntent`] keeps the hover alive while the pointer
//! travels through a "safe" quadrilateral bridging the two elements, so the
//! flyout does not close the moment the pointer leaves the anchor.
//!
//! # State Machine
//!
//! ```text
//!            pointer-enter (anchor|target)
//!   Idle ──────────────────────────────────────▶ Over
//!    │ polygon computed                          │  ▲
//!    ▼                                           │  │ move inside anchor,
//!  Tracking ── move outside everything ──▶ NotOver  │ target, or polygon
//!                                                └──┘
//!   any state ── anchor/target unavailable ──▶ Idle
//! ```
//!
//! # Invariants
//!
//! 1. Pointer-move samples are only evaluated while listening, i.e. while
//!    both elements are present and a polygon is set.
//! 2. `on_hover_start` fires exactly once per entry into `Over`, and
//!    `on_hover_end` exactly once per exit from it. Repeated samples of the
//!    same state never fire callbacks.
//! 3. Polygon recomputation is deferred by the settle delay after every
//!    geometry change; a newer change re-arms the deadline.
//! 4. Losing either element resets the polygon and stops listening.
//!
//! # Failure Modes
//!
//! - Missing geometry is a normal state, not an error. The tracker returns to
//!   `Idle` without diagnostics.
//! - Polygon corner selection for diagonally offset elements is a heuristic:
//!   it always takes the diagonal facing away from the direction of travel and
//!   does not search for the true nearest pair of edges.

use std::time::{Duration, Instant};

use crate::event::{Element, IntentEvent};
use crate::geometry::{Point, Rect, Segment, segments_intersect};
use crate::overlay::OverlayHandle;

// ---------------------------------------------------------------------------
// Polygon geometry
// ---------------------------------------------------------------------------

/// Position of the target relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Classify `target` against `anchor` by comparing centers.
    ///
    /// Ties resolve towards right and bottom.
    #[must_use]
    pub fn of(anchor: &Rect, target: &Rect) -> Self {
        let a = anchor.center();
        let t = target.center();
        match (t.x >= a.x, t.y >= a.y) {
            (true, true) => Self::BottomRight,
            (true, false) => Self::TopRight,
            (false, true) => Self::BottomLeft,
            (false, false) => Self::TopLeft,
        }
    }

    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    #[must_use]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    /// Whether the top-left/bottom-right diagonal is used for this quadrant.
    ///
    /// The chosen diagonal runs across the direction of travel, so the four
    /// corners always form a simple quadrilateral.
    const fn picks_first_diagonal(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomLeft)
    }
}

/// The safe travel corridor between anchor and target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HoverPolygon {
    /// No polygon: an element is missing or geometry has not settled.
    #[default]
    Unset,
    /// Four points in drawing order.
    Set([Point; 4]),
}

impl HoverPolygon {
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    #[must_use]
    pub const fn points(&self) -> Option<&[Point; 4]> {
        match self {
            Self::Set(points) => Some(points),
            Self::Unset => None,
        }
    }

    /// Number of points (0 or 4).
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Set(_) => 4,
            Self::Unset => 0,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.is_set()
    }

    /// Largest x coordinate among the points.
    #[must_use]
    pub fn max_x(&self) -> Option<f64> {
        self.points()
            .map(|points| points.iter().fold(f64::NEG_INFINITY, |acc, p| acc.max(p.x)))
    }

    /// Hit-test `point` by casting a horizontal ray to `far_x`.
    ///
    /// `far_x` is normally the right edge of the viewport. It is extended past
    /// the polygon if needed so the ray always leaves the shape.
    #[must_use]
    pub fn contains(&self, point: Point, far_x: f64) -> bool {
        let (Some(points), Some(max_x)) = (self.points(), self.max_x()) else {
            return false;
        };
        let far_x = far_x.max(max_x + 1.0);
        point_in_polygon(points, Segment::horizontal_ray(point, far_x))
    }
}

/// Build the corridor between `anchor` and `target`.
///
/// Returns [`HoverPolygon::Unset`] when either element is unavailable.
#[must_use]
pub fn compute_hover_polygon(anchor: Option<Rect>, target: Option<Rect>) -> HoverPolygon {
    let (Some(a), Some(t)) = (anchor, target) else {
        return HoverPolygon::Unset;
    };
    let quadrant = Quadrant::of(&a, &t);
    let side_by_side = a.overlaps_vertically(&t) && !a.overlaps_horizontally(&t);
    let stacked = a.overlaps_horizontally(&t) && !a.overlaps_vertically(&t);

    let points = if side_by_side {
        if quadrant.is_right() {
            [a.top_right(), t.top_left(), t.bottom_left(), a.bottom_right()]
        } else {
            [a.top_left(), t.top_right(), t.bottom_right(), a.bottom_left()]
        }
    } else if stacked {
        if quadrant.is_bottom() {
            [a.bottom_left(), t.top_left(), t.top_right(), a.bottom_right()]
        } else {
            [a.top_left(), t.bottom_left(), t.bottom_right(), a.top_right()]
        }
    } else if quadrant.picks_first_diagonal() {
        [a.top_left(), t.top_left(), t.bottom_right(), a.bottom_right()]
    } else {
        [a.top_right(), t.top_right(), t.bottom_left(), a.bottom_left()]
    };
    HoverPolygon::Set(points)
}

/// Ray-crossing test: `ray` starts at the probed point and must end outside
/// the polygon. The point is inside when the ray crosses an odd number of
/// edges.
#[must_use]
pub fn point_in_polygon(polygon: &[Point; 4], ray: Segment) -> bool {
    let crossings = (0..polygon.len())
        .filter(|&i| {
            let edge = Segment::new(polygon[i], polygon[(i + 1) % polygon.len()]);
            segments_intersect(edge, ray)
        })
        .count();
    crossings % 2 == 1
}

// ---------------------------------------------------------------------------
// Edge triggering
// ---------------------------------------------------------------------------

/// A hover transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverEdge {
    Start,
    End,
}

/// Turns level samples of the mouse-over flag into transitions.
///
/// The flag starts undetermined; the first `true` sample is a start, while a
/// first `false` sample is not an end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeTrigger {
    last: Option<bool>,
}

impl EdgeTrigger {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Last sampled value, `None` before the first sample.
    #[must_use]
    pub const fn last(&self) -> Option<bool> {
        self.last
    }

    /// Feed one sample.
    pub fn update(&mut self, over: bool) -> Option<HoverEdge> {
        let edge = match (self.last, over) {
            (Some(true), true) => None,
            (_, true) => Some(HoverEdge::Start),
            (Some(true), false) => Some(HoverEdge::End),
            (_, false) => None,
        };
        self.last = Some(over);
        edge
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Default delay before the polygon is recomputed after a geometry change.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Caller-supplied tracker options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentConfig {
    /// Ignore all pointer input and stay `Idle`.
    pub is_disabled: bool,
    /// Draw the polygon into the debug overlay, when one is attached.
    pub is_hover_polygon_visible: bool,
    /// Delay that lets layout settle before the polygon is recomputed.
    pub settle_delay: Duration,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            is_disabled: false,
            is_hover_polygon_visible: false,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl IntentConfig {
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_polygon_visible(mut self, visible: bool) -> Self {
        self.is_hover_polygon_visible = visible;
        self
    }

    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

// ---------------------------------------------------------------------------
// HoverIntent
// ---------------------------------------------------------------------------

/// Tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntentState {
    /// No anchor or no polygon.
    #[default]
    Idle,
    /// Polygon defined, evaluating pointer moves.
    Tracking,
    /// Pointer is inside the anchor, the target, or the polygon.
    Over,
    /// Pointer is elsewhere.
    NotOver,
}

type Callback = Box<dyn FnMut()>;

/// Hover-intent tracker for one anchor/target pair.
///
/// Feed events with [`process`](HoverIntent::process). Time is passed in
/// explicitly; call [`poll`](HoverIntent::poll) on each frame or tick so the
/// deferred polygon recomputation fires even without pointer input.
pub struct HoverIntent {
    config: IntentConfig,
    anchor: Option<Rect>,
    target: Option<Rect>,
    viewport: Option<Rect>,
    polygon: HoverPolygon,
    state: IntentState,
    listening: bool,
    recompute_at: Option<Instant>,
    edges: EdgeTrigger,
    overlay: Option<OverlayHandle>,
    on_hover_start: Option<Callback>,
    on_hover_end: Option<Callback>,
}

impl std::fmt::Debug for HoverIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoverIntent")
            .field("state", &self.state)
            .field("listening", &self.listening)
            .field("polygon_set", &self.polygon.is_set())
            .field("recompute_pending", &self.recompute_at.is_some())
            .finish()
    }
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new(IntentConfig::default())
    }
}

impl HoverIntent {
    /// Create a tracker with the given configuration.
    #[must_use]
    pub fn new(config: IntentConfig) -> Self {
        Self {
            config,
            anchor: None,
            target: None,
            viewport: None,
            polygon: HoverPolygon::Unset,
            state: IntentState::Idle,
            listening: false,
            recompute_at: None,
            edges: EdgeTrigger::new(),
            overlay: None,
            on_hover_start: None,
            on_hover_end: None,
        }
    }

    /// Attach the debug overlay. Drawing still requires
    /// `is_hover_polygon_visible`.
    #[must_use]
    pub fn with_overlay(mut self, overlay: OverlayHandle) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Callback for entry into `Over`.
    #[must_use]
    pub fn on_hover_start(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_hover_start = Some(Box::new(callback));
        self
    }

    /// Callback for exit from `Over`.
    #[must_use]
    pub fn on_hover_end(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_hover_end = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn config(&self) -> &IntentConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> IntentState {
        self.state
    }

    /// Tri-state mouse-over flag: `None` until the first determination.
    #[must_use]
    pub const fn is_mouse_over(&self) -> Option<bool> {
        self.edges.last()
    }

    #[must_use]
    pub const fn polygon(&self) -> &HoverPolygon {
        &self.polygon
    }

    /// Whether pointer-move samples are currently evaluated.
    #[must_use]
    pub const fn is_listening(&self) -> bool {
        self.listening
    }

    /// Deadline of the pending polygon recomputation, if one is armed.
    #[must_use]
    pub const fn pending_recompute(&self) -> Option<Instant> {
        self.recompute_at
    }

    /// Process one event, returning the hover transition it caused, if any.
    pub fn process(&mut self, event: &IntentEvent, now: Instant) -> Option<HoverEdge> {
        self.poll(now);

        match *event {
            IntentEvent::Layout(element, rect) => self.on_layout(element, rect, now),
            IntentEvent::Viewport(rect) => {
                self.viewport = Some(rect);
                None
            }
            _ if self.config.is_disabled => None,
            IntentEvent::PointerEnter(_) => self.transition(IntentState::Over),
            IntentEvent::PointerLeave(element) => self.on_leave(element),
            IntentEvent::PointerMove(point) => self.on_move(point),
        }
    }

    /// Fire the deferred polygon recomputation if its deadline has passed.
    ///
    /// Returns `true` when a recomputation ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.recompute_at {
            Some(deadline) if now >= deadline => {
                self.recompute_at = None;
                self.recompute_polygon();
                true
            }
            _ => false,
        }
    }

    /// Enable or disable the tracker.
    pub fn set_disabled(&mut self, disabled: bool, now: Instant) -> Option<HoverEdge> {
        if self.config.is_disabled == disabled {
            return None;
        }
        self.config.is_disabled = disabled;
        if disabled {
            self.recompute_at = None;
            self.reset_polygon();
            self.transition(IntentState::Idle)
        } else {
            self.arm_recompute(now);
            None
        }
    }

    /// Tear down: cancel the pending recomputation, stop listening, and end
    /// an active hover.
    pub fn detach(&mut self) -> Option<HoverEdge> {
        self.anchor = None;
        self.target = None;
        self.recompute_at = None;
        self.reset_polygon();
        self.transition(IntentState::Idle)
    }

    fn on_layout(&mut self, element: Element, rect: Option<Rect>, now: Instant) -> Option<HoverEdge> {
        match element {
            Element::Anchor => self.anchor = rect,
            Element::Target => self.target = rect,
        }
        if rect.is_none() {
            self.recompute_at = None;
            self.reset_polygon();
            return self.transition(IntentState::Idle);
        }
        self.arm_recompute(now);
        None
    }

    fn on_leave(&mut self, element: Element) -> Option<HoverEdge> {
        let leaves_without_target = element == Element::Anchor && self.target.is_none();
        if leaves_without_target || !self.listening {
            return self.transition(IntentState::NotOver);
        }
        None
    }

    fn on_move(&mut self, point: Point) -> Option<HoverEdge> {
        if !self.listening {
            return None;
        }
        let in_anchor = self.anchor.is_some_and(|rect| rect.contains(point));
        let in_target = self.target.is_some_and(|rect| rect.contains(point));
        let far_x = self.viewport.map_or(0.0, |rect| rect.right());
        let next = if in_anchor || in_target || self.polygon.contains(point, far_x) {
            IntentState::Over
        } else {
            IntentState::NotOver
        };
        self.transition(next)
    }

    fn arm_recompute(&mut self, now: Instant) {
        if self.config.is_disabled || self.anchor.is_none() || self.target.is_none() {
            self.recompute_at = None;
            return;
        }
        self.recompute_at = Some(now + self.config.settle_delay);
    }

    fn recompute_polygon(&mut self) {
        self.polygon = compute_hover_polygon(self.anchor, self.target);
        match self.polygon {
            HoverPolygon::Set(points) => {
                self.listening = true;
                if self.config.is_hover_polygon_visible
                    && let Some(overlay) = &self.overlay
                {
                    overlay.draw(points);
                }
                if self.state == IntentState::Idle {
                    self.state = IntentState::Tracking;
                }
            }
            HoverPolygon::Unset => self.reset_polygon(),
        }
    }

    fn reset_polygon(&mut self) {
        self.polygon = HoverPolygon::Unset;
        self.listening = false;
        if self.config.is_hover_polygon_visible
            && let Some(overlay) = &self.overlay
        {
            overlay.clear();
        }
    }

    fn transition(&mut self, next: IntentState) -> Option<HoverEdge> {
        self.state = next;
        let edge = match next {
            IntentState::Over => self.edges.update(true),
            IntentState::NotOver => self.edges.update(false),
            IntentState::Idle | IntentState::Tracking => {
                if self.edges.last() == Some(true) {
                    self.edges.update(false)
                } else {
                    None
                }
            }
        };

        match edge {
            Some(HoverEdge::Start) => {
                if let Some(callback) = self.on_hover_start.as_mut() {
                    callback();
                }
            }
            Some(HoverEdge::End) => {
                if let Some(callback) = self.on_hover_end.as_mut() {
                    callback();
                }
            }
            None => {}
        }
        if edge.is_some() {
            tracing::trace!(state = ?next, edge = ?edge, "hover_intent.transition");
        }
        edge
    }
}
