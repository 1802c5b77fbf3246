#![forbid(unsafe_code)]

//! Pointer and layout events consumed by the hover-intent engine.
//!
//! The UI layer translates its native pointer-enter/leave/move callbacks and
//! element mount/resize notifications into [`IntentEvent`] values and feeds
//! them to [`HoverIntent::process`](crate::hover::HoverIntent::process).

use crate::geometry::{Point, Rect};

/// Which tracked element an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// The element that opens the flyout (button, menu item).
    Anchor,
    /// The flyout itself (menu, tooltip).
    Target,
}

/// Input to the hover-intent engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntentEvent {
    /// Pointer entered an element.
    PointerEnter(Element),
    /// Pointer left an element.
    PointerLeave(Element),
    /// Pointer moved to a new viewport position.
    PointerMove(Point),
    /// An element was mounted, moved, or resized. `None` means it is gone.
    Layout(Element, Option<Rect>),
    /// The viewport changed size.
    Viewport(Rect),
}

impl IntentEvent {
    /// Convenience constructor for a pointer move.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::PointerMove(Point::new(x, y))
    }

    /// Whether this event carries pointer input rather than layout.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerEnter(_) | Self::PointerLeave(_) | Self::PointerMove(_)
        )
    }
}
