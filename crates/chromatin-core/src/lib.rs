#![forbid(unsafe_code)]

//! Core: geometry, pointer events, and hover-intent tracking.
//!
//! # Role in Chromatin
//! `chromatin-core` is the interaction layer. It owns the geometric
//! primitives used for hit testing, the event vocabulary UI components feed
//! in, and the hover-intent engine that keeps flyouts open while the pointer
//! travels towards them.
//!
//! # Primary responsibilities
//! - **Geometry**: points, rectangles, segments, and orientation tests.
//! - **HoverIntent**: edge-triggered hover tracking across an anchor/target pair.
//! - **Diagnostics**: the injected sink every total operation reports misuse to.
//! - **Overlay**: an owned debug surface that shows the active hover polygon.
//!
//! # How it fits in the system
//! `chromatin-style` reports invalid colors through [`Diagnostics`], and the
//! `chromatin` facade re-exports both crates. Nothing here renders or touches
//! a DOM; callers measure layout and pass plain values in.

pub mod diagnostics;
pub mod event;
pub mod geometry;
pub mod hover;
pub mod overlay;

pub use diagnostics::{
    BuildProfile, Diagnostics, RecordingDiagnostics, SilentDiagnostics, TracingDiagnostics,
    diagnostics_for,
};
pub use event::{Element, IntentEvent};
pub use geometry::{Point, Rect, Segment, ccw, segments_intersect};
pub use hover::{
    DEFAULT_SETTLE_DELAY, EdgeTrigger, HoverEdge, HoverIntent, HoverPolygon, IntentConfig,
    IntentState, Quadrant, compute_hover_polygon, point_in_polygon,
};
pub use overlay::{HoverOverlay, OverlayHandle};
