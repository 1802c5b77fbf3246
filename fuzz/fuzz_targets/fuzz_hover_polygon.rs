#![no_main]

use arbitrary::Arbitrary;
use chromatin_core::{Point, Rect, compute_hover_polygon};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    anchor: Option<(i16, i16, u8, u8)>,
    target: Option<(i16, i16, u8, u8)>,
    probe: (i16, i16),
}

fn rect((x, y, w, h): (i16, i16, u8, u8)) -> Rect {
    Rect::new(x.into(), y.into(), w.into(), h.into())
}

fuzz_target!(|input: Input| {
    let anchor = input.anchor.map(rect);
    let target = input.target.map(rect);
    let polygon = compute_hover_polygon(anchor, target);

    // Set exactly when both elements are present.
    assert_eq!(polygon.is_set(), anchor.is_some() && target.is_some());

    // Hit testing must never panic, whatever the far edge.
    let probe = Point::new(input.probe.0.into(), input.probe.1.into());
    let _ = polygon.contains(probe, 0.0);
    let inside = polygon.contains(probe, 1.0e6);

    // A probe above or below every corner cannot be inside.
    if let (Some(a), Some(t)) = (anchor, target) {
        let bounds = a.union(&t);
        if probe.y < bounds.top() || probe.y > bounds.bottom() {
            assert!(!inside, "{probe:?} outside {bounds:?}");
        }
    }
});
