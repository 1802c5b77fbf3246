//! End-to-end: a menu button themed from one base color whose flyout stays
//! open while the pointer crosses the gap.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chromatin::prelude::*;
use chromatin::style::meets_wcag_aa;
use chromatin::{HoverOverlay, RecordingDiagnostics};

#[test]
fn themed_menu_keeps_flyout_open_across_gap() {
    let diagnostics = RecordingDiagnostics::new();
    let engine = ColorEngine::with_diagnostics(diagnostics.clone());

    let ramp = engine
        .create_color_ramp("#23704a", &RampOptions::default())
        .unwrap();
    let darkest = ramp.get(90).unwrap_or(Color::BLACK);
    assert!(meets_wcag_aa(Color::WHITE, darkest));
    assert!(diagnostics.is_empty());

    let log = Rc::new(RefCell::new(Vec::new()));
    let (on_start, on_end) = (Rc::clone(&log), Rc::clone(&log));
    let overlay = HoverOverlay::new();
    let mut intent = HoverIntent::new(IntentConfig::default().with_polygon_visible(true))
        .with_overlay(overlay.handle())
        .on_hover_start(move || on_start.borrow_mut().push("start"))
        .on_hover_end(move || on_end.borrow_mut().push("end"));

    let t0 = Instant::now();
    let button = Rect::new(10.0, 10.0, 80.0, 24.0);
    let menu = Rect::new(110.0, 0.0, 200.0, 300.0);

    intent.process(&IntentEvent::Viewport(Rect::new(0.0, 0.0, 1280.0, 720.0)), t0);
    intent.process(&IntentEvent::Layout(Element::Anchor, Some(button)), t0);
    intent.process(&IntentEvent::PointerEnter(Element::Anchor), t0);
    intent.process(&IntentEvent::Layout(Element::Target, Some(menu)), t0);

    let settled = t0 + Duration::from_millis(120);
    assert!(intent.poll(settled));
    assert!(overlay.to_svg().is_some());

    intent.process(&IntentEvent::PointerLeave(Element::Anchor), settled);
    for x in [95.0, 100.0, 105.0] {
        intent.process(&IntentEvent::moved(x, 20.0), settled);
    }
    intent.process(&IntentEvent::PointerEnter(Element::Target), settled);
    intent.process(&IntentEvent::PointerLeave(Element::Target), settled);
    intent.process(&IntentEvent::moved(600.0, 600.0), settled);

    assert_eq!(*log.borrow(), vec!["start", "end"]);
    assert_eq!(intent.is_mouse_over(), Some(false));

    intent.process(&IntentEvent::Layout(Element::Target, None), settled);
    assert!(overlay.polygon().is_none());
    overlay.shutdown();
}
