#![no_main]

use chromatin_core::SilentDiagnostics;
use chromatin_style::{
    CONTRAST_NOT_COMPUTABLE, ColorEngine, RampOptions, ThemeMode, hex_to_rgb_array,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 64 {
        return;
    }
    let engine = ColorEngine::with_diagnostics(SilentDiagnostics);

    // Parsing must never panic and must agree with the ramp constructor.
    let parsed = engine.hex_to_color(text);
    let ramp = engine.create_color_ramp(text, &RampOptions::default().with_mode(ThemeMode::Dark));
    assert_eq!(parsed.is_valid(), ramp.is_ok());

    match parsed.ok() {
        Some(color) => {
            // Derived strings re-parse to the same color.
            assert_eq!(engine.hex_to_color(&color.to_hex()).ok(), Some(color));
            let ratio = engine.contrast_ratio(color, "#ffffff");
            assert!((1.0..=21.0).contains(&ratio));
            if let Ok(ramp) = ramp {
                assert_eq!(ramp.base(), color);
            }
        }
        None => {
            assert_eq!(parsed.hex(), "");
            assert_eq!(engine.contrast_ratio(parsed, "#ffffff"), CONTRAST_NOT_COMPUTABLE);
        }
    }

    let _ = hex_to_rgb_array(text);
});
