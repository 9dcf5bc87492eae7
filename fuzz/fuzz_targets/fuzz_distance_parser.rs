#![no_main]

use floorplan_editor::core::parse_distance_feet;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Gültige Eingaben liefern immer eine endliche, nicht negative Länge
        if let Ok(feet) = parse_distance_feet(input) {
            assert!(feet.is_finite() && feet >= 0.0, "{input:?} -> {feet}");
        }
    }
});
