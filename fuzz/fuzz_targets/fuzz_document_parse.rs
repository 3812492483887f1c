#![no_main]

use camera_menu::{Fidelity, MenuDocument};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Any text either parses or reports an error; a parsed document must
    // serialize and parse again.
    if let Ok(document) = MenuDocument::parse("fuzz", text) {
        if let Ok(saved) = document.to_csv(Fidelity::Full) {
            let _ = MenuDocument::parse("fuzz", &saved);
        }
    }
});
