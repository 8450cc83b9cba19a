//! Fuzz target for catalog JSON parsing.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_catalog_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(model) = plateguard_catalog::parse_catalog_json(text) {
        // Every accepted item has a non-empty name.
        assert!(model.foods.iter().all(|f| !f.name.trim().is_empty()));
        assert!(model.recipes.iter().all(|r| !r.name.trim().is_empty()));
    }
});
