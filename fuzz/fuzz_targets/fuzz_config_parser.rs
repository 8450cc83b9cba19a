//! Fuzz target for `plateguard.toml` parsing and resolution.
//!
//! Parsing and resolving may fail on bad input but must never panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
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

    if let Ok(cfg) = plateguard_settings::parse_config_toml(text) {
        let _ = plateguard_settings::resolve_config(cfg, Default::default());
    }
});
