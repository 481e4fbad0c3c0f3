//! Fuzz target for field sanitization.
//!
//! Sanitized output never contains markup and sanitizing twice changes nothing.

#![no_main]

use formcheck_xss::sanitize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let clean = sanitize(input);
    assert!(!clean.contains('<'));
    assert!(!clean.contains('>'));
    assert_eq!(clean.trim(), clean);
    assert_eq!(sanitize(&clean), clean);
});
