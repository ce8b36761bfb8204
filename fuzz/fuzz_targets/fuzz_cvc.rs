//! Fuzz target for security code formatting.
//!
//! Tests that cvc formatting never panics and never exceeds four
//! characters.

#![no_main]

use cc_display::cvc::format_cvc;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let out = format_cvc(Some(data));
    assert!(out.chars().count() <= 4);

    assert_eq!(format_cvc(None), "•••");
});
