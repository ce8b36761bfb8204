//! Fuzz target for network detection.
//!
//! Tests that detection never panics on arbitrary input and always maps to
//! a valid width.

#![no_main]

use cc_display::detect::{detect_from_digits, detect_type};
use cc_display::CardType;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let ty = detect_type(data);
    match ty {
        CardType::Amex => assert_eq!(ty.width(), 15),
        _ => assert_eq!(ty.width(), 16),
    }

    // The digit-slice entry point must agree with itself on raw bytes
    let digits: Vec<u8> = data.bytes().filter(|b| b.is_ascii_digit()).map(|b| b - b'0').collect();
    let _ = detect_from_digits(&digits);
});
