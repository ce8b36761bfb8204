//! Fuzz target for expiry formatting.
//!
//! Tests that expiry formatting never panics and always produces the
//! MM/YY[YY] shape.

#![no_main]

use cc_display::expiry::format_expiry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let out = format_expiry(data);

    let (month, year) = out.split_once('/').expect("output always contains /");
    assert_eq!(month.chars().count(), 2);
    let ylen = year.chars().count();
    assert!((2..=4).contains(&ylen));
});
