//! Fuzz target for number formatting.
//!
//! Tests that formatting never panics and always produces the fixed-width
//! grouped shape.

#![no_main]

use cc_display::format::{format_number, separator_count};
use cc_display::CardType;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let types = [
        CardType::Unknown,
        CardType::Visa,
        CardType::Mastercard,
        CardType::Amex,
        CardType::Discover,
    ];

    for ty in types {
        let out = format_number(Some(data), ty);
        assert_eq!(out.chars().count(), ty.width() + separator_count(ty));

        let out = format_number(None, ty);
        assert_eq!(out.chars().count(), ty.width() + separator_count(ty));
    }
});
