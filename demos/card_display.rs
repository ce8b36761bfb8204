//! Card display formatting example.
//!
//! Run with: `cargo run --example card_display`

use cc_display::{CardDisplayState, CardFields};

fn show(label: &str, state: &CardDisplayState, fields: &CardFields) {
    let out = state.render(fields);
    println!("--- {} ---", label);
    println!("  network: {}", out.card_type);
    println!("  number:  {}", out.number);
    println!("  name:    {}", out.name);
    println!("  expiry:  {}", out.expiry);
    println!("  cvc:     {}", out.cvc);
    println!();
}

fn main() {
    println!("=== Card Display Formatting ===\n");

    let mut state = CardDisplayState::new();
    let mut fields = CardFields::new();

    // A blank card face: all placeholders
    show("blank card", &state, &fields);

    // The user types the first digits of an amex number
    fields.number = Some("3782".to_string());
    state.set_number(fields.number.as_deref());
    show("partial amex", &state, &fields);

    // The full set of fields arrives
    fields.number = Some("378282246310005".to_string());
    fields.name = "Jane Doe".to_string();
    fields.expiry = "1230".to_string();
    fields.cvc = Some("1234".to_string());
    state.set_number(fields.number.as_deref());
    show("complete amex", &state, &fields);

    // Switching to a visa number reclassifies and regroups
    fields.number = Some("4111111111111111".to_string());
    fields.cvc = Some("123".to_string());
    state.set_number(fields.number.as_deref());
    show("complete visa", &state, &fields);

    // Unparseable expiry degrades to the placeholder, nothing errors
    fields.expiry = "13/ab".to_string();
    show("bad expiry", &state, &fields);
}
