//! WhatsApp order hand-off
//!
//! Checkout never touches a payment rail: the storefront composes a
//! pre-filled message and opens a wa.me chat with the florist. The recipient
//! is a human reading the text, so the exact line layout IS the wire format
//! and must stay stable.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::catalog::Flower;
use crate::domain::aggregates::cart::CartLine;
use crate::domain::aggregates::order::OrderDraft;
use crate::domain::value_objects::Rupees;

/// Everything `encodeURIComponent` escapes. wa.me expects that dialect in the
/// `text` query parameter; non-ASCII goes out as UTF-8 percent triplets.
const MESSAGE_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Renders the full order summary. Total over any input: an empty bag still
/// yields a well-formed message with no item lines and a zero total. The
/// passed-in `total` is trusted as-is; the cart guarantees it matches the
/// lines.
pub fn order_message(lines: &[CartLine], total: Rupees, draft: &OrderDraft) -> String {
    let intro = match draft.customer_name() {
        Some(name) => format!("Hi, I am {name}."),
        None => "Hi,".to_string(),
    };

    let items = lines
        .iter()
        .map(|l| format!("• {}x {} ({})", l.quantity, l.name, l.line_total()))
        .collect::<Vec<_>>()
        .join("\n");

    let note = draft
        .note()
        .map(|n| format!("\n*Note:* {n}"))
        .unwrap_or_default();

    format!(
        "{intro} I would like to place an order via the Mogra website.\n\n\
         *Order Summary:*\n{items}\n\n\
         *Total Estimate:* {total}{note}\n\n\
         Please confirm availability and delivery details."
    )
}

/// The order summary as a ready-to-open chat link.
pub fn order_link(number: &str, lines: &[CartLine], total: Rupees, draft: &OrderDraft) -> String {
    chat_link(number, &order_message(lines, total, draft))
}

/// One-flower availability ask, straight from a product card. Bypasses the
/// bag entirely.
pub fn quick_order_message(flower: &Flower) -> String {
    format!(
        "Hi Mogra, I would like to order the {} ({}). Is it available?",
        flower.name, flower.price
    )
}

pub fn quick_order_link(number: &str, flower: &Flower) -> String {
    chat_link(number, &quick_order_message(flower))
}

fn chat_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, utf8_percent_encode(message, MESSAGE_TEXT))
}
