//! Alert market classification.
//!
//! Alerts arrive with an optional explicit market field; when it is blank
//! the market name is recovered from the message text, which for generated
//! alerts always leads with the market name followed by the phrase
//! "large speculators" (see `alert_gen`).

use crate::domain::{ClassifiedAlert, RawAlert};

const MARKET_PHRASE: &str = "large speculators";

/// Resolve the canonical market for a raw alert. Total function: an
/// unresolvable market is the valid outcome `None`, not an error.
pub fn classify(alert: RawAlert) -> ClassifiedAlert {
    let resolved_market = match alert.market.as_deref().map(str::trim) {
        Some(market) if !market.is_empty() => Some(market.to_string()),
        _ => market_from_message(&alert.message),
    };

    ClassifiedAlert {
        alert,
        resolved_market,
    }
}

/// Extract the text preceding the first occurrence of "large speculators"
/// (case-insensitive, whitespace before, word boundary after), trimmed.
fn market_from_message(message: &str) -> Option<String> {
    let bytes = message.as_bytes();
    let phrase = MARKET_PHRASE.as_bytes();

    for start in 0..bytes.len().saturating_sub(phrase.len() - 1) {
        let window = &bytes[start..start + phrase.len()];
        if !window.eq_ignore_ascii_case(phrase) {
            continue;
        }

        // The phrase must follow whitespace and end at a word boundary.
        let preceded_by_space = start > 0 && bytes[start - 1].is_ascii_whitespace();
        let boundary_after = bytes
            .get(start + phrase.len())
            .is_none_or(|b| !b.is_ascii_alphanumeric() && *b != b'_');
        if !preceded_by_space || !boundary_after {
            continue;
        }

        // The phrase is pure ASCII, so `start` is a char boundary.
        return Some(message[..start].trim().to_string());
    }

    None
}
