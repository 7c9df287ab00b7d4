//! Flag and small-integer field codecs.
//!
//! These consume their matching tokens from a [`TokenView`] so a token used
//! by one field never satisfies another.

use crate::message::tokens::{base_call, CallSuffix};
use crate::message::TokenView;

/// Acknowledgement codes carried in a 2-bit field by some subtypes.
const ACK_TOKENS: [(&str, u8); 3] = [("RRR", 1), ("RR73", 2), ("73", 3)];

/// Consume a standalone `R` acknowledgement token, wherever it appears.
pub fn encode_ack_r1(view: &mut TokenView<'_>) -> bool {
    view.take_first(|t| t == "R").is_some()
}

/// Report a `/P` portable designator on any unconsumed token.
///
/// The token itself stays in place; the callsign codec strips the
/// designator when it encodes the call.
pub fn encode_p1(view: &TokenView<'_>) -> bool {
    view.remaining()
        .any(|(_, token)| base_call(token).1 == CallSuffix::Portable)
}

/// Consume a leading `TU` courtesy token.
pub fn encode_t1(view: &mut TokenView<'_>) -> bool {
    if view.get(0) == Some("TU") && !view.is_consumed(0) {
        view.consume(0);
        return true;
    }
    false
}

/// Consume a trailing acknowledgement token: `RRR` = 1, `RR73` = 2, `73` = 3.
pub fn encode_r2(view: &mut TokenView<'_>) -> u8 {
    for (token, code) in ACK_TOKENS {
        if view.take_first(|t| t == token).is_some() {
            return code;
        }
    }
    0
}

/// Encode an ARRL Field Day class letter `A`..`F` as 0..=5.
pub fn encode_fdclass(class: char) -> u8 {
    if ('A'..='F').contains(&class) {
        return class as u8 - b'A';
    }
    0
}

/// Encode a signal report in dB, valid over [-30, +30], as `(db + 30) / 2`.
pub fn encode_sigreport(token: &str) -> Option<u8> {
    let db: i8 = token.parse().ok()?;
    if !(-30..=30).contains(&db) {
        return None;
    }
    Some(((db + 30) / 2) as u8)
}
