//! Field codecs for the 77-bit payload.
//!
//! Each codec turns one message field (callsign, grid locator, flag token,
//! free text) into the integer the payload packer lays down. They are pure
//! with respect to the message text; token consumption is handled by the
//! caller through [`crate::message::TokenView`].

use snafu::Snafu;

pub mod callsign;
pub mod flags;
pub mod grid;
pub mod radix;
pub mod text;

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum FieldEncodeError {
    /// Callsign contains a character outside its slot alphabet
    #[snafu(display("callsign contains an invalid character"))]
    InvalidCallsignChar,

    /// Grid locator contains a character outside its alphabet
    #[snafu(display("grid locator contains an invalid character"))]
    InvalidGridChar,

    /// Free text contains a character outside the base-42 alphabet
    #[snafu(display("text contains an invalid character"))]
    InvalidTextChar,
}
