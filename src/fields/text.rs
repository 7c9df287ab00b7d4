//! Free text codec: 13 characters of base-42 text in a 71-bit field.

use crate::constants::CHARSET_BASE42;
use crate::fields::radix::FromStrCustomRadix;
use crate::fields::FieldEncodeError;

/// Encode a free text message into its 71-bit value, base-42 over the text
/// right-padded with spaces to 13 characters.
pub fn free_text_to_f71(text: &str) -> Result<u128, FieldEncodeError> {
    let mut padded = String::from(text);
    while padded.len() < 13 {
        padded.push(' ');
    }
    padded.truncate(13);

    u128::from_str_custom_radix(&padded, CHARSET_BASE42)
        .map_err(|_| FieldEncodeError::InvalidTextChar)
}
