//! Callsign field codecs.
//!
//! A standard callsign occupies a 28-bit slot whose value space is shared
//! with the special tokens (DE, QRZ, CQ and its directed variants) and the
//! 22-bit hash range; `NTOKENS + MAX22` offsets the alphabet-coded values
//! past both. Compound callsigns use a flat base-38 coding over 11
//! characters instead.

use crate::constants::*;
use crate::fields::radix::{FromMixedRadixStr, FromStrCustomRadix};
use crate::fields::FieldEncodeError;

/// Slot alphabets for the six character positions of a standard callsign.
const CALLSIGN_TABLES: [&str; 6] = [
    CHARSET_A1, CHARSET_A2, CHARSET_A3, CHARSET_A4, CHARSET_A4, CHARSET_A4,
];

/// Encode a standard callsign into its 28-bit value.
///
/// The token is aligned so that its digit falls in the numeric slot (a call
/// like `K1ABC` gains a leading space) and right-padded with spaces to six
/// characters before the per-position alphabet lookup.
pub fn std_call_to_28(call: &str) -> Result<u32, FieldEncodeError> {
    let mut aligned = String::with_capacity(6);
    if call.len() >= 2 && call.as_bytes()[1].is_ascii_digit() {
        aligned.push(' ');
    }
    aligned.push_str(call);
    while aligned.len() < 6 {
        aligned.push(' ');
    }
    aligned.truncate(6);

    let value = u32::from_mixed_radix_str(&aligned, &CALLSIGN_TABLES)
        .map_err(|_| FieldEncodeError::InvalidCallsignChar)?;

    Ok(NTOKENS + MAX22 + value)
}

/// Encode a non-standard (compound) callsign into its 58-bit value,
/// base-38 over the token right-padded with spaces to 11 characters.
pub fn nonstd_to_58(call: &str) -> Result<u64, FieldEncodeError> {
    let mut padded = String::from(call);
    while padded.len() < 11 {
        padded.push(' ');
    }
    padded.truncate(11);

    u64::from_str_custom_radix(&padded, CHARSET_BASE38)
        .map_err(|_| FieldEncodeError::InvalidCallsignChar)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod std_call_to_28 {
        use super::*;

        #[test]
        fn digit_second_callsigns_are_aligned() {
            assert_eq!(std_call_to_28("K1ABC"), Ok(10_214_965));
            assert_eq!(std_call_to_28("W9XYZ"), Ok(12_751_800));
            assert_eq!(std_call_to_28("G4ABC"), Ok(9_486_694));
        }

        #[test]
        fn six_character_callsigns_pack_directly() {
            assert_eq!(std_call_to_28("DL1ABC"), Ok(109_614_115));
        }

        #[test]
        fn short_callsigns_are_padded() {
            assert_eq!(std_call_to_28("K1JT"), Ok(10_222_009));
            assert_eq!(std_call_to_28("W1AW"), Ok(12_577_489));
        }

        #[test]
        fn values_land_in_the_callsign_range() {
            // the alphabet-coded range sits above the token and hash spaces
            // and spans 37*36*10*27^3 values
            let lo = NTOKENS + MAX22;
            let hi = lo + 37 * 36 * 10 * 27 * 27 * 27;
            for call in ["K1ABC", "W9XYZ", "DL1ABC", "K1JT", "N0YPR"] {
                let n28 = std_call_to_28(call).unwrap();
                assert!(n28 >= lo && n28 < hi, "{call} out of range: {n28}");
            }
        }

        #[test]
        fn invalid_character_is_rejected() {
            assert_eq!(
                std_call_to_28("K1AB?"),
                Err(FieldEncodeError::InvalidCallsignChar)
            );
            assert_eq!(
                std_call_to_28("K+ABC"),
                Err(FieldEncodeError::InvalidCallsignChar)
            );
        }
    }

    mod nonstd_to_58 {
        use super::*;

        #[test]
        fn compound_callsigns_pack_base38() {
            assert_eq!(nonstd_to_58("PJ4/K1ABC"), Ok(166_563_865_821_947_300));
            assert_eq!(nonstd_to_58("KH1/KH7Z"), Ok(134_829_332_265_870_432));
        }

        #[test]
        fn blank_is_zero() {
            assert_eq!(nonstd_to_58(""), Ok(0));
        }

        #[test]
        fn invalid_character_is_rejected() {
            assert_eq!(
                nonstd_to_58("PJ4?K1ABC"),
                Err(FieldEncodeError::InvalidCallsignChar)
            );
        }
    }
}
