//! Maidenhead grid locator codecs.

use crate::constants::*;
use crate::fields::radix::FromMixedRadixStr;
use crate::fields::FieldEncodeError;

/// Encode a 4-character locator (`FN42`) into its 15-bit value.
pub fn grid4_to_15(token: &str) -> Result<u16, FieldEncodeError> {
    let tables = [
        CHARSET_GRID_FIELD,
        CHARSET_GRID_FIELD,
        CHARSET_NUMERIC,
        CHARSET_NUMERIC,
    ];
    let value =
        u32::from_mixed_radix_str(token, &tables).map_err(|_| FieldEncodeError::InvalidGridChar)?;
    Ok(value as u16)
}

/// Encode a 6-character extended locator (`JO62HM`) into its 25-bit value.
pub fn grid6_to_25(token: &str) -> Result<u32, FieldEncodeError> {
    let tables = [
        CHARSET_GRID_FIELD,
        CHARSET_GRID_FIELD,
        CHARSET_NUMERIC,
        CHARSET_NUMERIC,
        CHARSET_GRID_SUBSQUARE,
        CHARSET_GRID_SUBSQUARE,
    ];
    u32::from_mixed_radix_str(token, &tables).map_err(|_| FieldEncodeError::InvalidGridChar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_character_grids() {
        assert_eq!(grid4_to_15("FN42"), Ok(10_342));
        assert_eq!(grid4_to_15("EN37"), Ok(8_537));
        assert_eq!(grid4_to_15("JO62"), Ok(17_662));
        assert_eq!(grid4_to_15("AA00"), Ok(0));
        assert_eq!(grid4_to_15("RR99"), Ok(32_399));
    }

    #[test]
    fn six_character_grids() {
        assert_eq!(grid6_to_25("JO62HM"), Ok(10_173_492));
        assert_eq!(grid6_to_25("AA00AA"), Ok(0));
        assert_eq!(grid6_to_25("RR99XX"), Ok(18_662_399));
    }

    #[test]
    fn out_of_alphabet_characters_are_rejected() {
        // 'S' is beyond the A-R field range
        assert_eq!(grid4_to_15("SN42"), Err(FieldEncodeError::InvalidGridChar));
        assert_eq!(grid4_to_15("FN4X"), Err(FieldEncodeError::InvalidGridChar));
        // 'Z' is beyond the A-X subsquare range
        assert_eq!(grid6_to_25("JO62HZ"), Err(FieldEncodeError::InvalidGridChar));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(grid4_to_15("FN4"), Err(FieldEncodeError::InvalidGridChar));
        assert_eq!(grid4_to_15("FN42H"), Err(FieldEncodeError::InvalidGridChar));
    }
}
