//! Payload packer: assemble the 77-bit payload for an FT8 message.
//!
//! Only the standard two-callsign-plus-grid subtype is encodable; the other
//! subtypes are classified and refused here. Field codecs run against a
//! [`TokenView`] and consume the tokens they encode, so the grid encoder
//! never sees a token the callsign encoder already claimed.

use bitvec::prelude::*;
use snafu::Snafu;
use tracing::debug;

use crate::constants::PAYLOAD_BITS;
use crate::fields::callsign::std_call_to_28;
use crate::fields::flags::encode_ack_r1;
use crate::fields::grid::grid4_to_15;
use crate::fields::FieldEncodeError;
use crate::message::subtype::Subtype;
use crate::message::tokens::{self, CallSuffix};
use crate::message::{Message, TokenView};
use crate::util::bitvec_utils::PackBitvecFieldType;

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum PackError {
    /// Classified subtype has no payload encoder yet
    #[snafu(display("unsupported message subtype: {subtype}"))]
    UnsupportedSubtype { subtype: Subtype },

    /// A field codec rejected its token
    #[snafu(display("{source}"), context(false))]
    Field { source: FieldEncodeError },
}

/// Pack a classified message into its 77-bit payload.
pub fn pack(message: &Message) -> Result<BitVec<u8, Msb0>, PackError> {
    let subtype = message.subtype();
    match subtype {
        Subtype::Standard => pack_standard(message),
        _ => Err(PackError::UnsupportedSubtype { subtype }),
    }
}

/// Pack a standard message: c28a, c28b, r1, R1, g15, i3, one unused bit.
pub fn pack_standard(message: &Message) -> Result<BitVec<u8, Msb0>, PackError> {
    let mut view = message.view();

    let (c28a, _) = encode_c28(&mut view)?;
    let (c28b, rover) = encode_c28(&mut view)?;

    let g15 = match view.take_first(tokens::is_grid4) {
        Some((_, token)) => grid4_to_15(token)?,
        None => 0,
    };

    let r1 = rover == CallSuffix::Rover;
    let ack = encode_ack_r1(&mut view);

    debug!(c28a, c28b, g15, r1, ack, "packed standard fields");

    let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(PAYLOAD_BITS);
    c28a.pack_into_bitvec(&mut bits, 28);
    c28b.pack_into_bitvec(&mut bits, 28);
    r1.pack_into_bitvec(&mut bits, 1);
    ack.pack_into_bitvec(&mut bits, 1);
    g15.pack_into_bitvec(&mut bits, 15);
    let i3 = Subtype::Standard.i3().unwrap_or(0);
    i3.pack_into_bitvec(&mut bits, 3);
    // bit 76 is unused in this layout
    bits.push(false);

    Ok(bits)
}

/// Encode one 28-bit callsign slot, consuming the tokens it claims.
///
/// Special slots are tried in order: DE, QRZ, then the directed-CQ forms
/// (`CQ NNN`, `CQ X`..`CQ XXXX`) and plain CQ, and finally the first
/// unconsumed standard callsign. Returns the 28-bit value and the rover
/// suffix of the matched callsign, if any.
fn encode_c28(view: &mut TokenView<'_>) -> Result<(u32, CallSuffix), FieldEncodeError> {
    if view.take_first(|t| t == "DE").is_some() {
        return Ok((0, CallSuffix::None));
    }
    if view.take_first(|t| t == "QRZ").is_some() {
        return Ok((1, CallSuffix::None));
    }

    let cq = view.remaining().find(|(_, t)| *t == "CQ");
    if let Some((cq_index, _)) = cq {
        let modifier = view.remaining().find(|(i, _)| *i > cq_index);
        if let Some((mod_index, token)) = modifier {
            if token.len() <= 3 && token.bytes().all(|b| b.is_ascii_digit()) {
                // CQ NNN, 0..=999
                let number: u32 = token.parse().unwrap_or(0);
                view.consume(cq_index);
                view.consume(mod_index);
                return Ok((3 + number, CallSuffix::None));
            }
            if (1..=4).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_uppercase()) {
                // directed CQ, base-26 over the letters
                let mut value = 0u32;
                for b in token.bytes() {
                    value = value * 26 + u32::from(b - b'A');
                }
                let base = match token.len() {
                    1 => 1_004,
                    2 => 1_031,
                    3 => 1_760,
                    _ => 21_443,
                };
                view.consume(cq_index);
                view.consume(mod_index);
                return Ok((base + value, CallSuffix::None));
            }
        }
        view.consume(cq_index);
        return Ok((2, CallSuffix::None));
    }

    if let Some((_, token)) = view.take_first(tokens::is_callsign) {
        let (base, suffix) = tokens::base_call(token);
        return Ok((std_call_to_28(base)?, suffix));
    }

    Ok((0, CallSuffix::None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::bitvec_utils::FromBitSlice;

    fn payload(text: &str) -> BitVec<u8, Msb0> {
        let message = Message::try_from(text).unwrap();
        pack(&message).unwrap()
    }

    fn field(bits: &BitVec<u8, Msb0>, lo: usize, width: usize) -> u128 {
        u128::from_bitslice(&bits[lo..lo + width])
    }

    mod c28_special_slots {
        use super::*;

        fn c28_of(text: &str) -> u32 {
            let message = Message::try_from(text).unwrap();
            let mut view = message.view();
            encode_c28(&mut view).unwrap().0
        }

        #[test]
        fn de_and_qrz_and_cq() {
            assert_eq!(c28_of("DE K1ABC FN42"), 0);
            assert_eq!(c28_of("QRZ K1ABC FN42"), 1);
            assert_eq!(c28_of("CQ K1ABC FN42"), 2);
        }

        #[test]
        fn numeric_cq() {
            assert_eq!(c28_of("CQ 000 K1ABC FN42"), 3);
            assert_eq!(c28_of("CQ 123 K1ABC FN42"), 126);
            assert_eq!(c28_of("CQ 999 K1ABC FN42"), 1_002);
        }

        #[test]
        fn directed_cq() {
            assert_eq!(c28_of("CQ A K1ABC FN42"), 1_004);
            assert_eq!(c28_of("CQ Z K1ABC FN42"), 1_029);
            assert_eq!(c28_of("CQ DX K1ABC FN42"), 1_031 + 3 * 26 + 23);
            assert_eq!(c28_of("CQ TEST K1ABC FN42"), 358_578);
        }

        #[test]
        fn matched_tokens_are_consumed() {
            let message = Message::try_from("CQ TEST K1ABC FN42").unwrap();
            let mut view = message.view();
            let (first, _) = encode_c28(&mut view).unwrap();
            let (second, _) = encode_c28(&mut view).unwrap();
            assert_eq!(first, 358_578);
            assert_eq!(second, 10_214_965);
        }

        #[test]
        fn callsign_like_token_does_not_become_a_cq_modifier() {
            // K1ABC carries a digit, so CQ packs alone
            assert_eq!(c28_of("CQ K1ABC FN42"), 2);
        }
    }

    mod standard_payload {
        use super::*;

        #[test]
        fn cq_with_grid() {
            let bits = payload("CQ K1ABC FN42");
            assert_eq!(bits.len(), 77);
            assert_eq!(field(&bits, 0, 28), 2);
            assert_eq!(field(&bits, 28, 28), 10_214_965);
            assert_eq!(field(&bits, 56, 1), 0);
            assert_eq!(field(&bits, 57, 1), 0);
            assert_eq!(field(&bits, 58, 15), 10_342);
            assert_eq!(field(&bits, 73, 3), 1);
            assert_eq!(field(&bits, 76, 1), 0);
        }

        #[test]
        fn rover_and_acknowledgement_flags() {
            let bits = payload("K1ABC/R W9XYZ/R R EN37");
            assert!(bits.any());
            // r1 reflects the second callsign's rover suffix, R1 the bare R token
            assert!(bits[56]);
            assert!(bits[57]);
            assert_eq!(field(&bits, 0, 28), 10_214_965);
            assert_eq!(field(&bits, 28, 28), 12_751_800);
            assert_eq!(field(&bits, 58, 15), 8_537);
        }

        #[test]
        fn known_payload_bits() {
            let bits = payload("CQ K1ABC FN42");
            let expected =
                "00000000000000000000000000100000100110111101111000110101000101000011001100010";
            let rendered: String = bits.iter().map(|b| if *b { '1' } else { '0' }).collect();
            assert_eq!(rendered, expected);
        }

        #[test]
        fn grid_token_is_not_double_counted() {
            // the only grid token feeds g15, leaving the slot zero when absent
            let bits = payload("K1ABC W9XYZ FN42");
            assert_eq!(field(&bits, 58, 15), 10_342);
            let message = Message::try_from("CQ K1ABC FN42").unwrap();
            let mut view = message.view();
            let _ = encode_c28(&mut view).unwrap();
            let _ = encode_c28(&mut view).unwrap();
            assert!(view.take_first(tokens::is_grid4).is_some());
            assert!(view.take_first(tokens::is_grid4).is_none());
        }
    }

    mod unsupported_subtypes {
        use super::*;

        #[test]
        fn dxpedition_is_refused() {
            let message = Message::try_from("W1AW K1JT 73").unwrap();
            assert_eq!(
                pack(&message),
                Err(PackError::UnsupportedSubtype {
                    subtype: Subtype::Dxpedition
                })
            );
        }

        #[test]
        fn telemetry_is_refused() {
            let message = Message::try_from("123456789ABCDEF012").unwrap();
            assert_eq!(
                pack(&message),
                Err(PackError::UnsupportedSubtype {
                    subtype: Subtype::Telemetry
                })
            );
        }

        #[test]
        fn free_text_is_refused() {
            let message = Message::try_from("HELLO WORLD").unwrap();
            assert_eq!(
                pack(&message),
                Err(PackError::UnsupportedSubtype {
                    subtype: Subtype::FreeText
                })
            );
        }
    }
}
