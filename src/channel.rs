//! Channel mapping: 174 codeword bits to 79 channel symbols.

use bitvec::prelude::*;

use crate::constants::FT8_COSTAS;
use crate::error_correction::gray;
use crate::util::bitvec_utils::FromBitSlice;

/// Map a codeword onto the 79-symbol frame: Gray-coded 3-bit groups split
/// around three Costas arrays, `C | Ma | C | Mb | C`.
pub fn channel_symbols(codeword: &BitSlice<u8, Msb0>) -> Vec<u8> {
    // convert the bits into 3 bit symbols
    let mut symbols: Vec<u8> = vec![];
    for chunk in codeword.chunks_exact(3) {
        symbols.push(u8::from_bitslice(chunk));
    }

    let gray_coded_symbols = gray::encode(&symbols);

    let mut channel_symbols: Vec<u8> = Vec::with_capacity(79);
    channel_symbols.extend(FT8_COSTAS);
    channel_symbols.extend_from_slice(&gray_coded_symbols[..29]);
    channel_symbols.extend(FT8_COSTAS);
    channel_symbols.extend_from_slice(&gray_coded_symbols[29..]);
    channel_symbols.extend(FT8_COSTAS);

    channel_symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(s: &str) -> BitVec<u8, Msb0> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn frame_layout() {
        let codeword = bitvec![u8, Msb0; 0; 174];
        let symbols = channel_symbols(&codeword);
        assert_eq!(symbols.len(), 79);
        for offset in [0usize, 36, 72] {
            assert_eq!(&symbols[offset..offset + 7], &FT8_COSTAS);
        }
        // all-zero codeword maps every data symbol to tone 0
        assert!(symbols[7..36].iter().all(|&s| s == 0));
        assert!(symbols[43..72].iter().all(|&s| s == 0));
    }

    #[test]
    fn symbols_stay_in_range() {
        let codeword = bitvec![u8, Msb0; 1; 174];
        let symbols = channel_symbols(&codeword);
        assert!(symbols.iter().all(|&s| s < 8));
    }

    #[test]
    fn known_frame() {
        // codeword of "CQ K1ABC FN42"
        let payload =
            "00000000000000000000000000100000100110111101111000110101000101000011001100010";
        let crc = "01011000110000";
        let parity =
            "11011101111010110101100110100011010100100010001000101111000100100001011011101010000";
        let codeword = bits_of(&format!("{payload}{crc}{parity}"));

        let expected =
            "3140652000000001011672416313042056523140652022673465452355310670551226303140652";
        let rendered: String = channel_symbols(&codeword)
            .iter()
            .map(|&s| char::from(b'0' + s))
            .collect();
        assert_eq!(rendered, expected);
    }
}
