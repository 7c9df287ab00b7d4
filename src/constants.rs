/// FT8 protocol constants
///
/// Character sets for the various field encodings, the synchronization and
/// Gray tables, and the fixed DSP parameters of the 48 kHz synthesizer.

// Text encoding character sets (base-N encoding)

/// Base-42 character set for free text messages (13 characters, 71 bits)
pub const CHARSET_BASE42: &str = " 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ+-./?";

/// Base-38 character set for non-standard callsigns (11 characters, 58 bits)
pub const CHARSET_BASE38: &str = " 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ/";

// Standard callsign encoding character sets (28-bit c28 slot)

/// First position: space + digits + letters (37 characters)
pub const CHARSET_A1: &str = " 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Second position: digits + letters (36 characters)
pub const CHARSET_A2: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digit position: digits only (10 characters)
pub const CHARSET_A3: &str = "0123456789";

/// Suffix positions: space + letters (27 characters)
pub const CHARSET_A4: &str = " ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Maidenhead grid character sets

/// Field letters A-R (18 characters)
pub const CHARSET_GRID_FIELD: &str = "ABCDEFGHIJKLMNOPQR";

/// Subsquare letters A-X (24 characters)
pub const CHARSET_GRID_SUBSQUARE: &str = "ABCDEFGHIJKLMNOPQRSTUVWX";

/// Numeric digits for grid squares
pub const CHARSET_NUMERIC: &str = "0123456789";

// Protocol limits

/// Number of special tokens (CQ variants, DE, QRZ) below the callsign range
pub const NTOKENS: u32 = 2_063_592;

/// Size of the 22-bit hash space reserved below the callsign range
pub const MAX22: u32 = 4_194_304;

// Frame structure

/// Payload bits per message
pub const PAYLOAD_BITS: usize = 77;

/// CRC width in bits
pub const CRC_BITS: usize = 14;

/// CRC polynomial, applied masked to the 14-bit register
pub const CRC_POLYNOMIAL: u16 = 0x6757;

/// LDPC codeword length
pub const LDPC_N: usize = 174;

/// LDPC systematic length (payload + CRC)
pub const LDPC_K: usize = 91;

/// LDPC parity bits
pub const LDPC_M: usize = 83;

/// The 7-symbol Costas synchronization array, sent three times per frame
pub const FT8_COSTAS: [u8; 7] = [3, 1, 4, 0, 6, 5, 2];

/// Gray encoding of 3-bit symbol values onto the 8 tones
pub const FT8_GRAY_ENCODE: [u8; 8] = [0, 1, 3, 2, 5, 6, 4, 7];

/// Inverse of [`FT8_GRAY_ENCODE`]
pub const FT8_GRAY_DECODE: [u8; 8] = [0, 1, 3, 2, 6, 4, 5, 7];

/// Channel symbols per frame: three Costas arrays plus 58 data symbols
pub const NUM_SYMBOLS: usize = 79;

// Synthesizer parameters

/// Output sample rate in Hz
pub const SAMPLE_RATE: f32 = 48_000.0;

/// Symbol rate in baud
pub const SYMBOL_RATE: f32 = 6.25;

/// Tone spacing in Hz per symbol index
pub const TONE_SPACING: f32 = 6.25;

/// Samples per symbol at [`SAMPLE_RATE`]
pub const SAMPLES_PER_SYMBOL: usize = 7_680;

/// Gaussian bandwidth-time product
pub const BT: f32 = 2.0;

/// Samples in a complete frame waveform
pub const WAVEFORM_SAMPLES: usize = NUM_SYMBOLS * SAMPLES_PER_SYMBOL;
