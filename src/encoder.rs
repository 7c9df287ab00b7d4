//! Encoder facade: text in, frequency-trajectory samples out.
//!
//! The seven pipeline stages run in a fixed order: normalize, classify,
//! pack, CRC, LDPC, channel map, synthesize. Each stage is also exposed as
//! its own entry point so tests and callers can observe the intermediate
//! artifacts. The encoder holds no mutable state between calls; the LDPC
//! matrices are loaded once at construction and shared immutably.

use std::path::Path;

use bitvec::prelude::*;
use snafu::Snafu;
use tracing::{debug, info};

use crate::channel;
use crate::constants::{LDPC_K, LDPC_N, PAYLOAD_BITS};
use crate::error_correction::crc;
use crate::error_correction::ldpc::{GeneratorMatrix, MatrixError, ParityMatrix};
use crate::message::subtype::Subtype;
use crate::message::{Message, MessageParseError};
use crate::modulation::Modulator;
use crate::packer::{self, PackError};

#[derive(Debug, Snafu)]
pub enum EncodeError {
    /// Input text failed normalization
    #[snafu(display("{source}"), context(false))]
    InvalidMessage { source: MessageParseError },

    /// Payload packing refused the message
    #[snafu(display("{source}"), context(false))]
    Pack { source: PackError },

    /// A matrix file failed to load
    #[snafu(display("{source}"), context(false))]
    Matrix { source: MatrixError },
}

#[derive(Debug)]
pub struct Encoder {
    generator: GeneratorMatrix,
    parity: ParityMatrix,
    modulator: Modulator,
}

impl Encoder {
    /// Load the generator and parity check matrices and build an encoder.
    pub fn new<P: AsRef<Path>>(generator_path: P, parity_path: P) -> Result<Self, EncodeError> {
        let generator = GeneratorMatrix::from_file(generator_path)?;
        let parity = ParityMatrix::from_file(parity_path)?;
        info!("encoder ready");
        Ok(Encoder {
            generator,
            parity,
            modulator: Modulator::new(),
        })
    }

    /// Encode a message into its baseband frequency trajectory.
    pub fn encode(&self, text: &str) -> Result<Vec<f32>, EncodeError> {
        let message = Message::try_from(text)?;
        debug!(message = %message, subtype = %message.subtype(), "encoding");

        let payload = packer::pack(&message)?;
        let block = self.calc_crc(&payload);
        let codeword = self.apply_ldpc(&block);
        let symbols = self.bits_to_fsk8(&codeword);
        Ok(self.encode_ft8_complete(&symbols))
    }

    /// Classify a message without encoding it. Unparseable text is `Unknown`.
    pub fn message_type(&self, text: &str) -> Subtype {
        match Message::try_from(text) {
            Ok(message) => message.subtype(),
            Err(_) => Subtype::Unknown,
        }
    }

    /// The normalized form of a message, as the packer would see it.
    pub fn processed_message(&self, text: &str) -> Result<String, EncodeError> {
        let message = Message::try_from(text)?;
        Ok(message.text().to_string())
    }

    /// Pack a standard message into its 77-bit payload.
    pub fn encode_standard(&self, message: &Message) -> Result<BitVec<u8, Msb0>, EncodeError> {
        Ok(packer::pack_standard(message)?)
    }

    /// Append the CRC-14, producing the 91-bit block.
    pub fn calc_crc(&self, payload: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
        debug_assert_eq!(payload.len(), PAYLOAD_BITS);
        crc::append_crc(payload)
    }

    /// Extend the 91-bit block to the 174-bit systematic codeword.
    pub fn apply_ldpc(&self, block: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
        debug_assert_eq!(block.len(), LDPC_K);
        self.generator.encode(block)
    }

    /// Map a codeword onto the 79-symbol frame.
    pub fn bits_to_fsk8(&self, codeword: &BitSlice<u8, Msb0>) -> Vec<u8> {
        debug_assert_eq!(codeword.len(), LDPC_N);
        channel::channel_symbols(codeword)
    }

    /// Synthesize the frequency trajectory for a symbol frame.
    pub fn encode_ft8_complete(&self, symbols: &[u8]) -> Vec<f32> {
        self.modulator.synthesize(symbols)
    }

    /// Diagnostic: `H * c = 0` for a codeword. The pipeline does not check
    /// this at runtime; the test suite does.
    pub fn check_parity(&self, codeword: &BitSlice<u8, Msb0>) -> bool {
        self.parity.check(codeword)
    }
}
