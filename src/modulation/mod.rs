//! GFSK synthesis: channel symbols to an instantaneous-frequency trajectory.
//!
//! The output samples are frequency deviations in Hz, not audio. Each symbol
//! contributes `symbol * 6.25 Hz` shaped by the three-symbol Gaussian pulse,
//! overlap-added into a scratch buffer two symbols longer than the frame at
//! each end. A downstream oscillator integrates the trajectory into phase to
//! produce audio; see the demo binary for the expected integration.

use tracing::debug;

use crate::constants::{SAMPLES_PER_SYMBOL, TONE_SPACING};

pub mod pulse;

/// Stateless synthesizer holding the precomputed smoothing pulse.
#[derive(Debug)]
pub struct Modulator {
    pulse: Vec<f32>,
}

impl Default for Modulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Modulator {
    pub fn new() -> Self {
        Modulator {
            pulse: pulse::smoothing_pulse(),
        }
    }

    /// Synthesize the frequency trajectory for a symbol sequence.
    ///
    /// Returns `symbols.len() * 7680` samples of instantaneous frequency in
    /// Hz at 48 kHz.
    pub fn synthesize(&self, symbols: &[u8]) -> Vec<f32> {
        assert!(symbols.iter().all(|&s| s < 8), "symbol out of range");
        assert!(!symbols.is_empty(), "empty symbol sequence");

        let sps = SAMPLES_PER_SYMBOL;

        // pad with a copy of the first and last symbol so the overlap-add
        // is well-defined at both ends of the frame
        let mut padded = Vec::with_capacity(symbols.len() + 2);
        padded.push(symbols[0]);
        padded.extend_from_slice(symbols);
        padded.push(symbols[symbols.len() - 1]);

        let mut scratch = vec![0.0f32; (symbols.len() + 4) * sps];
        for (n, &symbol) in padded.iter().enumerate() {
            let deviation = f32::from(symbol) * TONE_SPACING;
            let base = n * sps;
            for (i, &p) in self.pulse.iter().enumerate() {
                scratch[base + i] += deviation * p;
            }
        }

        let start = 2 * sps;
        let waveform = scratch[start..start + symbols.len() * sps].to_vec();
        debug!(samples = waveform.len(), "synthesized frequency trajectory");
        waveform
    }
}
