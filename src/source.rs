//! Pull-based sample source over a pre-computed waveform.
//!
//! This is the library-level form of the streaming block that feeds the
//! encoder's output into a signal-processing graph: the waveform is
//! materialized once up front, and a consumer drains it in chunks of
//! whatever size it likes. Reads never block and never fail; past the end
//! of the waveform (or after an encode failure) the source produces
//! silence indefinitely.

use tracing::{debug, warn};

use crate::encoder::Encoder;

pub struct WaveformSource {
    waveform: Vec<f32>,
    position: usize,
    waveform_generated: bool,
}

impl WaveformSource {
    /// Encode `text` and wrap the result. On failure the source holds an
    /// empty waveform and reports it through [`Self::waveform_generated`];
    /// the error is logged once here and not retried.
    pub fn from_encoder(encoder: &Encoder, text: &str) -> Self {
        match encoder.encode(text) {
            Ok(waveform) => {
                debug!(samples = waveform.len(), "waveform ready for streaming");
                WaveformSource {
                    waveform,
                    position: 0,
                    waveform_generated: true,
                }
            }
            Err(error) => {
                warn!(%error, "encode failed, source will emit silence");
                WaveformSource {
                    waveform: Vec::new(),
                    position: 0,
                    waveform_generated: false,
                }
            }
        }
    }

    pub fn waveform_generated(&self) -> bool {
        self.waveform_generated
    }

    /// Copy the next samples into `out`, zero-padding past the end of the
    /// waveform. Returns the number of samples produced, always the full
    /// request.
    pub fn read(&mut self, out: &mut [f32]) -> usize {
        let available = self.waveform.len().saturating_sub(self.position);
        let copied = available.min(out.len());

        out[..copied].copy_from_slice(&self.waveform[self.position..self.position + copied]);
        out[copied..].fill(0.0);
        self.position += copied;

        out.len()
    }
}
