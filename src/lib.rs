pub mod channel;
pub mod constants;
pub mod encoder;
pub mod error_correction;
pub mod fields;
pub mod message;
pub mod modulation;
pub mod packer;
pub mod source;
pub mod tracing_init;
pub mod util;

pub use encoder::{EncodeError, Encoder};
pub use message::subtype::Subtype;
pub use message::{Message, MessageParseError};
pub use source::WaveformSource;
