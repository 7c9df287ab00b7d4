use std::env;
use std::f32::consts::PI;
use std::process::ExitCode;

use hound::{SampleFormat, WavSpec, WavWriter};

use ft8gen::constants::SAMPLE_RATE;
use ft8gen::message::Message;
use ft8gen::util::bitvec_utils::FromBitSlice;
use ft8gen::{Encoder, Subtype};

/// Integrate a frequency trajectory into audio around a carrier.
///
/// The encoder emits instantaneous frequency deviation in Hz; this is the
/// oscillator a downstream consumer is expected to provide.
fn frequency_to_audio(trajectory: &[f32], carrier_hz: f32, sample_rate: f32) -> Vec<f32> {
    let two_pi = 2.0 * PI;
    let mut phase = 0.0f32;
    trajectory
        .iter()
        .map(|&deviation| {
            phase += two_pi * (carrier_hz + deviation) / sample_rate;
            phase %= two_pi;
            phase.sin()
        })
        .collect()
}

fn main() -> ExitCode {
    ft8gen::tracing_init::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <message>", args[0]);
        return ExitCode::FAILURE;
    }
    let message_text = &args[1];
    let carrier_hz = 1500.0;

    let encoder = match Encoder::new("data/generator.dat", "data/parity.dat") {
        Ok(encoder) => encoder,
        Err(error) => {
            eprintln!("failed to load matrices: {error}");
            return ExitCode::FAILURE;
        }
    };

    if encoder.message_type(message_text) != Subtype::Standard {
        eprintln!(
            "message classifies as {}, only standard messages encode",
            encoder.message_type(message_text)
        );
        return ExitCode::FAILURE;
    }

    let message = match Message::try_from(message_text.as_str()) {
        Ok(message) => message,
        Err(error) => {
            eprintln!("invalid message: {error}");
            return ExitCode::FAILURE;
        }
    };

    let payload = match encoder.encode_standard(&message) {
        Ok(payload) => payload,
        Err(error) => {
            eprintln!("packing failed: {error}");
            return ExitCode::FAILURE;
        }
    };
    let block = encoder.calc_crc(&payload);
    let codeword = encoder.apply_ldpc(&block);
    let symbols = encoder.bits_to_fsk8(&codeword);
    let trajectory = encoder.encode_ft8_complete(&symbols);

    println!("Message: {message}");
    println!("Message Bits: {:077b}", u128::from_bitslice(&payload));
    println!("Crc: {:014b}", u16::from_bitslice(&block[77..91]));
    println!("Parity: {:083b}", u128::from_bitslice(&codeword[91..174]));
    let symbols_string: String = symbols.iter().map(|&s| char::from(b'0' + s)).collect();
    println!("Channel Symbols: {symbols_string}");

    let audio = frequency_to_audio(&trajectory, carrier_hz, SAMPLE_RATE);

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = match WavWriter::create("output.wav", spec) {
        Ok(writer) => writer,
        Err(error) => {
            eprintln!("cannot create output.wav: {error}");
            return ExitCode::FAILURE;
        }
    };
    for &sample in &audio {
        let int_sample = (sample * 0.9 * f32::from(i16::MAX)) as i16;
        if let Err(error) = writer.write_sample(int_sample) {
            eprintln!("write failed: {error}");
            return ExitCode::FAILURE;
        }
    }
    if let Err(error) = writer.finalize() {
        eprintln!("finalize failed: {error}");
        return ExitCode::FAILURE;
    }

    println!("Wrote {} samples to output.wav", audio.len());
    ExitCode::SUCCESS
}
