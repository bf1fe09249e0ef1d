#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Fixed-format microphone capture.
//!
//! Records the default input device to a mono, 16-bit, 44.1 kHz WAV file
//! for a fixed duration. Capture blocks the calling thread; each request
//! records, then processes, one at a time.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Capture sample rate in Hz.
const SAMPLE_RATE: u32 = 44_100;
/// Capture channel count.
const CHANNELS: u16 = 1;

type WavWriterHandle = Arc<Mutex<Option<hound::WavWriter<std::io::BufWriter<std::fs::File>>>>>;

/// Errors raised during audio capture. All are fatal to the enclosing
/// request.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("No input device available")]
    NoInputDevice,

    #[error("Unsupported input sample format: {0:?}")]
    UnsupportedFormat(cpal::SampleFormat),

    #[error("Input config error: {0}")]
    InputConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("Stream build error: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("Stream play error: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("WAV write error: {0}")]
    Wav(#[from] hound::Error),

    #[error("Recording writer poisoned")]
    Poisoned,
}

/// Record the default input device to `path` for `duration`.
///
/// The stream is requested at the fixed mono/44.1 kHz format; devices that
/// cannot provide it fail the request rather than silently recording
/// something else.
pub fn record_wav(path: &Path, duration: Duration) -> Result<(), AudioError> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or(AudioError::NoInputDevice)?;

    let device_name = device.name().unwrap_or_else(|_| "unknown".to_string());
    info!(
        "recording {}s from input device: {device_name}",
        duration.as_secs()
    );

    let sample_format = device.default_input_config()?.sample_format();
    let config = cpal::StreamConfig {
        channels: CHANNELS,
        sample_rate: cpal::SampleRate(SAMPLE_RATE),
        buffer_size: cpal::BufferSize::Default,
    };

    let writer = hound::WavWriter::create(path, wav_spec())?;
    let writer: WavWriterHandle = Arc::new(Mutex::new(Some(writer)));

    let err_fn = |err| warn!("input stream error: {err}");
    let stream = match sample_format {
        cpal::SampleFormat::I16 => {
            let writer = writer.clone();
            device.build_input_stream(
                &config,
                move |data: &[i16], _: &cpal::InputCallbackInfo| write_samples(&writer, data),
                err_fn,
                None,
            )?
        }
        cpal::SampleFormat::F32 => {
            let writer = writer.clone();
            device.build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    let converted: Vec<i16> = data.iter().copied().map(f32_to_i16).collect();
                    write_samples(&writer, &converted);
                },
                err_fn,
                None,
            )?
        }
        other => return Err(AudioError::UnsupportedFormat(other)),
    };

    stream.play()?;
    std::thread::sleep(duration);
    drop(stream);

    let mut guard = writer.lock().map_err(|_| AudioError::Poisoned)?;
    if let Some(writer) = guard.take() {
        writer.finalize()?;
    }

    info!("wrote capture to {}", path.display());
    Ok(())
}

fn write_samples(writer: &WavWriterHandle, data: &[i16]) {
    // The callback runs on the audio thread; a poisoned or contended lock
    // drops the buffer instead of blocking capture.
    if let Ok(mut guard) = writer.try_lock() {
        if let Some(writer) = guard.as_mut() {
            for &sample in data {
                if writer.write_sample(sample).is_err() {
                    return;
                }
            }
        }
    }
}

/// Convert a float sample to 16-bit PCM.
#[expect(clippy::cast_possible_truncation, reason = "clamped to i16 range")]
fn f32_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16
}

const fn wav_spec() -> hound::WavSpec {
    hound::WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_spec_is_fixed_mono_16bit_44100() {
        let spec = wav_spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    }

    #[test]
    fn float_samples_clamp_to_pcm_range() {
        assert_eq!(f32_to_i16(2.0), i16::MAX);
        assert_eq!(f32_to_i16(-2.0), -i16::MAX);
        assert_eq!(f32_to_i16(0.0), 0);
    }
}
