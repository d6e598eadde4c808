//
// Single-shot CPAL microphone capture.
//
// Recognition here is one bounded pass, so there is no start/stop surface:
// open the default device, collect until the window elapses, hand the
// samples back for resampling and decoding.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Sample, SampleFormat, SizedSample};
use rubato::Resampler;

/// Sample rate the recognizer expects.
pub const TARGET_SAMPLE_RATE_HZ: u32 = 16_000;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("no input device found")]
    NoInputDevice,

    #[error("failed to get default input config: {0}")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("failed to build input stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("failed to play stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("failed to resample: {0}")]
    Resample(#[from] anyhow::Error),
}

pub struct CapturedAudio {
    pub sample_rate_hz: u32,
    pub samples: Vec<f32>,
}

/// Records one pass from the default input device, blocking the calling
/// thread for `window`. Run it under `spawn_blocking` from async code.
pub fn record_once(window: Duration) -> Result<CapturedAudio, CaptureError> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or(CaptureError::NoInputDevice)?;

    // Take the device's default config; resampling to 16k happens later.
    let config = device.default_input_config()?;
    let sample_rate_hz = config.sample_rate().0;
    let channels = config.channels() as usize;

    let sink: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));

    let stream = match config.sample_format() {
        SampleFormat::F32 => build_capture_stream::<f32>(&device, &config.clone().into(), channels, sink.clone()),
        SampleFormat::I16 => build_capture_stream::<i16>(&device, &config.clone().into(), channels, sink.clone()),
        SampleFormat::U16 => build_capture_stream::<u16>(&device, &config.clone().into(), channels, sink.clone()),
        SampleFormat::I8 => build_capture_stream::<i8>(&device, &config.clone().into(), channels, sink.clone()),
        SampleFormat::U8 => build_capture_stream::<u8>(&device, &config.clone().into(), channels, sink.clone()),
        SampleFormat::I32 => build_capture_stream::<i32>(&device, &config.clone().into(), channels, sink.clone()),
        SampleFormat::U32 => build_capture_stream::<u32>(&device, &config.clone().into(), channels, sink.clone()),
        SampleFormat::F64 => build_capture_stream::<f64>(&device, &config.clone().into(), channels, sink.clone()),
        _ => build_capture_stream::<f32>(&device, &config.clone().into(), channels, sink.clone()),
    }?;

    stream.play()?;
    std::thread::sleep(window);
    drop(stream);

    let samples = std::mem::take(&mut *sink.lock().unwrap());
    log::info!(
        "captured {} samples (~{:.0}ms) at {sample_rate_hz}Hz",
        samples.len(),
        samples.len() as f64 / sample_rate_hz as f64 * 1000.0
    );

    Ok(CapturedAudio {
        sample_rate_hz,
        samples,
    })
}

fn build_capture_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    sink: Arc<Mutex<Vec<f32>>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: Sample + SizedSample + Send + 'static,
    f32: cpal::FromSample<T>,
{
    let cb = move |data: &[T], _: &cpal::InputCallbackInfo| {
        let frames: Vec<f32> = data.iter().map(|&s| s.to_sample::<f32>()).collect();
        let mut sink = sink.lock().unwrap();
        append_mono(&mut sink, &frames, channels);
    };

    device.build_input_stream(
        config,
        cb,
        |err| {
            log::error!("audio stream error: {err}");
        },
        None,
    )
}

/// Mixes interleaved frames down to mono and appends them to `out`.
pub(crate) fn append_mono(out: &mut Vec<f32>, interleaved: &[f32], channels: usize) {
    if channels <= 1 {
        out.extend_from_slice(interleaved);
        return;
    }

    for frame in interleaved.chunks_exact(channels) {
        out.push(frame.iter().sum::<f32>() / channels as f32);
    }
}

/// Resamples mono PCM in [-1, 1] to [`TARGET_SAMPLE_RATE_HZ`].
pub fn resample_to_target(samples: &[f32], input_rate_hz: u32) -> Result<Vec<f32>, CaptureError> {
    if input_rate_hz == TARGET_SAMPLE_RATE_HZ || samples.is_empty() {
        return Ok(samples.to_vec());
    }

    let params = rubato::SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: rubato::SincInterpolationType::Cubic,
        oversampling_factor: 256,
        window: rubato::WindowFunction::BlackmanHarris2,
    };

    let mut resampler = rubato::SincFixedIn::<f32>::new(
        TARGET_SAMPLE_RATE_HZ as f64 / input_rate_hz as f64,
        2.0,
        params,
        samples.len(),
        1,
    )
    .context("create resampler")
    .map_err(CaptureError::Resample)?;

    let out = resampler
        .process(&[samples.to_vec()], None)
        .context("resample")
        .map_err(CaptureError::Resample)?;

    Ok(out.into_iter().next().unwrap_or_default())
}
