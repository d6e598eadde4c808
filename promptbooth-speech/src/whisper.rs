use crate::capture::{self, CapturedAudio, TARGET_SAMPLE_RATE_HZ};
use promptbooth_core::config::SpeechSettings;
use promptbooth_engine::traits::{SpeechInput, Transcript};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

/// Local single-shot recognizer: one bounded microphone capture, one
/// whisper.cpp decode. Available when the GGML model file is on disk.
#[derive(Clone)]
pub struct WhisperRecognizer {
    model_path: PathBuf,
    ctx: Arc<Mutex<Option<Arc<WhisperContext>>>>,
}

impl WhisperRecognizer {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            ctx: Arc::new(Mutex::new(None)),
        }
    }

    pub fn model_path(&self) -> &PathBuf {
        &self.model_path
    }

    fn get_or_load_context(&self) -> anyhow::Result<Arc<WhisperContext>> {
        let mut guard = self.ctx.lock().unwrap();

        if let Some(ctx) = guard.as_ref() {
            return Ok(ctx.clone());
        }

        if !self.model_path.exists() {
            return Err(anyhow::anyhow!(
                "whisper model does not exist: {}",
                self.model_path.display()
            ));
        }

        let ctx = WhisperContext::new_with_params(
            self.model_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("invalid model path"))?,
            WhisperContextParameters::default(),
        )
        .map_err(|e| anyhow::anyhow!("failed to load whisper model: {e}"))?;

        let ctx = Arc::new(ctx);
        *guard = Some(ctx.clone());
        Ok(ctx)
    }

    fn transcribe_blocking(&self, audio: &CapturedAudio, language: &str) -> anyhow::Result<String> {
        if audio.sample_rate_hz != TARGET_SAMPLE_RATE_HZ {
            return Err(anyhow::anyhow!(
                "unsupported sample rate {} (expected {TARGET_SAMPLE_RATE_HZ})",
                audio.sample_rate_hz
            ));
        }

        let ctx = self.get_or_load_context()?;
        let mut state = ctx
            .create_state()
            .map_err(|e| anyhow::anyhow!("failed to create whisper state: {e}"))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_language(Some(language));

        // Keep console output disabled.
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        state
            .full(params, &audio.samples)
            .map_err(|e| anyhow::anyhow!("whisper inference failed: {e}"))?;

        let n = state.full_n_segments();

        let mut out = String::new();
        for i in 0..n {
            let seg = state
                .get_segment(i)
                .ok_or_else(|| anyhow::anyhow!("failed reading whisper segment {i}: out of bounds"))?;
            let text = seg
                .to_str_lossy()
                .map_err(|e| anyhow::anyhow!("failed reading whisper segment {i}: {e}"))?;
            out.push_str(text.trim());
            if i + 1 < n {
                out.push(' ');
            }
        }

        Ok(out.trim().to_string())
    }
}

// whisper.cpp wants bare ISO-639 codes; the widget settings carry a BCP-47
// tag ("en-US").
fn whisper_language(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

#[async_trait::async_trait]
impl SpeechInput for WhisperRecognizer {
    fn is_available(&self) -> bool {
        self.model_path.exists()
    }

    async fn listen_once(&self, settings: &SpeechSettings) -> anyhow::Result<Transcript> {
        let window = Duration::from_secs(settings.max_capture_secs);
        let language = whisper_language(&settings.language).to_string();

        let this = self.clone();
        let text = tokio::task::spawn_blocking(move || -> anyhow::Result<String> {
            let captured = capture::record_once(window)?;
            let samples = capture::resample_to_target(&captured.samples, captured.sample_rate_hz)?;
            let audio = CapturedAudio {
                sample_rate_hz: TARGET_SAMPLE_RATE_HZ,
                samples,
            };
            this.transcribe_blocking(&audio, &language)
        })
        .await
        .map_err(|e| anyhow::anyhow!("recognition task join failed: {e}"))??;

        Ok(Transcript {
            text,
            backend: "whisper-local".into(),
        })
    }
}
