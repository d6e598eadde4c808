use crate::traits::{SpeechInput, SpeechOutput};
use promptbooth_core::config::AppConfig;
use promptbooth_core::draft::PromptDraft;
use promptbooth_core::format::render_prompt;
use promptbooth_core::text::{append_transcript, filter_transcript};
use promptbooth_core::vibes::VibeCatalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// What a generate action produced.
pub struct GenerateResult {
    pub prompt: String,

    /// Vocalization task, present when speech output was dispatched.
    /// Dropping the handle detaches the task; nothing awaits it.
    pub speak_task: Option<JoinHandle<()>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListenOutcome {
    /// Transcript appended; carries the new extras value.
    Appended(String),
    /// The pass completed but produced no usable text, or failed.
    /// The extras field is unchanged either way.
    Empty,
    /// The voice-input toggle is off.
    Disabled,
    /// No recognition capability on this platform.
    Unavailable,
}

/// Holds the editable selection state and drives the two speech adapters.
///
/// Setters accept any value unconditionally; there is no validation layer.
/// All mutation happens from the single UI actor, so no internal locking.
pub struct FormController {
    config: AppConfig,
    vibes: VibeCatalog,
    draft: PromptDraft,
    last_prompt: Option<String>,
    input: Arc<dyn SpeechInput>,
    output: Arc<dyn SpeechOutput>,
}

impl FormController {
    pub fn new(config: AppConfig, input: Arc<dyn SpeechInput>, output: Arc<dyn SpeechOutput>) -> Self {
        Self {
            config,
            vibes: VibeCatalog::builtin(),
            draft: PromptDraft::default(),
            last_prompt: None,
            input,
            output,
        }
    }

    pub fn draft(&self) -> &PromptDraft {
        &self.draft
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn vibes(&self) -> &VibeCatalog {
        &self.vibes
    }

    pub fn last_prompt(&self) -> Option<&str> {
        self.last_prompt.as_deref()
    }

    pub fn speech_input(&self) -> Arc<dyn SpeechInput> {
        self.input.clone()
    }

    pub fn speech_output(&self) -> Arc<dyn SpeechOutput> {
        self.output.clone()
    }

    pub fn set_vibe(&mut self, vibe: impl Into<String>) {
        self.draft.vibe = vibe.into();
    }

    pub fn set_camera_format(&mut self, camera_format: impl Into<String>) {
        self.draft.camera_format = camera_format.into();
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.draft.style = style.into();
    }

    pub fn set_extras(&mut self, extras: impl Into<String>) {
        self.draft.extras = extras.into();
    }

    pub fn voice_input_enabled(&self) -> bool {
        self.config.voice_input_enabled
    }

    pub fn speech_output_enabled(&self) -> bool {
        self.config.speech_output_enabled
    }

    pub fn toggle_voice_input(&mut self) {
        self.config.voice_input_enabled = !self.config.voice_input_enabled;
    }

    pub fn toggle_speech_output(&mut self) {
        self.config.speech_output_enabled = !self.config.speech_output_enabled;
    }

    /// The "start talking" action is live only while the toggle is on AND
    /// the platform capability exists.
    pub fn voice_input_active(&self) -> bool {
        self.config.voice_input_enabled && self.input.is_available()
    }

    /// Renders the current draft and, when speech output is enabled and the
    /// synthesis capability exists, dispatches vocalization without awaiting
    /// it. Rendering itself never fails.
    pub async fn generate(&mut self) -> GenerateResult {
        if !self.vibes.contains(&self.draft.vibe) {
            log::warn!(
                "unknown vibe key {:?}, rendering with fallback phrase",
                self.draft.vibe
            );
        }

        let prompt = render_prompt(&self.draft, &self.vibes);
        self.last_prompt = Some(prompt.clone());

        let speak_task = if self.config.speech_output_enabled && self.output.is_available() {
            let output = self.output.clone();
            let text = prompt.clone();
            Some(tokio::spawn(async move {
                if let Err(e) = output.speak(&text).await {
                    log::warn!("speech output failed: {e:#}");
                }
            }))
        } else {
            None
        };

        GenerateResult { prompt, speak_task }
    }

    /// Filters a raw transcript and appends it to the extras field.
    /// Returns the new extras value, or `None` when the transcript had no
    /// usable text (extras untouched).
    pub fn apply_transcript(&mut self, transcript: &str) -> Option<String> {
        let filtered = filter_transcript(transcript);
        if filtered.is_empty() {
            return None;
        }
        self.draft.extras = append_transcript(&self.draft.extras, &filtered);
        Some(self.draft.extras.clone())
    }

    /// Runs one recognition pass and appends the result to extras.
    ///
    /// Inert when the toggle is off or the capability is absent. Backend
    /// errors are logged and swallowed; the extras field stays unchanged and
    /// nothing is surfaced to the user.
    pub async fn listen_and_append(&mut self) -> ListenOutcome {
        if !self.config.voice_input_enabled {
            return ListenOutcome::Disabled;
        }
        if !self.input.is_available() {
            return ListenOutcome::Unavailable;
        }

        let input = self.input.clone();
        let settings = self.config.speech.clone();
        let listened = input.listen_once(&settings).await;

        match listened {
            Ok(transcript) => match self.apply_transcript(&transcript.text) {
                Some(extras) => ListenOutcome::Appended(extras),
                None => ListenOutcome::Empty,
            },
            Err(e) => {
                log::warn!("speech recognition failed: {e:#}");
                ListenOutcome::Empty
            }
        }
    }
}
