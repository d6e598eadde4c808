use promptbooth_core::config::SpeechSettings;
use promptbooth_engine::traits::{SpeechInput, SpeechOutput, Transcript};
use std::sync::{Arc, Mutex};

/// Recognition backend that resolves immediately with a fixed transcript.
#[derive(Debug, Clone)]
pub struct ScriptedSpeechInput {
    pub transcript: String,
}

impl ScriptedSpeechInput {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }

    pub fn boxed(self) -> Arc<dyn SpeechInput> {
        Arc::new(self)
    }
}

#[async_trait::async_trait]
impl SpeechInput for ScriptedSpeechInput {
    fn is_available(&self) -> bool {
        true
    }

    async fn listen_once(&self, _settings: &SpeechSettings) -> anyhow::Result<Transcript> {
        Ok(Transcript {
            text: self.transcript.clone(),
            backend: "scripted".into(),
        })
    }
}

/// Stands in on platforms with no recognition capability.
#[derive(Debug, Default)]
pub struct UnavailableSpeechInput;

#[async_trait::async_trait]
impl SpeechInput for UnavailableSpeechInput {
    fn is_available(&self) -> bool {
        false
    }

    async fn listen_once(&self, _settings: &SpeechSettings) -> anyhow::Result<Transcript> {
        anyhow::bail!("speech recognition is not available")
    }
}

/// Collects spoken strings for assertions.
#[derive(Debug, Default)]
pub struct MemorySpeechOutput {
    pub spoken: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl SpeechOutput for MemorySpeechOutput {
    fn is_available(&self) -> bool {
        true
    }

    async fn speak(&self, text: &str) -> anyhow::Result<()> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Stands in on platforms with no synthesis capability.
#[derive(Debug, Default)]
pub struct UnavailableSpeechOutput;

#[async_trait::async_trait]
impl SpeechOutput for UnavailableSpeechOutput {
    fn is_available(&self) -> bool {
        false
    }

    async fn speak(&self, _text: &str) -> anyhow::Result<()> {
        anyhow::bail!("speech synthesis is not available")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptbooth_core::config::AppConfig;
    use promptbooth_engine::controller::{FormController, ListenOutcome};

    #[tokio::test]
    async fn scripted_backends_drive_a_full_form_session() {
        let spoken = Arc::new(MemorySpeechOutput::default());
        let mut controller = FormController::new(
            AppConfig::default(),
            ScriptedSpeechInput::new("golden hour").boxed(),
            spoken.clone(),
        );

        controller.set_extras("lens flare");
        controller.toggle_voice_input();
        controller.toggle_speech_output();

        let outcome = controller.listen_and_append().await;
        assert_eq!(
            outcome,
            ListenOutcome::Appended("lens flare, golden hour".into())
        );

        let result = controller.generate().await;
        result.speak_task.expect("vocalization dispatched").await.unwrap();

        let spoken = spoken.spoken.lock().unwrap();
        assert_eq!(spoken.len(), 1);
        assert!(spoken[0].contains("lens flare, golden hour"));
    }
}
