use async_trait::async_trait;
use promptbooth_core::config::SpeechSettings;
use serde::{Deserialize, Serialize};

/// The text result of a single recognition pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    pub backend: String,
}

/// Platform speech-recognition capability.
///
/// One pass per call, non-continuous, no interim results. Implementations
/// report availability up front so the UI can gate the dependent control.
#[async_trait]
pub trait SpeechInput: Send + Sync {
    fn is_available(&self) -> bool;

    async fn listen_once(&self, settings: &SpeechSettings) -> anyhow::Result<Transcript>;
}

/// Platform speech-synthesis capability. Utterance-based; callers decide
/// whether to await completion.
#[async_trait]
pub trait SpeechOutput: Send + Sync {
    fn is_available(&self) -> bool;

    async fn speak(&self, text: &str) -> anyhow::Result<()>;
}
