use serde::{Deserialize, Serialize};

/// Settings handed to the speech-input backend for a recognition pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// Recognition language tag. Single-shot US English by default.
    pub language: String,

    /// Upper bound on one capture pass, in seconds.
    pub max_capture_secs: u64,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            language: "en-US".into(),
            max_capture_secs: 8,
        }
    }
}

/// In-memory app configuration. Nothing here is persisted; state is
/// discarded when the session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub voice_input_enabled: bool,
    pub speech_output_enabled: bool,

    #[serde(default)]
    pub speech: SpeechSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_default_off() {
        let cfg = AppConfig::default();
        assert!(!cfg.voice_input_enabled);
        assert!(!cfg.speech_output_enabled);
        assert_eq!(cfg.speech.language, "en-US");
    }
}
