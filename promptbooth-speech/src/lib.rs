pub mod capture;
pub mod speak;
pub mod test;

#[cfg(feature = "whisper")]
pub mod whisper;

use promptbooth_engine::traits::{SpeechInput, SpeechOutput};
use std::path::PathBuf;
use std::sync::Arc;

/// Best recognition backend this build carries. Without the `whisper`
/// feature there is no local recognizer and the capability reports absent.
#[cfg(feature = "whisper")]
pub fn native_speech_input(model_path: impl Into<PathBuf>) -> Arc<dyn SpeechInput> {
    Arc::new(whisper::WhisperRecognizer::new(model_path))
}

#[cfg(not(feature = "whisper"))]
pub fn native_speech_input(model_path: impl Into<PathBuf>) -> Arc<dyn SpeechInput> {
    let _: PathBuf = model_path.into();
    Arc::new(test::UnavailableSpeechInput)
}

/// Probes for a local synthesis command; absent means the speech-output
/// controls silently skip vocalization.
pub fn native_speech_output() -> Arc<dyn SpeechOutput> {
    match speak::CommandSpeaker::detect() {
        Some(speaker) => Arc::new(speaker),
        None => Arc::new(test::UnavailableSpeechOutput),
    }
}
