use promptbooth_core::config::{AppConfig, SpeechSettings};
use promptbooth_engine::controller::{FormController, ListenOutcome};
use promptbooth_engine::traits::{SpeechInput, SpeechOutput, Transcript};
use std::sync::{Arc, Mutex};

struct ScriptedRecognizer {
    transcript: String,
}

#[async_trait::async_trait]
impl SpeechInput for ScriptedRecognizer {
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

struct AbsentRecognizer;

#[async_trait::async_trait]
impl SpeechInput for AbsentRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    async fn listen_once(&self, _settings: &SpeechSettings) -> anyhow::Result<Transcript> {
        panic!("listen_once must not be reached when the capability is absent");
    }
}

struct FailingRecognizer;

#[async_trait::async_trait]
impl SpeechInput for FailingRecognizer {
    fn is_available(&self) -> bool {
        true
    }

    async fn listen_once(&self, _settings: &SpeechSettings) -> anyhow::Result<Transcript> {
        anyhow::bail!("microphone went away")
    }
}

struct MemorySpeaker {
    spoken: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl SpeechOutput for MemorySpeaker {
    fn is_available(&self) -> bool {
        true
    }

    async fn speak(&self, text: &str) -> anyhow::Result<()> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct AbsentSpeaker;

#[async_trait::async_trait]
impl SpeechOutput for AbsentSpeaker {
    fn is_available(&self) -> bool {
        false
    }

    async fn speak(&self, _text: &str) -> anyhow::Result<()> {
        panic!("speak must not be reached when the capability is absent");
    }
}

const NOIR_PROMPT: &str = "35mm contact sheet, grainy film noir, harsh shadows, \
                           Venetian blinds light effect, rain, high realism, \
                           cinematic still, —ar 2:3 —v 6 —style moody";

fn noir_controller(input: Arc<dyn SpeechInput>, output: Arc<dyn SpeechOutput>) -> FormController {
    let mut c = FormController::new(AppConfig::default(), input, output);
    c.set_vibe("noir");
    c.set_camera_format("35mm contact sheet");
    c.set_style("moody");
    c.set_extras("rain");
    c
}

#[tokio::test]
async fn generate_renders_noir_example() {
    let mut c = noir_controller(Arc::new(AbsentRecognizer), Arc::new(AbsentSpeaker));

    let result = c.generate().await;
    assert_eq!(result.prompt, NOIR_PROMPT);
    assert!(result.speak_task.is_none());
    assert_eq!(c.last_prompt(), Some(NOIR_PROMPT));

    // Unchanged state yields an identical string.
    assert_eq!(c.generate().await.prompt, NOIR_PROMPT);
}

#[tokio::test]
async fn generate_speaks_when_enabled_and_available() {
    let spoken = Arc::new(Mutex::new(vec![]));
    let mut c = noir_controller(
        Arc::new(AbsentRecognizer),
        Arc::new(MemorySpeaker {
            spoken: spoken.clone(),
        }),
    );
    c.toggle_speech_output();

    let result = c.generate().await;
    result.speak_task.expect("vocalization dispatched").await.unwrap();

    let spoken = spoken.lock().unwrap();
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0], NOIR_PROMPT);
}

#[tokio::test]
async fn generate_stays_silent_when_toggle_is_off() {
    let spoken = Arc::new(Mutex::new(vec![]));
    let mut c = noir_controller(
        Arc::new(AbsentRecognizer),
        Arc::new(MemorySpeaker {
            spoken: spoken.clone(),
        }),
    );

    let result = c.generate().await;
    assert!(result.speak_task.is_none());
    assert!(spoken.lock().unwrap().is_empty());
}

#[tokio::test]
async fn generate_skips_absent_synthesis() {
    let mut c = noir_controller(Arc::new(AbsentRecognizer), Arc::new(AbsentSpeaker));
    c.toggle_speech_output();

    // Must not panic or err; vocalization is silently skipped.
    let result = c.generate().await;
    assert!(result.speak_task.is_none());
    assert_eq!(result.prompt, NOIR_PROMPT);
}

#[tokio::test]
async fn listen_appends_transcript_to_extras() {
    let mut c = FormController::new(
        AppConfig::default(),
        Arc::new(ScriptedRecognizer {
            transcript: "golden hour".into(),
        }),
        Arc::new(AbsentSpeaker),
    );
    c.set_extras("lens flare");
    c.toggle_voice_input();
    assert!(c.voice_input_active());

    let outcome = c.listen_and_append().await;
    assert_eq!(outcome, ListenOutcome::Appended("lens flare, golden hour".into()));
    assert_eq!(c.draft().extras, "lens flare, golden hour");
}

#[tokio::test]
async fn listen_with_absent_capability_is_inert() {
    let mut c = FormController::new(
        AppConfig::default(),
        Arc::new(AbsentRecognizer),
        Arc::new(AbsentSpeaker),
    );
    c.set_extras("lens flare");
    c.toggle_voice_input();
    assert!(!c.voice_input_active());

    let outcome = c.listen_and_append().await;
    assert_eq!(outcome, ListenOutcome::Unavailable);
    assert_eq!(c.draft().extras, "lens flare");
}

#[tokio::test]
async fn listen_while_disabled_does_nothing() {
    let mut c = FormController::new(
        AppConfig::default(),
        Arc::new(ScriptedRecognizer {
            transcript: "golden hour".into(),
        }),
        Arc::new(AbsentSpeaker),
    );
    c.set_extras("lens flare");

    let outcome = c.listen_and_append().await;
    assert_eq!(outcome, ListenOutcome::Disabled);
    assert_eq!(c.draft().extras, "lens flare");
}

#[tokio::test]
async fn recognition_failure_leaves_extras_unchanged() {
    let mut c = FormController::new(
        AppConfig::default(),
        Arc::new(FailingRecognizer),
        Arc::new(AbsentSpeaker),
    );
    c.set_extras("lens flare");
    c.toggle_voice_input();

    let outcome = c.listen_and_append().await;
    assert_eq!(outcome, ListenOutcome::Empty);
    assert_eq!(c.draft().extras, "lens flare");
}
