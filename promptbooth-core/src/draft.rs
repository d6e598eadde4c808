use crate::camera::default_camera_format;
use crate::vibes::default_vibe_key;
use serde::{Deserialize, Serialize};

/// User-editable selection state. Mutated only by direct user input; the
/// generated prompt is derived from it in full on each generate action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDraft {
    pub vibe: String,
    pub camera_format: String,
    pub style: String,
    pub extras: String,
}

impl Default for PromptDraft {
    fn default() -> Self {
        Self {
            vibe: default_vibe_key().into(),
            camera_format: default_camera_format().into(),
            style: "cinematic".into(),
            extras: "lens flare, natural skin texture, shallow depth of field".into(),
        }
    }
}

impl PromptDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vibe(mut self, vibe: impl Into<String>) -> Self {
        self.vibe = vibe.into();
        self
    }

    pub fn with_camera_format(mut self, camera_format: impl Into<String>) -> Self {
        self.camera_format = camera_format.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_extras(mut self, extras: impl Into<String>) -> Self {
        self.extras = extras.into();
        self
    }
}
