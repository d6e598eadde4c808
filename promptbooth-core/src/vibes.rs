use serde::{Deserialize, Serialize};

/// A named aesthetic preset. The key is what the selector shows (capitalized);
/// the phrase is what the formatter splices into the generated prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibePreset {
    pub key: String,
    pub phrase: String,
}

impl VibePreset {
    pub fn new(key: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            phrase: phrase.into(),
        }
    }

    /// Selector display label: the key with its first letter uppercased.
    pub fn label(&self) -> String {
        capitalize_first(&self.key)
    }
}

/// Read-only table of vibe presets, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeCatalog {
    presets: Vec<VibePreset>,
}

// Key/phrase pairs of the built-in catalog, in selector order.
const BUILTIN_VIBES: [(&str, &str); 10] = [
    (
        "fashion",
        "from ELLE archives, shot for Balenciaga FW20, Vogue backstage",
    ),
    (
        "fantasy",
        "concept art by Weta Digital, on location in Rivendell, staged for The Witcher S2",
    ),
    (
        "street",
        "taken on a Leica M11, NYC, September 2018, from The Sartorialist archive",
    ),
    (
        "wildlife",
        "NatGeo award winner, wildlife lens compression, morning mist through branches",
    ),
    (
        "portrait",
        "studio lighting setup A, beauty dish + rim lights, unretouched editorial outtake",
    ),
    (
        "cyberpunk",
        "still from Ghost in the Shell, neon lighting, shot in Shibuya at night",
    ),
    (
        "noir",
        "grainy film noir, harsh shadows, Venetian blinds light effect",
    ),
    (
        "editorial",
        "from Vogue Italia 2006, raw outtake, candid backlight, shot by Steven Meisel",
    ),
    (
        "filmset",
        "behind-the-scenes from a Warner Bros. set, crew blurred in background, candid focus",
    ),
    (
        "cinematic",
        "still from RED Komodo 6K short, professional color grading, aspect ratio 2.39:1",
    ),
];

pub fn default_vibe_key() -> &'static str {
    "fashion"
}

impl VibeCatalog {
    pub fn new(presets: Vec<VibePreset>) -> Self {
        Self { presets }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_VIBES
                .iter()
                .map(|(key, phrase)| VibePreset::new(*key, *phrase))
                .collect(),
        )
    }

    pub fn presets(&self) -> &[VibePreset] {
        &self.presets
    }

    pub fn contains(&self, key: &str) -> bool {
        self.presets.iter().any(|p| p.key == key)
    }

    pub fn phrase_for(&self, key: &str) -> Option<&str> {
        self.presets
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.phrase.as_str())
    }

    /// Lookup that never fails: unknown keys resolve to the first preset's
    /// phrase. The selector constrains choices, so this only triggers on
    /// programmatic misuse.
    pub fn resolve_phrase(&self, key: &str) -> &str {
        self.phrase_for(key)
            .or_else(|| self.presets.first().map(|p| p.phrase.as_str()))
            .unwrap_or("")
    }
}

pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
