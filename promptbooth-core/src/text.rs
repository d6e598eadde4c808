use regex::Regex;
use std::sync::OnceLock;

fn bracketed_artifacts_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Recognition engines emit bracketed non-speech markers ("[noise]",
        // "(laughs)"). Negated char classes keep the match within one pair.
        Regex::new(r"(?s)\[[^\]]*\]|\([^\)]*\)").expect("valid bracket regex")
    })
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"))
}

/// Cleans a raw recognition transcript before it reaches the extras field:
/// drops bracketed artifacts, collapses whitespace runs, trims the ends.
pub fn filter_transcript(text: &str) -> String {
    let out = bracketed_artifacts_re().replace_all(text, "");
    let out = whitespace_re().replace_all(&out, " ");
    out.trim().to_string()
}

/// Appends a transcript to the extras value as `", <transcript>"`.
///
/// A blank extras value yields the bare transcript, and a blank transcript
/// leaves extras unchanged.
pub fn append_transcript(extras: &str, transcript: &str) -> String {
    let transcript = transcript.trim();
    if transcript.is_empty() {
        return extras.to_string();
    }
    if extras.trim().is_empty() {
        return transcript.to_string();
    }
    format!("{extras}, {transcript}")
}
