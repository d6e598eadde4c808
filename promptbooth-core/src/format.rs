use crate::draft::PromptDraft;
use crate::vibes::VibeCatalog;

// Fixed fragments of the output template. The flag strings use em dashes,
// matching what the downstream image tool expects.
pub const REALISM_FRAGMENT: &str = "high realism";
pub const CINEMATIC_FRAGMENT: &str = "cinematic still";
pub const ASPECT_RATIO_FLAG: &str = "—ar 2:3";
pub const VERSION_FLAG: &str = "—v 6";
pub const STYLE_FLAG: &str = "—style";

/// Renders the draft into the final prompt string.
///
/// Field order is fixed: camera format, vibe phrase, extras, the two literal
/// fragments, then the aspect-ratio/version/style flags. Pure; recomputed in
/// full on every generate action. Unknown vibe keys resolve through
/// [`VibeCatalog::resolve_phrase`], so rendering never fails.
pub fn render_prompt(draft: &PromptDraft, vibes: &VibeCatalog) -> String {
    format!(
        "{camera}, {vibe}, {extras}, {realism}, {cinematic}, {ar} {version} {style_flag} {style}",
        camera = draft.camera_format,
        vibe = vibes.resolve_phrase(&draft.vibe),
        extras = draft.extras,
        realism = REALISM_FRAGMENT,
        cinematic = CINEMATIC_FRAGMENT,
        ar = ASPECT_RATIO_FLAG,
        version = VERSION_FLAG,
        style_flag = STYLE_FLAG,
        style = draft.style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> VibeCatalog {
        VibeCatalog::builtin()
    }

    #[test]
    fn renders_noir_example() {
        let draft = PromptDraft::new()
            .with_vibe("noir")
            .with_camera_format("35mm contact sheet")
            .with_style("moody")
            .with_extras("rain");

        assert_eq!(
            render_prompt(&draft, &catalog()),
            "35mm contact sheet, grainy film noir, harsh shadows, \
             Venetian blinds light effect, rain, high realism, cinematic still, \
             —ar 2:3 —v 6 —style moody"
        );
    }

    #[test]
    fn fragments_appear_in_field_order() {
        let draft = PromptDraft::new()
            .with_vibe("cyberpunk")
            .with_camera_format("DSC_5472.NEF")
            .with_style("neon")
            .with_extras("wet asphalt");

        let out = render_prompt(&draft, &catalog());
        let positions: Vec<usize> = [
            "DSC_5472.NEF",
            "still from Ghost in the Shell",
            "wet asphalt",
            REALISM_FRAGMENT,
            CINEMATIC_FRAGMENT,
            ASPECT_RATIO_FLAG,
            VERSION_FLAG,
            "neon",
        ]
        .iter()
        .map(|needle| out.find(needle).expect("fragment present"))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rendering_is_idempotent() {
        let draft = PromptDraft::default();
        let vibes = catalog();
        assert_eq!(render_prompt(&draft, &vibes), render_prompt(&draft, &vibes));
    }

    #[test]
    fn unknown_vibe_renders_with_fallback_phrase() {
        let draft = PromptDraft::new().with_vibe("vaporwave");
        let vibes = catalog();
        let out = render_prompt(&draft, &vibes);
        assert!(out.contains(vibes.phrase_for("fashion").unwrap()));
    }

    #[test]
    fn empty_fields_still_render_template() {
        let draft = PromptDraft::new()
            .with_camera_format("")
            .with_style("")
            .with_extras("");
        let out = render_prompt(&draft, &catalog());
        assert!(out.ends_with("—ar 2:3 —v 6 —style "));
    }
}
