// Static camera-format presets offered by the selector.

pub const CAMERA_FORMATS: [&str; 10] = [
    "IMG_0458.CR2",
    "DSC_5472.NEF",
    "Fujifilm Pro 400H, scanned negative",
    "screenshot from RED Komodo 6K",
    "35mm contact sheet",
    "still from a Criterion Collection Blu-ray",
    "from the Vogue archive",
    "unreleased iPhone 15 Pro Max sample photo",
    "DSLR full-frame, ISO 100, f/1.4, 85mm",
    "metadata: 1/125 sec, ISO 200, 50mm lens, RAW",
];

pub fn builtin_camera_formats() -> Vec<String> {
    CAMERA_FORMATS.iter().map(|s| s.to_string()).collect()
}

/// Startup value. Not a member of the preset list; the field accepts any
/// string, and this is what the original widget boots with.
pub fn default_camera_format() -> &'static str {
    "IMG_9854.CR2"
}
