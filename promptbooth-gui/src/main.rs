use eframe::egui;

mod app;

use app::PromptBoothApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Model path only matters for whisper builds; other builds report the
    // recognition capability as absent and the app hides the control.
    let model_path = std::env::var("PROMPTBOOTH_WHISPER_MODEL")
        .unwrap_or_else(|_| "models/ggml-base.en.bin".into());

    let input = promptbooth_speech::native_speech_input(model_path);
    let output = promptbooth_speech::native_speech_output();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 680.0])
            .with_title("Promptbooth"),
        ..Default::default()
    };

    eframe::run_native(
        "Promptbooth",
        options,
        Box::new(move |_cc| Ok(Box::new(PromptBoothApp::new(input, output)?))),
    )
}
