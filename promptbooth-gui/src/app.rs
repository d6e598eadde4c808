use eframe::egui;
use promptbooth_core::camera::builtin_camera_formats;
use promptbooth_core::config::AppConfig;
use promptbooth_engine::controller::FormController;
use promptbooth_engine::traits::{SpeechInput, SpeechOutput};
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

pub struct PromptBoothApp {
    controller: FormController,

    // Selector contents, fixed at startup.
    vibe_options: Vec<(String, String)>,
    camera_options: Vec<String>,

    // Recognition runs on this runtime; the transcript comes back over the
    // channel and is applied on the UI thread.
    rt: tokio::runtime::Runtime,
    listen_rx: Option<mpsc::Receiver<anyhow::Result<String>>>,
}

impl PromptBoothApp {
    pub fn new(input: Arc<dyn SpeechInput>, output: Arc<dyn SpeechOutput>) -> anyhow::Result<Self> {
        let controller = FormController::new(AppConfig::default(), input, output);

        let vibe_options = controller
            .vibes()
            .presets()
            .iter()
            .map(|p| (p.key.clone(), p.label()))
            .collect();

        Ok(Self {
            controller,
            vibe_options,
            camera_options: builtin_camera_formats(),
            rt: tokio::runtime::Runtime::new()?,
            listen_rx: None,
        })
    }

    fn listening(&self) -> bool {
        self.listen_rx.is_some()
    }

    fn start_listening(&mut self) {
        let (tx, rx) = mpsc::channel();
        let input = self.controller.speech_input();
        let settings = self.controller.config().speech.clone();

        let _ = self.rt.spawn(async move {
            let result = input.listen_once(&settings).await.map(|t| t.text);
            let _ = tx.send(result);
        });

        self.listen_rx = Some(rx);
    }

    fn poll_listen_result(&mut self, ctx: &egui::Context) {
        let Some(rx) = self.listen_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(text)) => {
                self.controller.apply_transcript(&text);
            }
            Ok(Err(e)) => {
                // The extras field stays unchanged; nothing surfaces to the user.
                log::warn!("speech recognition failed: {e:#}");
            }
            Err(mpsc::TryRecvError::Empty) => {
                self.listen_rx = Some(rx);
                ctx.request_repaint_after(Duration::from_millis(150));
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                log::warn!("recognition task dropped its channel");
            }
        }
    }

    fn voice_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Voice input");
            let toggle_label = if self.controller.voice_input_enabled() {
                "Disable"
            } else {
                "Enable"
            };
            if ui.button(toggle_label).clicked() {
                self.controller.toggle_voice_input();
            }

            if self.controller.voice_input_enabled() {
                let can_listen = self.controller.voice_input_active() && !self.listening();
                if ui
                    .add_enabled(can_listen, egui::Button::new("Start talking"))
                    .clicked()
                {
                    self.start_listening();
                }
                if self.listening() {
                    ui.spinner();
                }
            }

            ui.separator();

            ui.label("Voice output");
            let toggle_label = if self.controller.speech_output_enabled() {
                "Disable"
            } else {
                "Enable"
            };
            if ui.button(toggle_label).clicked() {
                self.controller.toggle_speech_output();
            }
        });
    }

    fn form(&mut self, ui: &mut egui::Ui) {
        let mut vibe = self.controller.draft().vibe.clone();
        let selected_label = self
            .vibe_options
            .iter()
            .find(|(key, _)| *key == vibe)
            .map(|(_, label)| label.clone())
            .unwrap_or_else(|| vibe.clone());

        egui::ComboBox::from_label("Vibe")
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for (key, label) in &self.vibe_options {
                    ui.selectable_value(&mut vibe, key.clone(), label);
                }
            });
        if vibe != self.controller.draft().vibe {
            self.controller.set_vibe(vibe);
        }

        let mut camera = self.controller.draft().camera_format.clone();
        egui::ComboBox::from_label("Camera format")
            .selected_text(camera.clone())
            .show_ui(ui, |ui| {
                for option in &self.camera_options {
                    ui.selectable_value(&mut camera, option.clone(), option);
                }
            });
        if camera != self.controller.draft().camera_format {
            self.controller.set_camera_format(camera);
        }

        ui.add_space(6.0);
        ui.label("Style");
        let mut style = self.controller.draft().style.clone();
        if ui.text_edit_singleline(&mut style).changed() {
            self.controller.set_style(style);
        }

        ui.add_space(6.0);
        ui.label("Extras (realism enhancers)");
        let mut extras = self.controller.draft().extras.clone();
        if ui.text_edit_multiline(&mut extras).changed() {
            self.controller.set_extras(extras);
        }
    }
}

impl eframe::App for PromptBoothApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_listen_result(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Promptbooth");
            ui.label(egui::RichText::new("image prompt generator").small());
            ui.add_space(10.0);

            self.voice_controls(ui);
            ui.add_space(10.0);

            self.form(ui);
            ui.add_space(10.0);

            if ui.button("Generate prompt").clicked() {
                // Rendering is quick; vocalization is spawned and detached.
                let _ = self.rt.block_on(self.controller.generate());
            }

            ui.add_space(10.0);
            let mut output = self.controller.last_prompt().unwrap_or_default().to_string();
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut output)
                        .interactive(false)
                        .desired_width(f32::INFINITY)
                        .desired_rows(6),
                );
            });
        });
    }
}
