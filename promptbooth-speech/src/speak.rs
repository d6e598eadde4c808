use promptbooth_engine::traits::SpeechOutput;

// Probe order: espeak-ng where installed, its older name, then the macOS
// built-in. No engine means the capability is absent, not an error.
const SYNTH_CANDIDATES: [&str; 3] = ["espeak-ng", "espeak", "say"];

/// Speech synthesis through a local command-line engine. One process per
/// utterance; queueing is whatever the engine itself does.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    program: String,
}

impl CommandSpeaker {
    /// Probes PATH for a known synthesis command.
    pub fn detect() -> Option<Self> {
        for candidate in SYNTH_CANDIDATES {
            if binary_exists(candidate) {
                log::info!("speech synthesis via {candidate}");
                return Some(Self {
                    program: candidate.into(),
                });
            }
        }

        log::info!("no local speech synthesis engine found");
        None
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

fn binary_exists(program: &str) -> bool {
    // Spawn failure means the binary is missing. A non-zero exit still
    // proves it exists, which is all the probe needs to know.
    std::process::Command::new(program)
        .arg("--version")
        .output()
        .is_ok()
}

#[async_trait::async_trait]
impl SpeechOutput for CommandSpeaker {
    fn is_available(&self) -> bool {
        true
    }

    async fn speak(&self, text: &str) -> anyhow::Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }

        let status = tokio::process::Command::new(&self.program)
            .arg(text)
            .status()
            .await
            .map_err(|e| anyhow::anyhow!("failed to run {}: {e}", self.program))?;

        if !status.success() {
            return Err(anyhow::anyhow!(
                "synthesis command {} exited with {status}",
                self.program
            ));
        }

        Ok(())
    }
}
