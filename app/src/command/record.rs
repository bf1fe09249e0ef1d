//! Record-and-summarize command: capture an encounter, transcribe,
//! summarize, extract fields, persist.

use medscribe_assistant::Intake;
use medscribe_config::Config;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::init_common_components;

/// Input parameters for the Record command strategy.
#[derive(Debug, Clone)]
pub struct RecordInput {
    /// Capture duration override in seconds
    pub seconds: Option<u64>,
    /// Already-transcribed encounter text (skips capture and transcription)
    pub text: Option<String>,
    /// Existing WAV file to transcribe (skips capture)
    pub audio: Option<PathBuf>,
}

/// Strategy for executing the Record command.
#[derive(Debug, Clone, Copy)]
pub struct RecordStrategy;

impl super::CommandStrategy for RecordStrategy {
    type Input = RecordInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut common = init_common_components()?;
        let intake = Intake::new(common.groq.clone(), common.gemini.clone());

        let created = if let Some(text) = input.text {
            intake.record_transcript(&mut common.log, text).await?
        } else if let Some(audio) = input.audio {
            intake.record_file(&mut common.log, &audio).await?
        } else {
            let seconds = input
                .seconds
                .unwrap_or(common.config.audio.encounter_seconds);
            let wav_path = Config::ensure_config_dir()?.join("audio.wav");
            medscribe_audio::record_wav(&wav_path, Duration::from_secs(seconds))?;
            intake.record_file(&mut common.log, &wav_path).await?
        };

        info!("Encounter recorded: {}", created.id);

        println!("Recorded encounter {}", created.id);
        println!("  Patient:  {}", created.name);
        println!("  Age:      {}", created.age);
        println!("  Gender:   {}", created.gender);
        println!("  Disease:  {}", created.disease);
        println!("  Symptoms: {}", created.symptoms);

        Ok(())
    }
}
