use medscribe_config::Config;
use medscribe_store::RecordLog;

/// Strategy for displaying configuration and store status.
///
/// Outputs API keys (masked), agent defaults, audio capture durations,
/// retrieval settings, and the record log path with its current size.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== medscribe Configuration ===\n");

        println!("API Keys:");
        println!("  Groq:   {}", mask_key(&config.providers.groq.api_key));
        println!("  Gemini: {}", mask_key(&config.providers.gemini.api_key));
        println!();

        println!("Agent Defaults:");
        println!("  Chat Model:    {}", config.agents.defaults.chat_model);
        println!("  Summary Model: {}", config.agents.defaults.summary_model);
        println!("  Temperature:   {}", config.agents.defaults.temperature);
        if let Some(ref prompt) = config.agents.defaults.system_prompt {
            println!("  System Prompt: {}", truncate(prompt, 60));
        }
        println!();

        println!("Audio:");
        println!("  Encounter Capture: {}s", config.audio.encounter_seconds);
        println!("  Question Capture:  {}s", config.audio.question_seconds);
        println!();

        println!("Retrieval:");
        println!("  Fallback Window: {}", config.retrieval.fallback_window);
        println!();

        println!("Record Store:");
        let data_file = config.storage.resolve_data_file()?;
        println!("  Path: {}", data_file.display());
        match RecordLog::open(&data_file) {
            Ok(log) => {
                println!("  Status: OK");
                println!("  Records: {}", log.len());
            }
            Err(e) => {
                println!("  Status: Unreadable");
                println!("  Error: {e}");
            }
        }

        Ok(())
    }
}

fn mask_key(api_key: &str) -> String {
    if api_key.len() > 8 {
        format!("{}...{}", &api_key[..4], &api_key[api_key.len() - 4..])
    } else {
        "***".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
