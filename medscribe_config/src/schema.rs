use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub agents: AgentsConfig,
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AgentsConfig {
    pub defaults: AgentDefaults,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AgentDefaults {
    pub chat_model: String,
    pub summary_model: String,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub groq: ProviderConfig,
    pub gemini: ProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StorageConfig {
    /// Path to the patient record log. Defaults to
    /// `~/medscribe/patient_log.jsonl` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolve_data_file(&self) -> anyhow::Result<PathBuf> {
        self.data_file.as_ref().map_or_else(
            || Ok(Config::ensure_config_dir()?.join("patient_log.jsonl")),
            |path| Ok(path.clone()),
        )
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AudioConfig {
    /// Capture duration for a full encounter recording.
    #[serde(default = "AudioConfig::default_encounter_seconds")]
    pub encounter_seconds: u64,
    /// Capture duration for a spoken question.
    #[serde(default = "AudioConfig::default_question_seconds")]
    pub question_seconds: u64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            encounter_seconds: Self::default_encounter_seconds(),
            question_seconds: Self::default_question_seconds(),
        }
    }
}

impl AudioConfig {
    const fn default_encounter_seconds() -> u64 {
        6
    }

    const fn default_question_seconds() -> u64 {
        5
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RetrievalConfig {
    /// How many most-recent records stand in as context when no keyword
    /// matches.
    #[serde(default = "RetrievalConfig::default_fallback_window")]
    pub fallback_window: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            fallback_window: Self::default_fallback_window(),
        }
    }
}

impl RetrievalConfig {
    const fn default_fallback_window() -> usize {
        5
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'medscribe init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("medscribe");
        Ok(config_dir.join("config.json"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("medscribe");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "agents": {
    "defaults": {
      "chat_model": "llama-3.3-70b-versatile",
      "summary_model": "gemini-1.5-flash",
      "temperature": 0.7,
      "system_prompt": "You are a helpful AI medical assistant."
    }
  },
  "providers": {
    "groq": {
      "api_key": "your-groq-api-key-here"
    },
    "gemini": {
      "api_key": "your-gemini-api-key-here"
    }
  },
  "storage": {},
  "audio": {
    "encounter_seconds": 6,
    "question_seconds": 5
  },
  "retrieval": {
    "fallback_window": 5
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Edit the config file and add your Groq and Gemini API keys");
        println!("   2. Run 'medscribe record' to capture an encounter");
        println!("   3. Run 'medscribe ask -m \"...\"' to query the records");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn minimal_config_parses_with_defaults() {
        let json = r#"{
          "agents": {
            "defaults": {
              "chat_model": "llama-3.3-70b-versatile",
              "summary_model": "gemini-1.5-flash",
              "temperature": 0.7
            }
          },
          "providers": {
            "groq": { "api_key": "gk" },
            "gemini": { "api_key": "gm" }
          }
        }"#;

        let config: Config = serde_json::from_str(json).expect("parse");
        assert_eq!(config.audio.encounter_seconds, 6);
        assert_eq!(config.audio.question_seconds, 5);
        assert_eq!(config.retrieval.fallback_window, 5);
        assert!(config.storage.data_file.is_none());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn explicit_data_file_wins_over_default() {
        let storage = StorageConfig {
            data_file: Some(PathBuf::from("/tmp/records.jsonl")),
        };
        let resolved = storage.resolve_data_file().expect("resolve");
        assert_eq!(resolved, PathBuf::from("/tmp/records.jsonl"));
    }
}
