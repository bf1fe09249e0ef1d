//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically so command wiring is checked at compile time.

use medscribe_config::Config;
use medscribe_providers::{GeminiProvider, GroqProvider};
use medscribe_store::RecordLog;
use tracing::info;

mod ask;
mod info;
mod init;
mod record;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use record::{RecordInput, RecordStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy declares its own input type, so parameters stay type-safe
/// without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Components every record/ask invocation needs: loaded config, the two
/// provider clients, and the opened record log.
pub struct CommonComponents {
    pub config: Config,
    pub groq: GroqProvider,
    pub gemini: GeminiProvider,
    pub log: RecordLog,
}

/// Load configuration, build provider clients, and open the record log.
pub fn init_common_components() -> anyhow::Result<CommonComponents> {
    let config = Config::load()?;
    info!("Loaded config from ~/medscribe/config.json");

    let groq = GroqProvider::new(config.providers.groq.api_key.clone());
    let gemini = GeminiProvider::new(config.providers.gemini.api_key.clone())
        .with_model(config.agents.defaults.summary_model.clone());

    let data_file = config.storage.resolve_data_file()?;
    info!("Record log path: {}", data_file.display());
    let log = RecordLog::open(data_file)?;

    Ok(CommonComponents {
        config,
        groq,
        gemini,
        log,
    })
}
