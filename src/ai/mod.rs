mod anthropic;
pub mod credentials;
mod human;
mod llm;
mod openai;
mod parse;
mod provider;
mod random;

use std::io;
use std::path::Path;

pub use anthropic::AnthropicBackend;
pub use human::HumanProvider;
pub use llm::{rules_text, user_prompt, ChatBackend, LlmProvider, SYSTEM_PROMPT};
pub use openai::OpenAiBackend;
pub use parse::parse_move;
pub use provider::{MoveProvider, MoveRequest};
pub use random::{random_valid_column, RandomProvider};

use crate::config::AppConfig;
use crate::error::ProviderError;

/// Who sits in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Random,
    #[value(name = "openai")]
    OpenAi,
    Anthropic,
}

impl PlayerKind {
    pub fn display_name(self) -> &'static str {
        match self {
            PlayerKind::Human => "Human",
            PlayerKind::Random => "Random",
            PlayerKind::OpenAi => "GPT-4",
            PlayerKind::Anthropic => "Claude",
        }
    }
}

/// Build a provider for `kind`. Humans read from stdin. A missing API key is
/// reported here, before the game starts.
pub fn build_provider(
    kind: PlayerKind,
    config: &AppConfig,
    dotenv: &Path,
) -> Result<Box<dyn MoveProvider>, ProviderError> {
    let provider: Box<dyn MoveProvider> = match kind {
        PlayerKind::Human => Box::new(HumanProvider::new(
            kind.display_name(),
            io::BufReader::new(io::stdin()),
            io::stdout(),
        )),
        PlayerKind::Random => Box::new(RandomProvider::new()),
        PlayerKind::OpenAi => {
            let key = credentials::resolve_api_key(&config.openai.api_key_env, dotenv)?;
            let backend = OpenAiBackend::new(config.openai.clone(), key)?;
            Box::new(LlmProvider::new(kind.display_name(), backend))
        }
        PlayerKind::Anthropic => {
            let key = credentials::resolve_api_key(&config.anthropic.api_key_env, dotenv)?;
            let backend = AnthropicBackend::new(config.anthropic.clone(), key)?;
            Box::new(LlmProvider::new(kind.display_name(), backend))
        }
    };
    Ok(provider)
}
