use std::path::Path;

use log::warn;

use crate::ai::PlayerKind;
use crate::error::ConfigError;
use crate::game::{GameRules, DEFAULT_COLS, DEFAULT_ROTATION_INTERVAL, DEFAULT_ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub rules: RulesConfig,
    pub pacing: PacingConfig,
    pub players: PlayersConfig,
    pub openai: OpenAiConfig,
    pub anthropic: AnthropicConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub rotation_enabled: bool,
    pub rotation_interval: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            rotation_enabled: true,
            rotation_interval: DEFAULT_ROTATION_INTERVAL,
        }
    }
}

/// Cosmetic delay between turns in the headless match runner.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub turn_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig {
            turn_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub red: PlayerKind,
    pub yellow: PlayerKind,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            red: PlayerKind::OpenAi,
            yellow: PlayerKind::Anthropic,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub api_key_env: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        OpenAiConfig {
            endpoint: "https://api.openai.com/v1/chat/completions".into(),
            model: "gpt-4o".into(),
            temperature: 0.5,
            timeout_secs: 30,
            api_key_env: "OPENAI_API_KEY".into(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnthropicConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub api_key_env: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        AnthropicConfig {
            endpoint: "https://api.anthropic.com/v1/messages".into(),
            model: "claude-3-7-sonnet-latest".into(),
            max_tokens: 150,
            temperature: 0.5,
            timeout_secs: 30,
            api_key_env: "ANTHROPIC_API_KEY".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        if self.rules.rotation_interval == 0 {
            return Err(ConfigError::Validation(
                "rules.rotation_interval must be > 0".into(),
            ));
        }

        if !(0.0..=2.0).contains(&self.openai.temperature) {
            return Err(ConfigError::Validation(
                "openai.temperature must be in [0, 2]".into(),
            ));
        }
        if self.openai.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "openai.timeout_secs must be > 0".into(),
            ));
        }
        if self.openai.model.trim().is_empty() {
            return Err(ConfigError::Validation("openai.model must not be empty".into()));
        }

        if !(0.0..=1.0).contains(&self.anthropic.temperature) {
            return Err(ConfigError::Validation(
                "anthropic.temperature must be in [0, 1]".into(),
            ));
        }
        if self.anthropic.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "anthropic.timeout_secs must be > 0".into(),
            ));
        }
        if self.anthropic.max_tokens == 0 {
            return Err(ConfigError::Validation(
                "anthropic.max_tokens must be > 0".into(),
            ));
        }
        if self.anthropic.model.trim().is_empty() {
            return Err(ConfigError::Validation(
                "anthropic.model must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Board shape and rotation schedule for a new game
    pub fn game_rules(&self) -> GameRules {
        GameRules {
            rows: self.board.rows,
            cols: self.board.cols,
            rotation_enabled: self.rules.rotation_enabled,
            rotation_interval: self.rules.rotation_interval,
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game_rules(), GameRules::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[rules]
rotation_interval = 4
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rules.rotation_interval, 4);
        assert!(config.rules.rotation_enabled);
        assert_eq!(config.board.rows, 8);
        assert_eq!(config.board.cols, 9);
        assert_eq!(config.openai.model, "gpt-4o");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game_rules(), AppConfig::default().game_rules());
        assert_eq!(config.pacing.turn_delay_ms, 1000);
        assert_eq!(config.players.red, PlayerKind::OpenAi);
        assert_eq!(config.players.yellow, PlayerKind::Anthropic);
    }

    #[test]
    fn test_player_kinds_parse_lowercase() {
        let toml_str = r#"
[players]
red = "human"
yellow = "random"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.red, PlayerKind::Human);
        assert_eq!(config.players.yellow, PlayerKind::Random);
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_cols() {
        let mut config = AppConfig::default();
        config.board.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_interval() {
        let mut config = AppConfig::default();
        config.rules.rotation_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_temperature() {
        let mut config = AppConfig::default();
        config.openai.temperature = 2.5;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.anthropic.temperature = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let mut config = AppConfig::default();
        config.anthropic.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_max_tokens() {
        let mut config = AppConfig::default();
        config.anthropic.max_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.rules.rotation_interval, 6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 7
cols = 7

[rules]
rotation_enabled = false
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        let rules = config.game_rules();
        assert_eq!((rules.rows, rules.cols), (7, 7));
        assert!(!rules.rotation_enabled);
        assert_eq!(rules.rotation_interval, 6);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nrows = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
