use std::path::Path;

use crate::error::ConfigError;
use crate::game::Symbol;

/// Which frontend drives the match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FrontendKind {
    /// Line-based prompts on stdin/stdout
    #[default]
    Console,
    /// Full-screen terminal UI
    Tui,
}

/// Display names for the two players.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerNames {
    pub x: String,
    pub o: String,
}

impl PlayerNames {
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        PlayerNames {
            x: "Player X".to_string(),
            o: "Player O".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub first_player: Symbol,
    pub frontend: FrontendKind,
    /// Clear the terminal before each console render.
    pub clear_screen: bool,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub players: PlayerNames,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            first_player: Symbol::X,
            frontend: FrontendKind::Console,
            clear_screen: true,
            log_filter: "warn".to_string(),
            players: PlayerNames::default(),
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
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.x.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.x must not be empty".into(),
            ));
        }
        if self.players.o.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.o must not be empty".into(),
            ));
        }
        if self.players.x.trim() == self.players.o.trim() {
            return Err(ConfigError::Validation(
                "players.x and players.o must differ".into(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log_filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Render the default configuration as TOML.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
