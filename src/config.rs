use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::session::{PileSelection, SessionConfig};

/// Session settings: how many matches to play and how the starting pile
/// is chosen.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub num_matches: u64,
    /// Starting pile when `random_pile` is off.
    pub pile_size: u32,
    pub random_pile: bool,
    pub random_pile_min: u32,
    pub random_pile_max: u32,
    pub show_moves: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            num_matches: 1,
            pile_size: 10,
            random_pile: false,
            random_pile_min: 3,
            random_pile_max: 20,
            show_moves: true,
        }
    }
}

/// Where the learning agent keeps its move distributions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub moves_file: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            moves_file: PathBuf::from("moves.txt"),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionSettings,
    pub store: StoreSettings,
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.num_matches == 0 {
            return Err(ConfigError::Validation(
                "session.num_matches must be >= 1".into(),
            ));
        }
        if self.session.random_pile {
            if self.session.random_pile_min == 0 {
                return Err(ConfigError::Validation(
                    "session.random_pile_min must be >= 1".into(),
                ));
            }
            if self.session.random_pile_max < self.session.random_pile_min {
                return Err(ConfigError::Validation(
                    "session.random_pile_max must be >= session.random_pile_min".into(),
                ));
            }
        } else if self.session.pile_size == 0 {
            return Err(ConfigError::Validation(
                "session.pile_size must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Translate the settings into a runner configuration.
    pub fn session_config(&self) -> SessionConfig {
        let pile = if self.session.random_pile {
            PileSelection::Random {
                min: self.session.random_pile_min,
                max: self.session.random_pile_max,
            }
        } else {
            PileSelection::Fixed(self.session.pile_size)
        };
        SessionConfig {
            num_matches: self.session.num_matches,
            pile,
            show_moves: self.session.show_moves,
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
