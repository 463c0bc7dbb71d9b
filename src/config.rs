use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{is_valid_symbol, Symbol};
use crate::constants::{CODE_LENGTH, CONFIG_FILE_NAME, DEFAULT_ROWS, MAX_ROWS};
use crate::error::ConfigError;
use crate::game::generate_code;
use crate::input::{parse_guess, tokenize};
use crate::utils::persistence;

/// Where the hidden code comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretSource {
    /// Fresh random code each game
    #[default]
    Random,
    /// Random code derived from a fixed seed
    Seeded(u64),
    /// A fixed code
    Literal([Symbol; CODE_LENGTH]),
}

impl SecretSource {
    /// Parse a literal code written like a guess, e.g. `1526` or `1 5 2 6`.
    pub fn parse_literal(text: &str) -> Result<Self, ConfigError> {
        parse_guess(&tokenize(text))
            .map(SecretSource::Literal)
            .map_err(|e| ConfigError::Validation(format!("secret code: {}", e)))
    }

    /// Produce the code for a new game.
    pub fn resolve(&self) -> [Symbol; CODE_LENGTH] {
        match *self {
            SecretSource::Random => generate_code(&mut rand::thread_rng()),
            SecretSource::Seeded(seed) => generate_code(&mut StdRng::seed_from_u64(seed)),
            SecretSource::Literal(code) => code,
        }
    }
}

/// Game configuration, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of guesses the player gets
    pub rows: usize,
    pub secret: SecretSource,
    /// Colour the pegs with ANSI escapes
    pub color: bool,
    /// Clear the terminal before drawing the board
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            secret: SecretSource::Random,
            color: true,
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Path of the default config file, ~/.mastermind/config.json.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        persistence::data_path(CONFIG_FILE_NAME)
    }

    /// Load configuration from a JSON file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig = persistence::load_json(path)?.ok_or_else(|| {
            ConfigError::FileRead {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match persistence::load_json::<GameConfig>(path)? {
            Some(config) => {
                config.validate()?;
                log::debug!("loaded config from {}", path.display());
                Ok(config)
            }
            None => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
        }
    }

    /// Save configuration as JSON.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        persistence::save_json(path, self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be > 0".into()));
        }
        if self.rows > MAX_ROWS {
            return Err(ConfigError::Validation(format!(
                "rows must be <= {}",
                MAX_ROWS
            )));
        }
        if let SecretSource::Literal(code) = self.secret {
            if !code.iter().all(|&s| is_valid_symbol(s)) {
                return Err(ConfigError::Validation(
                    "secret code symbols must be between 1 and 6".into(),
                ));
            }
        }
        Ok(())
    }
}
