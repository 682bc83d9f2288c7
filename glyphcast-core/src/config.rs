use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::Coordinates;

pub const DEFAULT_UNITS: &str = "C";
pub const DEFAULT_LANG: &str = "en";

/// Reasons a run cannot start. These are user guidance, not failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("must specify API key, see --help for usage")]
    MissingApiKey,

    #[error("must specify coordinates, see --help for usage")]
    MissingCoordinates,
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    pub api_key: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub units: Option<String>,
    pub lang: Option<String>,
    pub debug: bool,
    pub icon: bool,
}

/// Settings for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub coordinates: Coordinates,
    /// Passed to the weather service as-is; expected to be K, C or F.
    pub units: String,
    /// ISO 639-1 code for condition descriptions.
    pub lang: String,
    pub debug: bool,
    pub icon: bool,
}

impl Config {
    /// Merge command-line values over the config file and apply defaults.
    ///
    /// The API key is checked before the coordinates.
    pub fn resolve(args: ConfigArgs, file: &FileConfig) -> Result<Self, ConfigError> {
        let api_key = args
            .api_key
            .or_else(|| file.api_key.clone())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let coordinates = args.coordinates.or(file.coords).unwrap_or_default();
        if coordinates.is_unset() {
            return Err(ConfigError::MissingCoordinates);
        }

        let units = args
            .units
            .or_else(|| file.units.clone())
            .unwrap_or_else(|| DEFAULT_UNITS.to_string());
        let lang = args
            .lang
            .or_else(|| file.lang.clone())
            .unwrap_or_else(|| DEFAULT_LANG.to_string());

        Ok(Self { api_key, coordinates, units, lang, debug: args.debug, icon: args.icon })
    }
}

/// Optional defaults stored on disk.
///
/// Example TOML:
/// api_key = "..."
/// coords = "51.5,-0.12"
/// units = "F"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub coords: Option<Coordinates>,
    pub units: Option<String>,
    pub lang: Option<String>,
}

impl FileConfig {
    /// Load the config from the platform config dir, or return an empty default if it doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::config_file_path()?)
    }

    fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(path)
    }

    /// Load the config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: FileConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "glyphcast", "glyphcast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
