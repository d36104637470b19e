//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.text-merger/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MergerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub path: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const APP_DIR_NAME: &str = ".text-merger";
pub const DEFAULT_STORAGE_FILE: &str = "storage.json";
pub const DEFAULT_LOG_FILE: &str = "text-merger.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

pub const STORAGE_ENV: &str = "TEXT_MERGER_STORAGE";
pub const LOG_FILE_ENV: &str = "TEXT_MERGER_LOG_FILE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the two sources are kept between runs.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageLocation {
    File(PathBuf),
    /// Nothing survives the process.
    Memory,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub storage: StorageLocation,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// Problems found while resolving, logged by `main` after logger init.
    pub warnings: Vec<String>,
}

/// Overrides taken from the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub storage: Option<PathBuf>,
    pub ephemeral: bool,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.text-merger/`.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DIR_NAME))
}

/// Returns the path to `~/.text-merger/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|d| d.join("config.toml"))
}

/// Where the loaded config came from.
///
/// `load_config` runs before the logger exists, so it reports here instead of
/// logging, and `main` calls [`ConfigOrigin::log`] once logging is up.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// No file existed; a commented default was written.
    Generated(PathBuf),
    /// No file existed and writing the default failed.
    GenerateFailed(PathBuf, String),
    NoHomeDir,
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => info!("Loaded config from {}", path.display()),
            ConfigOrigin::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigOrigin::GenerateFailed(path, e) => {
                warn!("Failed to write default config to {}: {}", path.display(), e)
            }
            ConfigOrigin::NoHomeDir => warn!("Could not determine home directory, using default config"),
        }
    }
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: MergerConfig,
    pub origin: ConfigOrigin,
}

/// Load config from `~/.text-merger/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MergerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(LoadedConfig {
            config: MergerConfig::default(),
            origin: ConfigOrigin::NoHomeDir,
        }),
    }
}

pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        let origin = match generate_default_config(path) {
            Ok(()) => ConfigOrigin::Generated(path.to_path_buf()),
            Err(e) => ConfigOrigin::GenerateFailed(path.to_path_buf(), e.to_string()),
        };
        return Ok(LoadedConfig {
            config: MergerConfig::default(),
            origin,
        });
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MergerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok(LoadedConfig {
        config,
        origin: ConfigOrigin::File(path.to_path_buf()),
    })
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Text Merger Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "/home/me/.text-merger/text-merger.log"   # Or set TEXT_MERGER_LOG_FILE

# [storage]
# path = "/home/me/.text-merger/storage.json"          # Or set TEXT_MERGER_STORAGE
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MergerConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

/// `resolve` with an injectable environment lookup.
fn resolve_with_env(
    config: &MergerConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let base_dir = app_dir().unwrap_or_else(|| PathBuf::from("."));

    // Storage: --ephemeral → CLI path → env → config → default
    let storage = if cli.ephemeral {
        StorageLocation::Memory
    } else {
        let path = cli
            .storage
            .clone()
            .or_else(|| env(STORAGE_ENV).map(PathBuf::from))
            .or_else(|| config.storage.path.clone())
            .unwrap_or_else(|| base_dir.join(DEFAULT_STORAGE_FILE));
        StorageLocation::File(path)
    };

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env(LOG_FILE_ENV).map(PathBuf::from))
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| base_dir.join(DEFAULT_LOG_FILE));

    let mut warnings = Vec::new();
    let log_level = match config.general.log_level.as_deref() {
        None => DEFAULT_LOG_LEVEL,
        Some(level) => level.parse::<LevelFilter>().unwrap_or_else(|_| {
            warnings.push(format!(
                "Unknown log level '{}', using {}",
                level, DEFAULT_LOG_LEVEL
            ));
            DEFAULT_LOG_LEVEL
        }),
    };

    ResolvedConfig {
        storage,
        log_file,
        log_level,
        warnings,
    }
}
