//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.eat-n-split/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::friend::{Friend, FriendId, seed_friends};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SplitConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub friends: Vec<FriendEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub currency: Option<String>,
    pub avatar_url: Option<String>,
    pub seed_friends: Option<bool>,
    pub log_level: Option<String>,
}

/// A starting friend declared in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FriendEntry {
    pub name: String,
    pub image: Option<String>,
    #[serde(default)]
    pub balance: f64,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CURRENCY: &str = "$";
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub currency: String,
    pub avatar_url: String,
    pub log_level: LevelFilter,
    pub friends: Vec<Friend>,
}

/// Overrides coming from command-line flags.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub currency: Option<String>,
    pub empty: bool,
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

/// Returns the path to `~/.eat-n-split/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".eat-n-split").join("config.toml"))
}

/// Load config from `path`, or from the default location when `None`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `SplitConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<SplitConfig, ConfigError> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match config_path() {
            Some(p) => (p, false),
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(SplitConfig::default());
            }
        },
    };

    if !path.exists() {
        if explicit {
            warn!("Config file {} not found, using defaults", path.display());
        } else {
            info!("No config file found, generating default at {}", path.display());
            generate_default_config(&path);
        }
        return Ok(SplitConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Like [`load_config`], but an unreadable or malformed file is logged and
/// replaced by `SplitConfig::default()`.
pub fn load_or_default(path: Option<&Path>) -> SplitConfig {
    load_config(path).unwrap_or_else(|e| {
        warn!("{e}, using defaults");
        SplitConfig::default()
    })
}

pub fn parse_config(contents: &str) -> Result<SplitConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Eat-'n-Split Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# currency = "$"                          # Or set EAT_N_SPLIT_CURRENCY
# avatar_url = "https://i.pravatar.cc/48" # Or set EAT_N_SPLIT_AVATAR_URL
# seed_friends = true                     # Start with Clark, Sarah and Anthony
# log_level = "debug"                     # "off", "error", "warn", "info", "debug", "trace"

# Declaring friends replaces the built-in seed list.
# [[friends]]
# name = "Clark"
# image = "https://i.pravatar.cc/48?u=118836"
# balance = -7
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SplitConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Currency: CLI → env → config → default
    let currency = cli
        .currency
        .clone()
        .or_else(|| std::env::var("EAT_N_SPLIT_CURRENCY").ok())
        .or_else(|| config.general.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    // Avatar placeholder: env → config → default
    let avatar_url = std::env::var("EAT_N_SPLIT_AVATAR_URL")
        .ok()
        .or_else(|| config.general.avatar_url.clone())
        .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string());

    let log_level = config
        .general
        .log_level
        .as_deref()
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log level {level:?}, using default");
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        currency,
        log_level,
        friends: resolve_friends(config, cli, &avatar_url),
        avatar_url,
    }
}

/// Starting friends: `--empty` wins, then `[[friends]]`, then the seed list.
fn resolve_friends(config: &SplitConfig, cli: &CliOverrides, avatar_url: &str) -> Vec<Friend> {
    if cli.empty {
        return Vec::new();
    }

    if !config.friends.is_empty() {
        return config
            .friends
            .iter()
            .filter(|entry| !entry.name.trim().is_empty())
            .map(|entry| {
                let id = FriendId::generate();
                let image = entry
                    .image
                    .clone()
                    .unwrap_or_else(|| format!("{avatar_url}?u={id}"));
                Friend {
                    id,
                    name: entry.name.clone(),
                    image,
                    balance: entry.balance,
                }
            })
            .collect();
    }

    if config.general.seed_friends.unwrap_or(true) {
        seed_friends()
    } else {
        Vec::new()
    }
}
