//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.toggles/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Demo;
use crate::core::data::{DEFAULT_COMPANY_COUNT, DEFAULT_PRODUCT_COUNT, DataConfig};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TogglesConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub companies: CompaniesSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub demo: Option<Demo>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DataSection {
    pub products: Option<usize>,
    pub companies: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CompaniesSection {
    pub default_visibility: Option<bool>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub demo: Demo,
    pub data: DataConfig,
    /// Whether a company's "About" line shows before it is hovered.
    pub default_visibility: bool,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub demo: Option<Demo>,
    pub seed: Option<u64>,
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

/// Returns the path to `~/.toggles/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".toggles").join("config.toml"))
}

/// Load config from `~/.toggles/config.toml`.
pub fn load_config() -> Result<TogglesConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(TogglesConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TogglesConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<TogglesConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TogglesConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TogglesConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Toggles Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# demo = "render-props"              # "render-props" or "hoc"; or TOGGLES_DEMO

# [data]
# products = 20
# companies = 15
# seed = 42                          # Fixed seed for repeatable data; or TOGGLES_SEED

# [companies]
# default_visibility = false         # Show "About" before hovering
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TogglesConfig, cli: CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env` so tests stay hermetic.
pub fn resolve_with_env(
    config: &TogglesConfig,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Demo: CLI → env → config → default
    let demo = cli
        .demo
        .or_else(|| env_demo(&env))
        .or(config.general.demo)
        .unwrap_or_default();

    // Seed: CLI → env → config → none
    let seed = cli
        .seed
        .or_else(|| env_seed(&env))
        .or(config.data.seed);

    ResolvedConfig {
        demo,
        data: DataConfig {
            product_count: config.data.products.unwrap_or(DEFAULT_PRODUCT_COUNT),
            company_count: config.data.companies.unwrap_or(DEFAULT_COMPANY_COUNT),
            seed,
        },
        default_visibility: config.companies.default_visibility.unwrap_or(false),
    }
}

fn env_demo(env: &impl Fn(&str) -> Option<String>) -> Option<Demo> {
    let raw = env("TOGGLES_DEMO")?;
    match Demo::from_str(&raw, true) {
        Ok(demo) => Some(demo),
        Err(e) => {
            warn!("Ignoring TOGGLES_DEMO={raw:?}: {e}");
            None
        }
    }
}

fn env_seed(env: &impl Fn(&str) -> Option<String>) -> Option<u64> {
    let raw = env("TOGGLES_SEED")?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            warn!("Ignoring TOGGLES_SEED={raw:?}: {e}");
            None
        }
    }
}
