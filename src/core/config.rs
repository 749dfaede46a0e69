//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.storefront/config.toml`. If missing on first run, a
//! commented-out default is generated so operators can discover all options.
//!
//! Loading and resolution run before the file logger exists, so anything
//! worth logging is collected as a [`Diagnostic`] and emitted once it does.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::state::{DEFAULT_SALE_ITEM, Mode, SaleState};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    pub title: Option<String>,
    pub sale_item: Option<String>,
    pub start_mode: Option<Mode>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub title: Option<String>,
    pub sale_item: Option<String>,
    pub mode: Option<Mode>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "My Hardware Store";
pub const DEFAULT_LOG_FILE: &str = "storefront.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub sale_item: String,
    pub start_mode: Mode,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Messages from loading and resolution, oldest first
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolvedConfig {
    /// Initial state for the store.
    pub fn initial_state(&self) -> SaleState {
        SaleState::new(self.sale_item.clone(), self.start_mode)
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// A log line held back until the logger is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

impl Diagnostic {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn emit(&self) {
        log::log!(self.level, "{}", self.message);
    }
}

/// A parsed config file plus what happened while finding it.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: StorefrontConfig,
    pub diagnostics: Vec<Diagnostic>,
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

/// Returns the path to `~/.storefront/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".storefront").join("config.toml"))
}

/// Load config from `~/.storefront/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StorefrontConfig::default()`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => {
            if !path.exists() {
                let mut diagnostics = vec![Diagnostic::new(
                    Level::Info,
                    format!("No config file found, generating default at {}", path.display()),
                )];
                diagnostics.extend(generate_default_config(&path));
                return Ok(LoadedConfig {
                    config: StorefrontConfig::default(),
                    diagnostics,
                });
            }
            load_config_from(&path)
        }
        None => Ok(LoadedConfig {
            config: StorefrontConfig::default(),
            diagnostics: vec![Diagnostic::new(
                Level::Warn,
                "Could not determine home directory, using default config",
            )],
        }),
    }
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    let diagnostics = vec![
        Diagnostic::new(Level::Info, format!("Loaded config from {}", path.display())),
        Diagnostic::new(Level::Debug, format!("Config: {config:?}")),
    ];
    Ok(LoadedConfig {
        config,
        diagnostics,
    })
}

pub fn parse_config(contents: &str) -> Result<StorefrontConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Storefront Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [store]
# title = "My Hardware Store"          # Or set STOREFRONT_TITLE
# sale_item = "A Hammer"               # Or set STOREFRONT_SALE_ITEM
# start_mode = "editing"               # "editing" or "viewing" (STOREFRONT_MODE)

# [logging]
# level = "debug"                      # "off", "error", "warn", "info", "debug", "trace"
# file = "storefront.log"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> Option<Diagnostic> {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        return Some(Diagnostic::new(
            Level::Warn,
            format!("Failed to create config directory: {e}"),
        ));
    }
    fs::write(path, DEFAULT_CONFIG_CONTENT)
        .err()
        .map(|e| Diagnostic::new(Level::Warn, format!("Failed to write default config: {e}")))
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the outcome of loading. A file that failed to load counts as empty,
/// and the failure is kept as the first diagnostic.
pub fn resolve_loaded(
    loaded: Result<LoadedConfig, ConfigError>,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let (config, mut diagnostics) = match loaded {
        Ok(LoadedConfig {
            config,
            diagnostics,
        }) => (config, diagnostics),
        Err(e) => (
            StorefrontConfig::default(),
            vec![Diagnostic::new(Level::Warn, format!("{e}; using defaults"))],
        ),
    };
    let mut resolved = resolve_with(&config, cli, env);
    diagnostics.append(&mut resolved.diagnostics);
    resolved.diagnostics = diagnostics;
    resolved
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
/// Environment lookups are supplied by `env`.
pub fn resolve_with(
    config: &StorefrontConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut diagnostics = Vec::new();

    let title = cli
        .title
        .clone()
        .or_else(|| env("STOREFRONT_TITLE"))
        .or_else(|| config.store.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // Sale item is taken verbatim, an empty name is a valid name
    let sale_item = cli
        .sale_item
        .clone()
        .or_else(|| env("STOREFRONT_SALE_ITEM"))
        .or_else(|| config.store.sale_item.clone())
        .unwrap_or_else(|| DEFAULT_SALE_ITEM.to_string());

    let start_mode = cli
        .mode
        .or_else(|| env("STOREFRONT_MODE").and_then(|s| parse_mode(&s, &mut diagnostics)))
        .or(config.store.start_mode)
        .unwrap_or_default();

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("STOREFRONT_LOG_LEVEL"))
        .or_else(|| config.logging.level.clone())
        .map(|s| parse_level(&s, &mut diagnostics))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        title,
        sale_item,
        start_mode,
        log_level,
        log_file,
        diagnostics,
    }
}

fn parse_mode(value: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<Mode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "editing" => Some(Mode::Editing),
        "viewing" => Some(Mode::Viewing),
        other => {
            diagnostics.push(Diagnostic::new(
                Level::Warn,
                format!("Ignoring unknown mode {other:?}"),
            ));
            None
        }
    }
}

fn parse_level(value: &str, diagnostics: &mut Vec<Diagnostic>) -> LevelFilter {
    LevelFilter::from_str(value.trim()).unwrap_or_else(|_| {
        diagnostics.push(Diagnostic::new(
            Level::Warn,
            format!("Unknown log level {value:?}, using {DEFAULT_LOG_LEVEL}"),
        ));
        DEFAULT_LOG_LEVEL
    })
}
