//! Configuration for the uniflux CLI.
//!
//! A small TOML file with output defaults and point-building options,
//! layered under `UNIFLUX_*` environment variables. The CLI applies its own
//! flags on top of what this crate resolves.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use uniflux_core::BuilderOptions;

/// Output formats the CLI knows how to render.
pub const OUTPUT_FORMATS: [&str; 5] = ["line", "json", "json-compact", "yaml", "table"];

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Output defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Point-building options.
    #[serde(default)]
    pub influx: InfluxOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InfluxOptions {
    /// Emit switch ports that are down or disabled.
    #[serde(default)]
    pub dead_ports: bool,

    /// Site name for records that do not carry one.
    #[serde(default = "default_site_name")]
    pub site_name: String,
}

impl Default for InfluxOptions {
    fn default() -> Self {
        Self {
            dead_ports: false,
            site_name: default_site_name(),
        }
    }
}

impl InfluxOptions {
    /// Builder options as configured; CLI flags may widen them.
    pub fn builder_options(&self) -> BuilderOptions {
        BuilderOptions {
            dead_ports: self.dead_ports,
        }
    }
}

fn default_output() -> String {
    "line".into()
}
fn default_site_name() -> String {
    "default".into()
}

impl Config {
    /// Reject values the CLI cannot act on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !OUTPUT_FORMATS.contains(&self.defaults.output.as_str()) {
            return Err(ConfigError::Validation {
                field: "defaults.output".into(),
                reason: format!(
                    "expected one of {}, got '{}'",
                    OUTPUT_FORMATS.join(", "),
                    self.defaults.output
                ),
            });
        }
        if self.influx.site_name.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "influx.site_name".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "uniflux", "uniflux").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("uniflux");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load Config from a specific file + environment.
///
/// A missing file is not an error; defaults and environment still apply.
/// Environment keys nest on `__`, e.g. `UNIFLUX_INFLUX__SITE_NAME`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("UNIFLUX_").split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`, creating parents.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
