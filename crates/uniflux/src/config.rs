//! `GlobalOpts`-aware wrappers around `uniflux-config`.

use std::path::PathBuf;

use clap::ValueEnum;

pub use uniflux_config::Config;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Config file in effect: `--config` / `UNIFLUX_CONFIG`, else the platform path.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(uniflux_config::config_path)
}

/// Load the config file in effect, layered with `UNIFLUX_*` env vars.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let path = config_path(global);
    tracing::debug!(path = %path.display(), "loading config");
    Ok(uniflux_config::load_config_from(&path)?)
}

/// `--output` if given, else `defaults.output` from config.
pub fn output_format(global: &GlobalOpts, cfg: &Config) -> Result<OutputFormat, CliError> {
    if let Some(format) = global.output {
        return Ok(format);
    }
    OutputFormat::from_str(&cfg.defaults.output, true).map_err(|reason| CliError::Validation {
        field: "defaults.output".into(),
        reason,
    })
}
