//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use uniflux_config::ConfigError;
use uniflux_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    /// Input data was malformed (sysexits `EX_DATAERR`).
    pub const DATA: i32 = 65;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────
    #[error("Input file not found: {path}")]
    #[diagnostic(
        code(uniflux::input_not_found),
        help("Pass a path to a stat/device dump, or `-` to read stdin.")
    )]
    InputNotFound { path: String },

    #[error("Invalid device data: {message}")]
    #[diagnostic(
        code(uniflux::invalid_input),
        help(
            "Expected a stat/device response: a {{meta, data}} envelope,\n\
             a bare array of devices, or a single device object."
        )
    )]
    InvalidInput { message: String },

    #[error("The dump contains a controller error: {message}")]
    #[diagnostic(
        code(uniflux::controller_error),
        help("The controller rejected the request that produced this dump. Re-export it.")
    )]
    ControllerError { message: String },

    // ── Output ───────────────────────────────────────────────────────
    #[error("Failed to encode points: {message}")]
    #[diagnostic(code(uniflux::encode))]
    Encode { message: String },

    #[error("Invalid JSON output: {0}")]
    #[diagnostic(code(uniflux::json))]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML output: {0}")]
    #[diagnostic(code(uniflux::yaml))]
    Yaml(#[from] serde_yaml::Error),

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(uniflux::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(uniflux::config),
        help("Check the config file, or regenerate it with: uniflux config init --force")
    )]
    Config(Box<figment::Error>),

    #[error("Config file already exists at {path}")]
    #[diagnostic(
        code(uniflux::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error("Failed to write config: {message}")]
    #[diagnostic(code(uniflux::config_write))]
    ConfigWrite { message: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => exit_code::NOT_FOUND,
            Self::InvalidInput { .. } | Self::ControllerError { .. } => exit_code::DATA,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput { message } => CliError::InvalidInput { message },
            CoreError::Controller { message } => CliError::ControllerError { message },
            CoreError::Encode(e) => CliError::Encode {
                message: e.to_string(),
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Serialization(e) => CliError::ConfigWrite {
                message: e.to_string(),
            },
            ConfigError::Io(e) => CliError::Io(e),
        }
    }
}
