//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Render config as TOML for the human-readable formats.
fn format_config_toml(cfg: &Config) -> Result<String, CliError> {
    toml::to_string_pretty(cfg).map_err(|e| CliError::ConfigWrite {
        message: e.to_string(),
    })
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            let path = config::config_path(global);
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let format = config::output_format(global, &cfg)?;
            let out = output::render_single(format, &cfg, format_config_toml)?;
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        // ── Init ────────────────────────────────────────────────────
        ConfigCommand::Init { force } => {
            let path = config::config_path(global);
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }
            uniflux_config::save_config_to(&Config::default(), &path)?;
            tracing::info!(path = %path.display(), "wrote default config");
            output::print_output(&format!("Wrote {}", path.display()), global.quiet);
            Ok(())
        }
    }
}
