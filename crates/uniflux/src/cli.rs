//! Clap derive structures for the `uniflux` CLI.
//!
//! Defines the command tree, global flags, and shared types. The same tree
//! drives `completions` and `man`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// uniflux -- turn UniFi device telemetry into InfluxDB points
#[derive(Debug, Parser)]
#[command(
    name = "uniflux",
    version,
    about = "Convert UniFi device telemetry into InfluxDB points",
    long_about = "Reads a controller stat/device dump and emits one point per device role\n\
        (gateway, switch, access point) plus per-port, per-network, per-radio\n\
        and per-SSID detail points, as line protocol or structured output.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format [default: from config, else line]
    #[arg(long, short = 'o', global = true)]
    pub output: Option<OutputFormat>,

    /// Config file to use instead of the platform default
    #[arg(long, env = "UNIFLUX_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// InfluxDB line protocol, one point per line
    Line,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Point counts per table
    Table,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a stat/device dump into points
    #[command(alias = "c")]
    Convert(ConvertArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print a roff man page to stdout
    Man(ManArgs),
}

// ── Convert ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Device dump to read (JSON); `-` or omitted reads stdin
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Site name for records that do not carry one
    #[arg(long, value_name = "NAME")]
    pub site_name: Option<String>,

    /// Include switch ports that are down or disabled
    #[arg(long)]
    pub dead_ports: bool,

    /// Line-protocol timestamp in nanoseconds [default: now]
    #[arg(long, value_name = "NS")]
    pub timestamp: Option<i64>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display the resolved configuration (file + environment)
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

// ── Man ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ManArgs {
    /// Subcommand to document (e.g. `convert`); omitted documents `uniflux`
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,
}
