mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose, cli.global.quiet);

    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbosity: u8, quiet: bool) {
    let filter = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert(args) => commands::convert::handle(args, &cli.global),

        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "uniflux", &mut std::io::stdout());
            Ok(())
        }

        Command::Man(args) => render_man(args.command.as_deref()),
    }
}

/// Render `uniflux.1`, or `uniflux-<sub>.1` for a visible subcommand.
fn render_man(sub: Option<&str>) -> Result<(), CliError> {
    use clap::CommandFactory;

    let root = Cli::command();
    let page = match sub {
        None => root,
        Some(name) => {
            let found = root
                .get_subcommands()
                .find(|cmd| !cmd.is_hide_set() && cmd.get_name() == name)
                .cloned()
                .ok_or_else(|| CliError::Validation {
                    field: "COMMAND".into(),
                    reason: format!("no subcommand named '{name}'"),
                })?;
            found.name(format!("uniflux-{name}"))
        }
    };

    clap_mangen::Man::new(page).render(&mut std::io::stdout().lock())?;
    Ok(())
}
