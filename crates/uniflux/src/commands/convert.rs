//! `convert` handler: device dump in, points out.

use std::io::{self, Read};
use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use uniflux_core::{PointBuilder, Report, fill_site_name, parse_devices};

use crate::cli::{ConvertArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConvertArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;
    let format = config::output_format(global, &cfg)?;

    let site_name = args.site_name.as_deref().unwrap_or(&cfg.influx.site_name);
    if site_name.trim().is_empty() {
        return Err(CliError::Validation {
            field: "--site-name".into(),
            reason: "must not be empty".into(),
        });
    }

    let body = read_input(args.file.as_deref())?;
    let mut devices = parse_devices(&body)?;
    fill_site_name(&mut devices, site_name);

    let mut opts = cfg.influx.builder_options();
    opts.dead_ports |= args.dead_ports;
    let builder = PointBuilder::new(opts);
    let mut report = Report::new();
    let handled = builder.batch_devices(&devices, &mut report);
    info!(
        devices = devices.len(),
        handled,
        points = report.len(),
        "converted device dump"
    );
    for (table, count) in report.counts() {
        debug!(table = %table, count, "points per table");
    }

    let timestamp = args.timestamp.or_else(|| Utc::now().timestamp_nanos_opt());
    let out = output::render_points(format, &report, timestamp)?;
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Read the dump from a file, or stdin for `-` / no argument.
fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        None => read_stdin(),
        Some(path) if path.as_os_str() == "-" => read_stdin(),
        Some(path) => {
            debug!(path = %path.display(), "reading device dump");
            std::fs::read_to_string(path).map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    CliError::InputNotFound {
                        path: path.display().to_string(),
                    }
                } else {
                    CliError::Io(e)
                }
            })
        }
    }
}

fn read_stdin() -> Result<String, CliError> {
    debug!("reading device dump from stdin");
    let mut body = String::new();
    io::stdin().lock().read_to_string(&mut body)?;
    Ok(body)
}
