// Application entry point for the SMART report viewer

// Import the GUI module containing the main application state
mod gui;

use clap::Parser;
use smart_report_viewer::collector::{check_stderr, require_devices};
use smart_report_viewer::{ReportError, parse_report};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Disk health viewer for captured smartctl output
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Captured stdout of the collection script
    #[arg(long, env = "SMART_REPORT")]
    report: Option<PathBuf>,

    /// Captured stderr of the collection script, vetted before parsing
    #[arg(long, env = "SMART_REPORT_STDERR")]
    stderr: Option<PathBuf>,

    /// Print parsed records as JSON and exit instead of opening a window
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so --json output stays clean
    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

/// Reads the captured report and, if given, vets the captured stderr first.
fn load_report(args: &Args) -> Result<Option<String>, ReportError> {
    if let Some(path) = &args.stderr {
        check_stderr(&std::fs::read_to_string(path)?)?;
    }
    match &args.report {
        Some(path) => {
            info!(path = %path.display(), "loading report");
            Ok(Some(std::fs::read_to_string(path)?))
        }
        None => Ok(None),
    }
}

/// Headless mode: parse and print records as JSON.
fn print_json(report: &str) -> Result<(), ReportError> {
    let records = require_devices(parse_report(report))?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

/// Entry point for the application.
/// Either prints JSON or launches the eframe window with fixed dimensions.
fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    let loaded = load_report(&args);

    if args.json {
        let result = loaded.and_then(|report| {
            let report = report.unwrap_or_default();
            print_json(&report)
        });
        return match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let (report, load_error) = match loaded {
        Ok(report) => (report, None),
        Err(e) => {
            warn!("{e}");
            (None, Some(e.to_string()))
        }
    };

    // Configure window options with fixed size of 1200x675 pixels
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 675.0])
            .with_resizable(false),
        ..Default::default()
    };

    let result = eframe::run_native(
        "SMART Report Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(gui::AppState::new(cc, report, load_error)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("failed to start viewer: {e}");
            ExitCode::FAILURE
        }
    }
}
