//! PyQt5 Fixer CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pyqt_fixer::cli::{Cli, CommandDispatcher};
use pyqt_fixer::config::load_config;
use pyqt_fixer::runlog::{default_log_dir, Reporter, RunLog};
use pyqt_fixer::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for diagnostics on stderr.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pyqt_fixer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pyqt_fixer=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pyqt-fixer starting with args: {:?}", cli);

    let mut ui = TerminalUI::new(cli.no_color);

    let config = match load_config(cli.config.as_deref(), &cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return exit_code(e.exit_code());
        }
    };

    let log_dir = match &config.log_dir {
        Some(dir) => dir.clone(),
        None => match default_log_dir() {
            Ok(dir) => dir,
            Err(e) => {
                ui.error(&format!("Error: {}", e));
                return exit_code(e.exit_code());
            }
        },
    };

    let mut log = match RunLog::create(&log_dir) {
        Ok(log) => log,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return exit_code(e.exit_code());
        }
    };
    let log_path = log.path().display().to_string();

    let code = {
        let mut reporter = Reporter::new(&mut ui, &mut log);
        reporter.info(&format!("Log file created: {}", log_path));

        let dispatcher = CommandDispatcher::new(config);
        match dispatcher.dispatch(cli.action(), &mut reporter) {
            Ok(result) => result.exit_code,
            Err(e) => {
                reporter.error(&format!("Error: {}", e));
                e.exit_code()
            }
        }
    };

    if let Err(e) = log.finish() {
        tracing::warn!("Failed to flush run log: {}", e);
    }

    exit_code(code)
}
