//! toolpick CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use toolpick::cli::{Cli, CommandDispatcher};
use toolpick::shell::is_ci;
use toolpick::ui::{create_ui, OutputMode};
use toolpick::ToolpickError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("toolpick=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolpick=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("toolpick starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
        console::set_colors_enabled(false);
    }

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot determine working directory: {}", e);
            return ExitCode::from(1);
        }
    };

    let mut ui = create_ui(!is_ci(), output_mode);
    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e @ ToolpickError::ConfigNotFound { .. }) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(2)
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
