//! Resume editor entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use resume_cli::cli::Cli;
use resume_cli::commands;

fn main() {
    // Load .env.local if it exists (for RESUME_EDITOR_* overrides)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    let store = cli.store_config();
    let command = cli.command.unwrap_or_default();

    if let Err(e) = commands::execute(command, &store) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
