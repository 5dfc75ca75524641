//! Tracing subscriber setup.
//!
//! Subcommands log to stderr. The TUI owns the terminal, so it only logs
//! when `TAROT_MYSTIC_LOG` names a file to write to.

use std::fs::File;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the TUI log file path.
pub const LOG_FILE_ENV: &str = "TAROT_MYSTIC_LOG";

/// Default filter for a `-v` count. `RUST_LOG` overrides it.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Log to stderr for non-interactive commands.
pub fn init_stderr(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .init();
}

/// Log to the file named by [`LOG_FILE_ENV`], or not at all.
pub fn init_tui(verbosity: u8) {
    let Ok(path) = std::env::var(LOG_FILE_ENV) else {
        return;
    };

    let Ok(file) = File::create(&path) else {
        eprintln!("Warning: failed to create log file: {}", path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(verbosity.max(1)))
        .with(file_layer)
        .init();
}
