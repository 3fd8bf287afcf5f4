//! Application startup and utilities.
//!
//! Exit codes, tracing setup, and error hints for the main entry point.

use discord_webhook::cli::CliError;
use discord_webhook::webhook::ErrorKind;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - missing URL, bad color, empty message.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Send error (exit code 2) - network failure, rejected message, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn send_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &CliError) {
    match error {
        CliError::Webhook(e) if e.kind() == ErrorKind::MissingWebhookUrl => {
            eprintln!("\nPass --url or export the webhook URL in the variable named by --env.");
        }
        CliError::InvalidColor { .. } => {
            eprintln!("\nColors are six hex digits, e.g. --color '#2ECC71'.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
