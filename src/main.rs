//! discord-webhook
//!
//! Entry point for the discord-webhook command.

use discord_webhook::cli::Cli;
use discord_webhook::webhook::{ReqwestClient, WebhookClient};
use discord_webhook::{Message, WebhookError};
use std::process::ExitCode;

mod app;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let prepared = cli
        .to_message()
        .and_then(|message| Ok((cli.webhook_client(ReqwestClient::new())?, message)));

    let (webhook, message) = match prepared {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    run_application(&webhook, &message, cli.wait)
}

/// Sends the message and reports the outcome.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(
    webhook: &WebhookClient<ReqwestClient>,
    message: &Message,
    wait: bool,
) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::send_error();
        }
    };

    match runtime.block_on(webhook.send(message, wait)) {
        Ok(Some(posted)) => {
            let id = posted.id.as_deref().unwrap_or("unknown");
            tracing::info!("Message posted (id {id})");
            exit_code::SUCCESS
        }
        Ok(None) => {
            tracing::info!("Message posted");
            exit_code::SUCCESS
        }
        Err(e) => {
            report_send_error(&e);
            exit_code::send_error()
        }
    }
}

fn report_send_error(error: &WebhookError) {
    match error.api_error() {
        Some(api_error) => {
            tracing::error!(
                code = api_error.code,
                "Webhook rejected message: {}",
                api_error.message
            );
        }
        None => tracing::error!("Webhook failed: {error}"),
    }
}
