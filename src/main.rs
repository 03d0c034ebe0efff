//! Webhook Notifier
//!
//! Entry point for the webhook-notifier binary. It plays the host's part:
//! builds the plugin from configuration and fires a single notification.

use webhook_notifier::config::{Cli, Command, ValidatedConfig, write_default_config};
use webhook_notifier::notification::{CustomWebhookPlugin, NotificationData, NotificationPlugin};
use std::process::ExitCode;

mod app;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    run_notification(config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Fires one notification and maps the outcome to an exit code.
#[cfg(not(tarpaulin_include))]
fn run_notification(config: ValidatedConfig) -> ExitCode {
    let plugin = CustomWebhookPlugin::new(config.properties);
    let data = NotificationData::new();

    if plugin.post_notification(&config.trigger, &data, &data) {
        exit_code::SUCCESS
    } else {
        exit_code::notification_failed()
    }
}
