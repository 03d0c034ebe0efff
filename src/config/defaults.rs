//! Default values for configuration options.

/// Default trigger name reported for a manually fired notification.
pub const TRIGGER: &str = "success";

/// Default output path for the `init` subcommand.
pub const CONFIG_FILE: &str = "webhook-notifier.toml";
