//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook request section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Notification event section
    #[serde(default)]
    pub notification: NotificationSection,
}

/// Webhook request section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook URL
    pub url: Option<String>,

    /// HTTP method: GET, POST, PUT, or DELETE
    pub method: Option<String>,

    /// Value for the Accept and Content-Type headers
    pub content_type: Option<String>,

    /// Inline message body
    pub body: Option<String>,

    /// Path to a file holding the message body
    pub body_file: Option<PathBuf>,
}

/// Notification event section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationSection {
    /// Trigger name recorded with the notification
    pub trigger: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Webhook Notifier Configuration File

[webhook]
# Webhook URL (required)
# url = "https://api.example.com/hooks/job"

# HTTP method (required): GET, POST, PUT, or DELETE
# The body is only sent with POST and PUT.
# method = "POST"

# Sent as both the Accept and Content-Type headers (required)
# content_type = "application/json"

# Message body (required, may be empty). Use either body or body_file.
# body = '{"status": "succeeded"}'
# body_file = "payload.json"

[notification]
# Trigger name recorded with the notification (default: "success")
# trigger = "success"
"#
    .to_string()
}
