//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::notification::NotificationProperties;
use crate::webhook::RequestMethod;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// All four plugin properties are present and the method is one of the
/// supported verbs. The URL and content type are passed through untouched:
/// whether they work is decided when the webhook is dispatched.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Plugin properties handed to the notification plugin
    pub properties: NotificationProperties,

    /// Trigger name recorded with the notification
    pub trigger: String,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = &self.properties;
        write!(
            f,
            "Config {{ url: {}, method: {}, content_type: {}, body: {} bytes, trigger: {} }}",
            props.webhook_url.as_deref().unwrap_or_default(),
            props.request_method.as_deref().unwrap_or_default(),
            props.content_type.as_deref().unwrap_or_default(),
            props.message_body.as_ref().map_or(0, String::len),
            self.trigger,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`url`, `method`, `content_type`, `body`)
    /// - The method is not GET, POST, PUT, or DELETE
    /// - Both `body` and `body_file` are set in the TOML file
    /// - The body file cannot be read
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let method = Self::resolve_method(cli, toml)?;
        let content_type = Self::resolve_content_type(cli, toml)?;
        let body = Self::resolve_body(cli, toml)?;

        // Priority: CLI explicit > TOML > default
        let trigger = cli
            .trigger
            .clone()
            .or_else(|| toml.and_then(|t| t.notification.trigger.clone()))
            .unwrap_or_else(|| defaults::TRIGGER.to_string());

        Ok(Self {
            properties: NotificationProperties::new(url, method, content_type, body),
            trigger,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.url
            .clone()
            .or_else(|| toml.and_then(|t| t.webhook.url.clone()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })
    }

    /// Resolves the method and checks it names a supported verb. The
    /// original spelling is kept, since the plugin parses it again.
    fn resolve_method(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let method = cli
            .method
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.method.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::METHOD,
                    "Use --method or set webhook.method in config file",
                )
            })?;

        method
            .parse::<RequestMethod>()
            .map_err(|_| ConfigError::InvalidMethod(method.to_string()))?;

        Ok(method.to_string())
    }

    fn resolve_content_type(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.content_type
            .clone()
            .or_else(|| toml.and_then(|t| t.webhook.content_type.clone()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::CONTENT_TYPE,
                    "Use --content-type or set webhook.content_type in config file",
                )
            })
    }

    fn resolve_body(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        // A CLI body source replaces the TOML one entirely; clap already
        // rejects --body together with --body-file.
        if let Some(ref body) = cli.body {
            return Ok(body.clone());
        }
        if let Some(ref path) = cli.body_file {
            return read_body_file(path);
        }

        let Some(webhook) = toml.map(|t| &t.webhook) else {
            return Err(Self::missing_body());
        };

        match (&webhook.body, &webhook.body_file) {
            (Some(_), Some(_)) => Err(ConfigError::ConflictingBody(
                "set either webhook.body or webhook.body_file, not both",
            )),
            (Some(body), None) => Ok(body.clone()),
            (None, Some(path)) => read_body_file(path),
            (None, None) => Err(Self::missing_body()),
        }
    }

    const fn missing_body() -> ConfigError {
        ConfigError::missing(
            field::BODY,
            "Use --body, --body-file, or set webhook.body in config file (an empty string is allowed)",
        )
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_body_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::BodyFileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
