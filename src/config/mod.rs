//! Configuration layer for the webhook-notifier binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults** (only `trigger` has one)
//!
//! The message body may come from `body` or `body_file`. A body source given
//! on the command line replaces the TOML body source, whichever form either
//! one uses.
//!
//! The library itself reads no configuration: the host hands
//! [`NotificationProperties`](crate::notification::NotificationProperties)
//! straight to the plugin.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use self::toml::{TomlConfig, default_config_template};
pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use validated::{ValidatedConfig, write_default_config};
