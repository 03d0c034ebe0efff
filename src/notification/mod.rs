//! Host plugin layer.
//!
//! This module provides:
//! - The host contract ([`NotificationPlugin`])
//! - Raw plugin properties ([`NotificationProperties`])
//! - The custom webhook plugin ([`CustomWebhookPlugin`])

mod plugin;
mod properties;


pub use plugin::{CustomWebhookPlugin, NotificationData, NotificationPlugin};
pub use properties::{NotificationProperties, property};
