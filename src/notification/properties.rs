//! Raw plugin properties as supplied by the host.

use serde::{Deserialize, Serialize};

use crate::webhook::{DispatchError, WebhookConfig};

/// Host-facing property names.
pub mod property {
    /// The webhook URL property.
    pub const WEBHOOK_URL: &str = "webhookUrl";
    /// The content type property.
    pub const CONTENT_TYPE: &str = "contentType";
    /// The request method property.
    pub const REQUEST_METHOD: &str = "requestMethod";
    /// The message body property.
    pub const MESSAGE_BODY: &str = "messageBody";
}

/// The four configurable properties of the custom webhook plugin.
///
/// The host may leave any of them unset, so every field is optional here.
/// They are checked only when a notification fires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationProperties {
    /// Target URL
    pub webhook_url: Option<String>,
    /// Value for `Accept` and `Content-Type`
    pub content_type: Option<String>,
    /// One of `GET`, `POST`, `PUT`, `DELETE`
    pub request_method: Option<String>,
    /// Payload for POST and PUT
    pub message_body: Option<String>,
}

impl NotificationProperties {
    /// Creates a fully populated property set.
    #[must_use]
    pub fn new(
        webhook_url: impl Into<String>,
        request_method: impl Into<String>,
        content_type: impl Into<String>,
        message_body: impl Into<String>,
    ) -> Self {
        Self {
            webhook_url: Some(webhook_url.into()),
            content_type: Some(content_type.into()),
            request_method: Some(request_method.into()),
            message_body: Some(message_body.into()),
        }
    }

    /// Converts the raw properties into a dispatchable config.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidMethod`] if the method is absent or
    /// unrecognized, or [`DispatchError::MissingProperty`] if any other
    /// property is absent.
    pub fn to_webhook_config(&self) -> Result<WebhookConfig, DispatchError> {
        let method = self.request_method.as_deref().unwrap_or_default();

        WebhookConfig::parse(
            required(self.webhook_url.as_ref(), property::WEBHOOK_URL)?,
            method,
            required(self.content_type.as_ref(), property::CONTENT_TYPE)?,
            required(self.message_body.as_ref(), property::MESSAGE_BODY)?,
        )
    }
}

fn required(value: Option<&String>, name: &'static str) -> Result<String, DispatchError> {
    value.cloned().ok_or(DispatchError::MissingProperty(name))
}
