//! Per-notification webhook settings.

use super::{DispatchError, RequestMethod};

/// Everything needed to fire one webhook request.
///
/// Built once per notification event and discarded afterwards. The URL and
/// content type are kept as the raw strings the user configured; they are
/// only interpreted when the request is built, so a bad value surfaces as a
/// failed dispatch rather than a construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    /// Target URL
    pub url: String,
    /// Value for both the `Accept` and `Content-Type` headers
    pub content_type: String,
    /// Request method
    pub method: RequestMethod,
    /// Message body, attached for POST and PUT only
    pub body: String,
}

impl WebhookConfig {
    /// Creates a config from already-typed values.
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        method: RequestMethod,
        content_type: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            content_type: content_type.into(),
            method,
            body: body.into(),
        }
    }

    /// Creates a config from raw strings, parsing the method.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidMethod`] if `method` is not exactly
    /// one of `GET`, `POST`, `PUT` or `DELETE`.
    pub fn parse(
        url: impl Into<String>,
        method: &str,
        content_type: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, DispatchError> {
        Ok(Self::new(url, method.parse()?, content_type, body))
    }
}
