//! Single-shot webhook dispatch.

use http::header::{ACCEPT, CONTENT_TYPE};
use http::HeaderValue;
use url::Url;

use super::{DispatchError, HttpClient, HttpRequest, HttpResponse, WebhookConfig};

/// Sends exactly one HTTP request per notification and reports the outcome.
///
/// There is no retry: each call to [`dispatch`](Self::dispatch) makes a
/// single attempt and reduces the result to a boolean.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
///
/// # Example
///
/// ```no_run
/// use webhook_notifier::webhook::{RequestMethod, ReqwestClient, WebhookConfig, WebhookDispatcher};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WebhookConfig::new(
///     "https://api.example.com/hooks/job",
///     RequestMethod::Post,
///     "application/json",
///     r#"{"status": "succeeded"}"#,
/// );
/// let dispatcher = WebhookDispatcher::new(ReqwestClient::for_target(&config.url)?);
/// let delivered = dispatcher.dispatch(&config).await;
/// # let _ = delivered;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WebhookDispatcher<H> {
    client: H,
}

impl<H> WebhookDispatcher<H> {
    /// Creates a dispatcher that sends through the given client.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }
}

/// Builds the HTTP request described by `config`.
///
/// `Accept` and `Content-Type` both carry the configured content type
/// unchanged. The body is attached for POST and PUT only, even when empty.
///
/// # Errors
///
/// Returns a configuration error if the URL is not absolute or the
/// content type holds bytes that cannot appear in a header value.
pub fn build_request(config: &WebhookConfig) -> Result<HttpRequest, DispatchError> {
    let url = Url::parse(&config.url).map_err(|e| DispatchError::InvalidUrl {
        url: config.url.clone(),
        reason: e.to_string(),
    })?;

    let content_type =
        HeaderValue::from_str(&config.content_type).map_err(|e| DispatchError::InvalidHeaderValue {
            value: config.content_type.clone(),
            reason: e.to_string(),
        })?;

    let mut request = HttpRequest::new(config.method.to_http(), url)
        .with_header(ACCEPT, content_type.clone())
        .with_header(CONTENT_TYPE, content_type);

    if config.method.attaches_body() {
        request = request.with_body(config.body.clone().into_bytes());
    }

    Ok(request)
}

impl<H: HttpClient> WebhookDispatcher<H> {
    /// Sends the webhook and returns the successful response.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the request cannot be built, the
    /// transport fails, or the status is outside `200..300`.
    pub async fn try_dispatch(&self, config: &WebhookConfig) -> Result<HttpResponse, DispatchError> {
        let request = build_request(config)?;

        tracing::debug!(
            method = %config.method,
            url = %request.url,
            content_type = %config.content_type,
            body_len = request.body.as_ref().map_or(0, Vec::len),
            "Sending webhook request"
        );

        let response = self.client.request(request).await?;

        if response.is_success() {
            return Ok(response);
        }

        Err(DispatchError::UnexpectedStatus {
            status: response.status,
            body: response.body_text().map(ToString::to_string),
        })
    }

    /// Sends the webhook, returning `true` only for a 2xx response.
    ///
    /// Every failure is logged and collapsed to `false`; no error escapes.
    pub async fn dispatch(&self, config: &WebhookConfig) -> bool {
        match self.try_dispatch(config).await {
            Ok(response) => {
                tracing::info!(status = %response.status, url = %config.url, "Webhook delivered");
                if let Some(text) = response.body_text().filter(|t| !t.is_empty()) {
                    tracing::debug!("Response body: {text}");
                }
                true
            }
            Err(e) => {
                tracing::warn!(kind = %e.kind(), url = %config.url, "Webhook failed: {e}");
                if let DispatchError::UnexpectedStatus {
                    body: Some(body), ..
                } = &e
                {
                    tracing::debug!("Response body: {body}");
                }
                false
            }
        }
    }
}
