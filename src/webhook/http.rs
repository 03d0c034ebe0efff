//! Transport seam between the dispatcher and the network.

use super::HttpError;

/// Sends a prepared request and hands back whatever the server answered.
///
/// The dispatcher only ever talks to this trait, so tests can substitute a
/// recording client and production uses [`ReqwestClient`](super::ReqwestClient).
pub trait HttpClient: Send + Sync {
    /// Performs one request without following redirects or retrying.
    ///
    /// A response of any status is `Ok`; judging it is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if no response was received.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}

/// Outgoing webhook request, already validated.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Verb to send
    pub method: http::Method,
    /// Absolute target
    pub url: url::Url,
    /// Header values, one per name
    pub headers: http::HeaderMap,
    /// Payload; `None` means no body at all, `Some(vec![])` an empty one
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Starts a request with no headers and no body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Attaches a payload. An empty payload still counts as a body.
    #[must_use]
    pub fn with_body(self, body: Vec<u8>) -> Self {
        Self {
            body: Some(body),
            ..self
        }
    }

    /// Sets `name` to `value`, dropping any earlier value for that name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Status and buffered body of a webhook response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status line code
    pub status: http::StatusCode,
    /// Entire body as received
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Whether the status is in `200..300`. Redirects count as failures.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as text, or `None` when it is not UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}
