//! reqwest transport for webhook requests.

use url::{Host, Url};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// [`HttpClient`] backed by reqwest and built for a single notification.
///
/// - Redirects are never followed. A 3xx answer comes back as the response,
///   so the request goes out exactly once and the dispatcher reports it as
///   a failure.
/// - No connection is kept idle, so the socket closes once the response
///   body has been read.
/// - Loopback targets ignore proxy settings from the environment.
///
/// reqwest's default timeouts apply.
///
/// # Example
///
/// ```no_run
/// use webhook_notifier::webhook::{HttpClient, HttpRequest, ReqwestClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let url = url::Url::parse("https://api.example.com/webhook")?;
/// let client = ReqwestClient::for_target(url.as_str())?;
/// let request = HttpRequest::new(http::Method::PUT, url).with_body(b"hello".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Builds a client for requests to `target`.
    ///
    /// `target` only decides whether proxies apply; an unparseable value
    /// is left for the request builder to reject.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the TLS backend or resolver
    /// cannot be initialized.
    pub fn for_target(target: &str) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .pool_max_idle_per_host(0);

        if Url::parse(target).is_ok_and(|url| is_loopback(&url)) {
            builder = builder.no_proxy();
        }

        let inner = builder
            .build()
            .map_err(|e| HttpError::Connection(Box::new(e)))?;
        Ok(Self { inner })
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        Some(Host::Domain(name)) => name.eq_ignore_ascii_case("localhost"),
        None => false,
    }
}

fn transport_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        // e.g. a scheme other than http or https
        HttpError::Rejected(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = req;

        let mut builder = self.inner.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
