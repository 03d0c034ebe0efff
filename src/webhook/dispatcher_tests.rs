//! Tests for `WebhookDispatcher` and request building.

use super::{
    DispatchError, ErrorKind, HttpClient, HttpError, HttpRequest, HttpResponse, RequestMethod,
    WebhookConfig, WebhookDispatcher, build_request,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock HTTP client that returns one configured outcome and records requests.
#[derive(Debug)]
struct MockClient {
    outcome: Mutex<Option<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(outcome: Result<HttpResponse, HttpError>) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn with_status(code: u16) -> Self {
        Self::new(Ok(HttpResponse::new(
            http::StatusCode::from_u16(code).unwrap(),
            b"{\"id\": 101}".to_vec(),
        )))
    }

    fn success() -> Self {
        Self::with_status(200)
    }

    fn failing(error: HttpError) -> Self {
        Self::new(Err(error))
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn only_request(&self) -> HttpRequest {
        let requests = self.captured_requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.outcome
            .lock()
            .unwrap()
            .take()
            .expect("mock client called more than once")
    }
}

// Lets a test keep a handle on the mock after the dispatcher takes it.
impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.as_ref().request(req).await
    }
}

fn config(method: RequestMethod, body: &str) -> WebhookConfig {
    WebhookConfig::new(
        "https://example.com/webhook",
        method,
        "application/json",
        body,
    )
}

mod request_building {
    use super::*;

    #[test]
    fn sets_accept_and_content_type_to_configured_value() {
        for method in RequestMethod::ALL {
            let request = build_request(&config(method, "")).unwrap();

            assert_eq!(request.method, method.to_http());
            assert_eq!(
                request.headers.get(http::header::ACCEPT).unwrap(),
                "application/json"
            );
            assert_eq!(
                request.headers.get(http::header::CONTENT_TYPE).unwrap(),
                "application/json"
            );
        }
    }

    #[test]
    fn get_and_delete_never_carry_body() {
        for method in [RequestMethod::Get, RequestMethod::Delete] {
            let request = build_request(&config(method, "ignored body")).unwrap();
            assert!(request.body.is_none(), "{method} must not send a body");
        }
    }

    #[test]
    fn post_and_put_carry_body_verbatim() {
        let body = r#"{"rundeck": "success"}"#;
        for method in [RequestMethod::Post, RequestMethod::Put] {
            let request = build_request(&config(method, body)).unwrap();
            assert_eq!(request.body.as_deref(), Some(body.as_bytes()));
        }
    }

    #[test]
    fn empty_body_is_attached_as_zero_length_payload() {
        for method in [RequestMethod::Post, RequestMethod::Put] {
            let request = build_request(&config(method, "")).unwrap();
            assert_eq!(request.body, Some(Vec::new()));
        }
    }

    #[test]
    fn malformed_content_type_is_sent_as_is() {
        for content_type in ["", "123", "not a media type"] {
            let cfg = WebhookConfig::new(
                "https://example.com/",
                RequestMethod::Post,
                content_type,
                "Body Messages",
            );
            let request = build_request(&cfg).unwrap();

            assert_eq!(
                request.headers.get(http::header::CONTENT_TYPE).unwrap(),
                content_type
            );
        }
    }

    #[test]
    fn content_type_with_newline_is_rejected() {
        let cfg = WebhookConfig::new(
            "https://example.com/",
            RequestMethod::Get,
            "text/plain\r\nX-Injected: 1",
            "",
        );

        assert!(matches!(
            build_request(&cfg),
            Err(DispatchError::InvalidHeaderValue { .. })
        ));
    }

    #[test]
    fn empty_url_is_rejected() {
        let cfg = WebhookConfig::new("", RequestMethod::Get, "application/json", "");

        assert!(matches!(
            build_request(&cfg),
            Err(DispatchError::InvalidUrl { ref url, .. }) if url.is_empty()
        ));
    }

    #[test]
    fn url_without_scheme_is_rejected() {
        let cfg = WebhookConfig::new("www.test.com", RequestMethod::Get, "application/json", "");

        assert!(matches!(
            build_request(&cfg),
            Err(DispatchError::InvalidUrl { .. })
        ));
    }
}

mod config_parsing {
    use super::*;

    #[test]
    fn parse_accepts_supported_method() {
        let cfg = WebhookConfig::parse("https://example.com", "PUT", "text/html", "x").unwrap();

        assert_eq!(cfg.method, RequestMethod::Put);
        assert_eq!(cfg.content_type, "text/html");
        assert_eq!(cfg.body, "x");
    }

    #[test]
    fn parse_rejects_patch() {
        let result = WebhookConfig::parse("https://example.com", "PATCH", "application/json", "");

        assert!(matches!(result, Err(DispatchError::InvalidMethod(ref m)) if m == "PATCH"));
    }

    #[test]
    fn parse_rejects_empty_method() {
        let result = WebhookConfig::parse("https://example.com", "", "application/json", "");

        assert!(matches!(result, Err(DispatchError::InvalidMethod(_))));
    }
}

mod dispatch {
    use super::*;

    #[tokio::test]
    async fn returns_true_for_2xx() {
        for code in [200, 201, 204, 299] {
            let client = Arc::new(MockClient::with_status(code));
            let dispatcher = WebhookDispatcher::new(Arc::clone(&client));

            assert!(dispatcher.dispatch(&config(RequestMethod::Post, "{}")).await);
            assert_eq!(client.calls(), 1);
        }
    }

    #[tokio::test]
    async fn returns_false_outside_2xx() {
        for code in [100, 199, 300, 302, 400, 404, 500, 503] {
            let dispatcher = WebhookDispatcher::new(MockClient::with_status(code));

            assert!(
                !dispatcher.dispatch(&config(RequestMethod::Get, "")).await,
                "status {code} must fail"
            );
        }
    }

    #[tokio::test]
    async fn non_2xx_keeps_status_and_body() {
        let dispatcher = WebhookDispatcher::new(MockClient::with_status(502));

        let result = dispatcher
            .try_dispatch(&config(RequestMethod::Put, "x"))
            .await;

        match result {
            Err(DispatchError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, http::StatusCode::BAD_GATEWAY);
                assert_eq!(body.as_deref(), Some("{\"id\": 101}"));
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn redirect_is_a_protocol_failure() {
        let client = Arc::new(MockClient::with_status(302));
        let dispatcher = WebhookDispatcher::new(Arc::clone(&client));

        let error = dispatcher
            .try_dispatch(&config(RequestMethod::Post, "{}"))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Protocol);
        assert!(matches!(
            error,
            DispatchError::UnexpectedStatus { status, .. } if status == http::StatusCode::FOUND
        ));
        assert_eq!(client.calls(), 1, "redirect is not followed");
    }

    #[tokio::test]
    async fn transport_failures_return_false() {
        let errors = [
            HttpError::Timeout,
            HttpError::Connection(Box::new(std::io::Error::other("connection refused"))),
            HttpError::Rejected("builder error".to_string()),
        ];

        for error in errors {
            let client = Arc::new(MockClient::failing(error));
            let dispatcher = WebhookDispatcher::new(Arc::clone(&client));

            assert!(!dispatcher.dispatch(&config(RequestMethod::Delete, "")).await);
            assert_eq!(client.calls(), 1, "exactly one attempt");
        }
    }

    #[tokio::test]
    async fn timeout_is_classified_as_transport() {
        let dispatcher = WebhookDispatcher::new(MockClient::failing(HttpError::Timeout));

        let error = dispatcher
            .try_dispatch(&config(RequestMethod::Get, ""))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn invalid_url_fails_without_sending() {
        let client = Arc::new(MockClient::success());
        let dispatcher = WebhookDispatcher::new(Arc::clone(&client));
        let cfg = WebhookConfig::new("", RequestMethod::Get, "application/json", "");

        assert!(!dispatcher.dispatch(&cfg).await);
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn sends_configured_verb_headers_and_body() {
        let client = Arc::new(MockClient::with_status(201));
        let dispatcher = WebhookDispatcher::new(Arc::clone(&client));
        let cfg = WebhookConfig::new(
            "https://jsonplaceholder.typicode.com/posts",
            RequestMethod::Post,
            "application/json",
            r#"{"rundeck": "success"}"#,
        );

        assert!(dispatcher.dispatch(&cfg).await);

        let request = client.only_request();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(
            request.url.as_str(),
            "https://jsonplaceholder.typicode.com/posts"
        );
        assert_eq!(
            request.headers.get(http::header::ACCEPT).unwrap(),
            "application/json"
        );
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            request.body.as_deref(),
            Some(br#"{"rundeck": "success"}"#.as_slice())
        );
    }

    #[tokio::test]
    async fn delete_sends_no_body() {
        let client = Arc::new(MockClient::success());
        let dispatcher = WebhookDispatcher::new(Arc::clone(&client));

        assert!(
            dispatcher
                .dispatch(&config(RequestMethod::Delete, "payload"))
                .await
        );

        let request = client.only_request();
        assert_eq!(request.method, http::Method::DELETE);
        assert!(request.body.is_none());
    }
}
