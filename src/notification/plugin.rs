//! The host-facing notification plugin.

use std::collections::HashMap;

use crate::webhook::{ReqwestClient, WebhookConfig, WebhookDispatcher};

use super::NotificationProperties;

/// Key/value data the host passes alongside a notification.
pub type NotificationData = HashMap<String, serde_json::Value>;

/// Contract between the host platform and a notification plugin.
///
/// The host calls [`post_notification`](Self::post_notification) when a
/// job-execution event fires and records the returned boolean as the
/// notification outcome. Implementations never panic or return errors to
/// the host; every failure is reported as `false`.
pub trait NotificationPlugin: Send + Sync {
    /// Delivers one notification.
    ///
    /// # Arguments
    ///
    /// * `trigger` - Name of the execution event (e.g. `success`, `failure`)
    /// * `execution_data` - Host data describing the execution
    /// * `config` - Host-level plugin configuration
    fn post_notification(
        &self,
        trigger: &str,
        execution_data: &NotificationData,
        config: &NotificationData,
    ) -> bool;
}

/// Notification plugin that fires one customizable HTTP request.
///
/// Blocks the calling thread for the duration of the request, including
/// when that thread is driving a tokio runtime. Async callers that can
/// await should use [`WebhookDispatcher`] directly.
///
/// # Example
///
/// ```no_run
/// use webhook_notifier::notification::{
///     CustomWebhookPlugin, NotificationData, NotificationPlugin, NotificationProperties,
/// };
///
/// let plugin = CustomWebhookPlugin::new(NotificationProperties::new(
///     "https://jsonplaceholder.typicode.com/posts",
///     "POST",
///     "application/json",
///     r#"{"rundeck": "success"}"#,
/// ));
///
/// let delivered = plugin.post_notification("success", &NotificationData::new(), &NotificationData::new());
/// # let _ = delivered;
/// ```
#[derive(Debug, Clone, Default)]
pub struct CustomWebhookPlugin {
    properties: NotificationProperties,
}

impl CustomWebhookPlugin {
    /// Creates a plugin with the given properties.
    #[must_use]
    pub const fn new(properties: NotificationProperties) -> Self {
        Self { properties }
    }

    /// Sends the webhook, blocking until it completes.
    ///
    /// A thread already inside a tokio runtime cannot block on another one,
    /// so in that case the request is made from a scoped helper thread.
    fn send(config: &WebhookConfig) -> bool {
        if tokio::runtime::Handle::try_current().is_err() {
            return Self::send_blocking(config);
        }

        tracing::debug!("Called from within an async runtime, sending from a helper thread");
        let span = tracing::Span::current();
        std::thread::scope(|scope| {
            scope
                .spawn(move || span.in_scope(|| Self::send_blocking(config)))
                .join()
                .unwrap_or_else(|_| {
                    tracing::warn!("Webhook thread panicked");
                    false
                })
        })
    }

    /// Sends the webhook on a runtime and client that live only for this call.
    fn send_blocking(config: &WebhookConfig) -> bool {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::warn!("Failed to create async runtime: {e}");
                return false;
            }
        };

        let client = match ReqwestClient::for_target(&config.url) {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!("Failed to create HTTP client: {e}");
                return false;
            }
        };

        let dispatcher = WebhookDispatcher::new(client);
        runtime.block_on(dispatcher.dispatch(config))
    }
}

impl NotificationPlugin for CustomWebhookPlugin {
    fn post_notification(
        &self,
        trigger: &str,
        execution_data: &NotificationData,
        config: &NotificationData,
    ) -> bool {
        let span = tracing::info_span!(
            "notification",
            trigger,
            execution_fields = execution_data.len(),
            config_fields = config.len(),
        );
        let _enter = span.enter();

        let webhook = match self.properties.to_webhook_config() {
            Ok(webhook) => webhook,
            Err(e) => {
                tracing::warn!(kind = %e.kind(), "Webhook not sent: {e}");
                return false;
            }
        };

        Self::send(&webhook)
    }
}
