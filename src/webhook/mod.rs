//! Webhook layer for sending one HTTP request per notification.
//!
//! This module provides types and traits for:
//! - Describing a webhook ([`WebhookConfig`], [`RequestMethod`])
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Dispatching and interpreting the outcome ([`WebhookDispatcher`])

mod client;
mod config;
mod dispatcher;
mod error;
mod http;
mod method;

#[cfg(test)]
mod dispatcher_tests;

pub use client::ReqwestClient;
pub use config::WebhookConfig;
pub use dispatcher::{WebhookDispatcher, build_request};
pub use error::{DispatchError, ErrorKind, HttpError};
pub use self::http::{HttpClient, HttpRequest, HttpResponse};
pub use method::RequestMethod;
