//! Webhook Notifier
//!
//! A job notification plugin that fires one customizable HTTP request
//! (GET, POST, PUT, or DELETE) per execution event and reports whether
//! it succeeded.

pub mod config;
pub mod notification;
pub mod webhook;
