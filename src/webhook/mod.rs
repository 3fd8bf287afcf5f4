//! Webhook layer for posting messages over HTTP.
//!
//! This module provides:
//! - HTTP request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The transport abstraction ([`HttpClient`]) and its reqwest
//!   implementation ([`ReqwestClient`])
//! - The webhook client itself ([`WebhookClient`])
//! - Error types and their comparable kinds ([`WebhookError`], [`ErrorKind`])

mod client;
mod error;
mod http;
mod sender;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::{ApiError, ErrorKind, HttpError, WebhookError};
pub use self::http::{APPLICATION_JSON, HttpClient, HttpRequest, HttpResponse};
pub use sender::WebhookClient;
