//! HTTP transport used by the registry client.
//!
//! This module provides:
//! - Request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The client abstraction the registry layer is written against ([`HttpClient`])
//! - The production implementation backed by reqwest ([`ReqwestClient`])

mod client;
mod error;
mod types;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use types::{HttpClient, HttpRequest, HttpResponse};
