//! HTTP messages as plain data.
//!
//! # Design
//! The endpoint layer builds `HttpRequest` values and parses `HttpResponse`
//! values without ever touching the network; a [`crate::transport`]
//! implementation executes the round-trip. Keeping the messages as owned
//! plain data makes every endpoint deterministic and unit-testable with
//! literal responses.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `CustomerClient::build_*` methods; `url` is absolute and already
/// carries any query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, fed to `CustomerClient::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
