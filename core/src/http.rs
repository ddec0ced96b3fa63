//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test: the same build/parse pair works under any host that can execute
//! HTTP, including a test harness.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed
//! across threads or runtimes without lifetime concerns.

/// HTTP method for a request. The surface only ever issues GET and POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Cookie-forwarding mode for a request.
///
/// A data rendering of the browser's `credentials` request option. The
/// executor decides how to honor it; a non-browser host typically forwards
/// its cookie jar for `Include` and stays silent for `SameOrigin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    /// Platform default: cookies only for same-origin targets.
    SameOrigin,
    /// Cookies attached regardless of target origin.
    Include,
}

/// An HTTP request described as plain data.
///
/// Built by `FetchClient::build_*` methods. The caller is responsible for
/// executing this request against the network and returning the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub credentials: Credentials,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `FetchClient::parse_*` methods for decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
