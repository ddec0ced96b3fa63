//! Stateless HTTP request builder and response parser for the two unified
//! AJAX helpers (GET and POST with a CSRF header).
//!
//! # Design
//! `FetchClient` holds only a `base_url` and carries no mutable state between
//! calls. Each helper is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies. Two calls with identical
//! inputs build two independent, identical requests.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FetchError;
use crate::http::{Credentials, HttpMethod, HttpRequest, HttpResponse};
use crate::token::TokenSource;

/// Content type sent with every POST body. The body is always a JSON
/// string, never form-encoded.
pub const POST_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Header carrying the CSRF token on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Synchronous, stateless builder/parser for GET and POST JSON requests.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct FetchClient {
    base_url: String,
}

impl FetchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a GET request for `path` under the base URL.
    ///
    /// An empty path targets the base URL itself, so the path argument is
    /// effectively optional. No headers are attached and cookies follow the
    /// platform's same-origin default.
    pub fn build_get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url(path),
            headers: Vec::new(),
            body: None,
            credentials: Credentials::SameOrigin,
        }
    }

    /// Build a POST request carrying `payload` as a JSON body.
    ///
    /// The CSRF token is read from `tokens` at call time; a source that
    /// yields nothing fails the call with `MissingToken` before any request
    /// exists. Cookies are included, as state-changing requests need the
    /// session cookie alongside the token.
    pub fn build_post<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
        tokens: &dyn TokenSource,
    ) -> Result<HttpRequest, FetchError> {
        let token = tokens.token().ok_or(FetchError::MissingToken)?;
        let body = serde_json::to_string(payload)
            .map_err(|e| FetchError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.url(path),
            headers: vec![
                ("Content-Type".to_string(), POST_CONTENT_TYPE.to_string()),
                (CSRF_HEADER.to_string(), token),
            ],
            body: Some(body),
            credentials: Credentials::Include,
        })
    }

    /// Decode the body of a GET response as JSON.
    pub fn parse_get<T: DeserializeOwned>(
        &self,
        response: HttpResponse,
    ) -> Result<T, FetchError> {
        decode_json(response)
    }

    /// Decode the body of a POST response as JSON.
    pub fn parse_post<T: DeserializeOwned>(
        &self,
        response: HttpResponse,
    ) -> Result<T, FetchError> {
        decode_json(response)
    }

    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Decode a response body as JSON.
///
/// Consumes the response by value: a body can only be decoded through one
/// path, so ownership rules out a second read of an already-decoded body.
/// The status code is not inspected. Like the platform fetch primitive,
/// a non-2xx reply with a JSON body still decodes to that JSON, and only a
/// malformed body is an error.
fn decode_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, FetchError> {
    serde_json::from_str(&response.body)
        .map_err(|e| FetchError::Deserialization(e.to_string()))
}
