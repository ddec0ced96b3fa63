//! Error types for the request core.
//!
//! # Design
//! One variant per failure class, so callers can branch on what went wrong
//! instead of receiving a swallowed UI side effect. `MissingToken` gets a
//! dedicated variant because it is the only failure that happens before a
//! request even exists; everything else is attributable to the wire or to
//! (de)serialization.

use std::fmt;

/// Errors returned by `FetchClient` build and parse methods, and by
/// executors that adopt this taxonomy for transport failures.
#[derive(Debug)]
pub enum FetchError {
    /// No CSRF token could be obtained from the `TokenSource`. The request
    /// is never built, so no network activity has taken place.
    MissingToken,

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be decoded as JSON.
    Deserialization(String),

    /// Network-level failure reported by the executor: DNS, connection
    /// refused, abort.
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::MissingToken => {
                write!(f, "no CSRF token available in the page")
            }
            FetchError::Serialization(msg) => {
                write!(f, "payload serialization failed: {msg}")
            }
            FetchError::Deserialization(msg) => {
                write!(f, "response is not valid JSON: {msg}")
            }
            FetchError::Transport(msg) => {
                write!(f, "network request failed: {msg}")
            }
        }
    }
}

impl std::error::Error for FetchError {}
