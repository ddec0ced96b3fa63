//! Unified GET/POST JSON request core with CSRF token attachment.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//! GET requests carry nothing extra; POST requests carry a JSON body, a
//! `Content-Type` header, and an `X-CSRFToken` header sourced at call time.
//!
//! # Design
//! - `FetchClient` is stateless — it holds only `base_url`.
//! - Each helper is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - The CSRF token arrives through an injected `TokenSource` capability
//!   rather than an ambient page lookup.
//! - Failures are a typed `FetchError`; callers wanting one-shot UI
//!   surfacing wrap results in `report::surface` with their own reporter.

pub mod client;
pub mod error;
pub mod http;
pub mod report;
pub mod token;

pub use client::{FetchClient, CSRF_HEADER, POST_CONTENT_TYPE};
pub use error::FetchError;
pub use http::{Credentials, HttpMethod, HttpRequest, HttpResponse};
pub use report::{surface, ErrorReporter, StderrReporter, GET_CONTEXT, POST_CONTEXT};
pub use token::{csrf_field, StaticToken, TokenSource, CSRF_FIELD_NAME};
