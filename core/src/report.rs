//! Error surfacing for fire-and-forget callers.
//!
//! # Design
//! The core returns typed errors and never decides how they reach a user.
//! Callers that want one-shot fire-and-forget behavior wrap their result in
//! `surface`, which hands the failure to a caller-supplied `ErrorReporter`
//! exactly once and collapses the result to `Option`. The context string
//! names the helper that failed so concurrent GET and POST failures stay
//! distinguishable.

use crate::error::FetchError;

/// Context string for failures on the GET path.
pub const GET_CONTEXT: &str = "fetch_get";

/// Context string for failures on the POST path.
pub const POST_CONTEXT: &str = "fetch_post";

/// Receives a failed call's context and error. Implementations decide the
/// medium, whether that is a blocking dialog or a log line.
pub trait ErrorReporter {
    fn report(&self, context: &str, error: &FetchError);
}

impl<F> ErrorReporter for F
where
    F: Fn(&str, &FetchError),
{
    fn report(&self, context: &str, error: &FetchError) {
        self(context, error)
    }
}

/// Default reporter: one line on stderr per failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrReporter;

impl ErrorReporter for StderrReporter {
    fn report(&self, context: &str, error: &FetchError) {
        eprintln!("request failed in '{context}': {error}");
    }
}

/// Collapse a result to `Option`, reporting a failure exactly once.
///
/// `Ok` passes through untouched and the reporter is never consulted. `Err`
/// is handed to the reporter and becomes `None`, so the caller cannot
/// observe which failure occurred.
pub fn surface<T>(
    result: Result<T, FetchError>,
    context: &str,
    reporter: &dyn ErrorReporter,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            reporter.report(context, &error);
            None
        }
    }
}
