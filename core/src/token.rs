//! CSRF token provision.
//!
//! # Design
//! Browser front-ends usually read the token straight out of the page with
//! a global `[name=csrfmiddlewaretoken]` query. Here the token arrives
//! through an injected `TokenSource` capability instead, decoupling request
//! building from page structure. Sources are consulted on every call:
//! tokens rotate per session and must not be cached across requests.

/// Name of the hidden form field carrying the session's CSRF token.
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Provides a CSRF token at request-build time.
///
/// `token` returns `None` when no token is available; `build_post` turns
/// that into `FetchError::MissingToken` before any request is built.
pub trait TokenSource {
    fn token(&self) -> Option<String>;
}

/// A fixed, known token.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Closures adapt an ambient page-query primitive into a `TokenSource`.
impl<F> TokenSource for F
where
    F: Fn() -> Option<String>,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// Extract the CSRF token from a rendered form page.
///
/// Finds the first element whose attributes name the CSRF field and returns
/// its `value` attribute. Accepts both quote styles; attribute order within
/// the tag does not matter. Returns `None` when no such field exists.
pub fn csrf_field(html: &str) -> Option<String> {
    let name_at = html.find(CSRF_FIELD_NAME)?;
    let tag_start = html[..name_at].rfind('<')?;
    let tag_end = name_at + html[name_at..].find('>')?;
    let tag = &html[tag_start..tag_end];

    let value_at = tag.find("value=")?;
    let rest = &tag[value_at + "value=".len()..];
    let quote = rest.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    let rest = &rest[1..];
    let end = rest.find(quote)?;
    Some(rest[..end].to_string())
}
