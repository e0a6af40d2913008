//! Safety policy applied to a destination after its signature checks out.
//!
//! Order matters and is fixed:
//! 1. HTML-escape the destination
//! 2. Reject if the escaped string starts with `javascript`
//! 3. Prefix `http://` when no `://` is present
//!
//! The denylist is a literal, case-sensitive prefix check. `JavaScript:`,
//! leading whitespace or entity-encoded forms are not caught.

use maud::{Markup, PreEscaped, Render};

use crate::error::GatewayError;
use crate::redirect::escape::escape_html;

const DENIED_PREFIX: &str = "javascript";
const SCHEME_SEPARATOR: &str = "://";
const DEFAULT_SCHEME: &str = "http://";

/// A destination that has been escaped and checked, ready to embed raw
/// into the redirect page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeUrl(String);

impl SafeUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SafeUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Spliced into maud templates as-is; the value is already escaped.
impl Render for SafeUrl {
    fn render(&self) -> Markup {
        PreEscaped(self.0.clone())
    }
}

/// Turn a verified destination into a [`SafeUrl`].
pub fn apply(destination: &str) -> Result<SafeUrl, GatewayError> {
    let escaped = escape_html(destination);

    if escaped.starts_with(DENIED_PREFIX) {
        return Err(GatewayError::UnsafeScheme);
    }

    if escaped.contains(SCHEME_SEPARATOR) {
        Ok(SafeUrl(escaped))
    } else {
        Ok(SafeUrl(format!("{DEFAULT_SCHEME}{escaped}")))
    }
}
