//! Escaping of untrusted text.

use std::borrow::Cow;

/// Make untrusted text safe to embed as element content.
///
/// Escapes `&`, `<` and `>`. Text without those characters is returned
/// borrowed and unchanged.
#[must_use]
pub fn sanitize(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}
