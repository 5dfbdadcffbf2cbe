//! HTML escaping for untrusted text.
//!
//! Every string that arrives from the backend API passes through
//! [`escape_html`] before it can reach rendered markup. This is the single
//! injection barrier for the content pipeline: render templates only ever
//! assemble already-escaped fragments.

use std::borrow::Cow;

/// Escape the five HTML-significant characters in `input`.
///
/// Escapes `&`, `<`, `>`, `"` and `'`. Attribute values rendered by the
/// content templates are double-quoted, so this set is sufficient for both
/// text and attribute positions.
///
/// # Performance
///
/// Returns `Cow::Borrowed` when the input contains nothing to escape, which
/// is the common case for well-formed API content.
///
/// # Examples
///
/// ```
/// use prospectus_types::escape_html;
///
/// assert_eq!(escape_html("Mathematics & Science"), "Mathematics &amp; Science");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let needs_escaping = input.contains(['&', '<', '>', '"', '\'']);
    if !needs_escaping {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
