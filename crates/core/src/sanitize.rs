//! Markup neutralization for untrusted free-text fields.
//!
//! Locations, product names and messages are stored server-side and later
//! rendered as-is by the client, so markup-significant characters are
//! replaced with HTML entities before anything reaches the database. The
//! entity set matches what the original validation layer escaped.

/// Escape markup-significant characters with HTML entities.
///
/// Replaces `&`, `<`, `>`, `"`, `'` and `` ` `` so the result is inert when
/// interpolated into an HTML context. Idempotence is NOT guaranteed -
/// escaping twice double-encodes ampersands - so call this exactly once, at
/// the storage boundary.
#[must_use]
pub fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '`' => out.push_str("&#x60;"),
            _ => out.push(c),
        }
    }
    out
}

/// Trim and escape an untrusted field in one step.
#[must_use]
pub fn clean_text(input: &str) -> String {
    escape_markup(input.trim())
}
