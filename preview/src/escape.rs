//! HTML escaping for preview output.

/// Escape text for safe inclusion in HTML markup.
///
/// Ampersands are replaced first so existing characters are not
/// double-escaped into broken entities.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
