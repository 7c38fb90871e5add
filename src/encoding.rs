//! Decoding uploaded HTML bytes.
//!
//! Uploads are treated as UTF-8 and invalid sequences are replaced with
//! U+FFFD rather than rejected. Callers may opt into honouring a
//! `<meta charset>` declaration for snapshots saved in a legacy encoding.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Bytes inspected when sniffing for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Decode HTML bytes to a `String`, never failing.
///
/// With `detect_charset` off the bytes are decoded as UTF-8. With it on, a
/// charset declared in the first kilobyte selects the decoder, falling
/// back to UTF-8.
///
/// # Examples
///
/// ```
/// use rs_feedposts::encoding::decode_html;
///
/// let html = b"<p>caf\xC3\xA9 \xFF</p>";
/// assert_eq!(decode_html(html, false), "<p>caf\u{e9} \u{FFFD}</p>");
/// ```
#[must_use]
pub fn decode_html(html: &[u8], detect_charset: bool) -> String {
    let encoding = if detect_charset {
        detect_encoding(html)
    } else {
        UTF_8
    };

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

/// Detect character encoding from a charset declaration, defaulting to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_LEN)];
    let head_str = String::from_utf8_lossy(head);

    declared_charset(&head_str)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label from `<meta charset>` or an `http-equiv` content type.
fn declared_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
