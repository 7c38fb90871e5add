//! # rs-feedposts
//!
//! Extract post metadata from saved HTML snapshots of a social feed and
//! export it as CSV.
//!
//! Every post container in the document becomes one [`PostRecord`]: author
//! and reshare names, timestamps, body text and its links, the raw
//! engagement labels, video sources and a media classification.
//! Anything the markup does not contain comes back as `None`; malformed
//! HTML never causes an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_feedposts::{extract_posts, posts_to_csv, PostType};
//!
//! let html = r#"<ul><li class="JCniPHMkzeWTJVYtYcBxPACGcXOBjlBoflxc">
//!     <div class="feed-shared-inline-show-more-text">Hello <a href="http://x">x</a></div>
//!     <video src="a.mp4" poster="p.jpg"></video>
//! </li></ul>"#;
//!
//! let posts = extract_posts(html)?;
//! assert_eq!(posts.len(), 1);
//! assert_eq!(posts[0].post_type, PostType::Video);
//! assert_eq!(posts[0].text_links.as_deref(), Some("http://x"));
//!
//! let csv = posts_to_csv(&posts)?;
//! assert!(csv.starts_with(b"reposter_name,"));
//! # Ok::<(), rs_feedposts::Error>(())
//! ```
//!
//! ## Features
//!
//! - `server` (default): axum upload service and the `feedposts-server`
//!   binary.

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Predicate-based element search.
pub mod selector;

/// Decoding uploaded bytes.
pub mod encoding;

/// CSV serialization.
pub mod csv_output;

/// HTTP upload service.
#[cfg(feature = "server")]
pub mod server;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{classify_post, extract_from_document, extract_record};
pub use options::Options;
pub use result::{PostRecord, PostType};

/// Extracts post records from an HTML document using default options.
///
/// Returns one record per post container in document order, or an empty
/// vector when the document has none.
pub fn extract_posts(html: &str) -> Result<Vec<PostRecord>> {
    extract_posts_with_options(html, &Options::default())
}

/// Extracts post records from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_feedposts::{extract_posts_with_options, Options, PostType};
///
/// let html = r#"<article class="post"><img src="logo-EntityPhoto.png"></article>"#;
/// let options = Options {
///     post_selector: "article.post".to_string(),
///     ..Options::default()
/// };
/// let posts = extract_posts_with_options(html, &options)?;
/// assert_eq!(posts[0].post_type, PostType::Text);
/// # Ok::<(), rs_feedposts::Error>(())
/// ```
pub fn extract_posts_with_options(html: &str, options: &Options) -> Result<Vec<PostRecord>> {
    extract::extract_records(html, options)
}

/// Extracts post records from raw bytes.
///
/// Bytes are decoded as UTF-8 with invalid sequences replaced by U+FFFD.
pub fn extract_posts_bytes(html: &[u8]) -> Result<Vec<PostRecord>> {
    extract_posts_bytes_with_options(html, &Options::default())
}

/// Extracts post records from raw bytes with custom options.
///
/// Honours `<meta charset>` when `options.detect_charset` is set.
pub fn extract_posts_bytes_with_options(html: &[u8], options: &Options) -> Result<Vec<PostRecord>> {
    let html_str = encoding::decode_html(html, options.detect_charset);
    extract_posts_with_options(&html_str, options)
}

/// Serializes records to CSV bytes with the fixed 13-column header.
pub fn posts_to_csv(records: &[PostRecord]) -> Result<Vec<u8>> {
    csv_output::to_csv_bytes(records)
}
