//! Post record extraction.
//!
//! Each post container is run through a set of independent field
//! extractors. Every extractor is a pure find-or-null lookup: when the
//! element or attribute it needs is missing the field is `None`, and no
//! extractor can fail the record or the document.

use dom_query::Selection;
use tracing::{debug, trace};

use crate::dom::{self, Document};
use crate::error::Result;
use crate::options::Options;
use crate::result::{PostRecord, PostType};
use crate::selector;

/// Separator between body-text link targets.
const LINK_SEPARATOR: &str = "; ";

/// Extract one record per post container, in document order.
///
/// A document without containers yields an empty vector.
pub(crate) fn extract_records(html: &str, options: &Options) -> Result<Vec<PostRecord>> {
    options.validate()?;

    let doc = dom::parse(html);
    let records = extract_from_document(&doc, options);

    debug!(posts = records.len(), "extracted post records");
    Ok(records)
}

/// Extract records from an already parsed document.
#[must_use]
pub fn extract_from_document(doc: &Document, options: &Options) -> Vec<PostRecord> {
    doc.select(&options.post_selector)
        .nodes()
        .iter()
        .map(|node| extract_record(&Selection::from(*node), options))
        .collect()
}

/// Build the record for a single post container.
#[must_use]
pub fn extract_record(post: &Selection, options: &Options) -> PostRecord {
    let (video_src, video_poster) = video_attributes(post);

    let record = PostRecord {
        reposter_name: text_of(post, &options.reposter_selector),
        original_poster: text_of(post, &options.original_poster_selector),
        original_poster_link: original_poster_link(post, options),
        follower_count: text_of(post, &options.follower_count_selector),
        posted_time: text_of(post, &options.posted_time_selector),
        post_text: text_of(post, &options.post_text_selector),
        text_links: text_links(post, options),
        total_reactions: total_reactions(post, options),
        total_comments: button_label_containing(post, &options.comments_label_needle),
        total_reposts: button_label_containing(post, &options.reposts_label_needle),
        video_src,
        video_poster,
        post_type: classify_post(post, options),
    };

    trace!(post_type = %record.post_type, "classified post");
    record
}

// ============================================================
// FIELD EXTRACTORS
// ============================================================

/// Stripped text of the first descendant matching `selector`.
fn text_of(post: &Selection, selector: &str) -> Option<String> {
    dom::find_first(post, selector).map(|el| dom::stripped_text(&el))
}

/// `href` of the nearest link enclosing the original poster's name.
fn original_poster_link(post: &Selection, options: &Options) -> Option<String> {
    let name = dom::find_first(post, &options.original_poster_selector)?;
    let link = dom::find_parent_with_attr(&name, "a", "href")?;
    dom::get_attribute(&link, "href")
}

/// Link targets inside the body text, joined in document order.
///
/// `None` both when there is no body text and when it has no links.
fn text_links(post: &Selection, options: &Options) -> Option<String> {
    let body = dom::find_first(post, &options.post_text_selector)?;
    let hrefs: Vec<String> = dom::find_all(&body, "a[href]")
        .iter()
        .filter_map(|a| dom::get_attribute(a, "href"))
        .collect();

    if hrefs.is_empty() {
        None
    } else {
        Some(hrefs.join(LINK_SEPARATOR))
    }
}

/// Raw `aria-label` of the reactions button.
fn total_reactions(post: &Selection, options: &Options) -> Option<String> {
    let button = dom::find_first(post, &options.reactions_selector)?;
    dom::get_attribute(&button, "aria-label")
}

/// Raw `aria-label` of the first button whose label contains `needle`.
///
/// Comments and reposts each run their own search, so a single button
/// whose label mentions both will populate both fields.
fn button_label_containing(post: &Selection, needle: &str) -> Option<String> {
    let button = selector::query(post, selector::attr_contains("button", "aria-label", needle))?;
    dom::get_attribute(&button, "aria-label")
}

/// `src` and `poster` of the first `<video>`, each independently optional.
fn video_attributes(post: &Selection) -> (Option<String>, Option<String>) {
    match dom::find_first(post, "video") {
        Some(video) => (
            dom::get_attribute(&video, "src"),
            dom::get_attribute(&video, "poster"),
        ),
        None => (None, None),
    }
}

// ============================================================
// CLASSIFICATION
// ============================================================

/// Classify the post's media, first match wins:
/// video, carousel, image, then text.
#[must_use]
pub fn classify_post(post: &Selection, options: &Options) -> PostType {
    if dom::find_first(post, &options.video_section_selector).is_some()
        || dom::find_first(post, "video").is_some()
    {
        return PostType::Video;
    }

    if dom::find_first(post, &options.carousel_selector).is_some() {
        return PostType::Carousel;
    }

    if selector::query(post, selector::image_without_markers(&options.excluded_image_markers))
        .is_some()
    {
        return PostType::Image;
    }

    PostType::Text
}
