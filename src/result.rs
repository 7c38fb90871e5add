//! Result types for extraction output.
//!
//! One `PostRecord` is produced per matched post container. Every field
//! except `post_type` is optional and is `None` only when the element or
//! attribute it comes from is absent.

use std::fmt;

use serde::Serialize;

/// Media classification of a post.
///
/// Assigned by a first-match-wins chain: video, then carousel, then image,
/// falling back to text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    /// No media detected.
    #[default]
    Text,
    /// At least one content image (avatars excluded).
    Image,
    /// A video section or `<video>` element.
    Video,
    /// A carousel (document or multi-image) post.
    Carousel,
}

impl PostType {
    /// Lowercase name used in CSV and JSON output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PostType::Text => "text",
            PostType::Image => "image",
            PostType::Video => "video",
            PostType::Carousel => "carousel",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata extracted from a single post container.
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostRecord {
    /// Name shown when the post appears as a reshare.
    pub reposter_name: Option<String>,

    /// Name of the original author.
    pub original_poster: Option<String>,

    /// `href` of the nearest link enclosing the original author's name.
    pub original_poster_link: Option<String>,

    /// Descriptor under the actor, usually a follower count or headline.
    pub follower_count: Option<String>,

    /// Relative or absolute timestamp text, as displayed.
    pub posted_time: Option<String>,

    /// Visible body text.
    pub post_text: Option<String>,

    /// Body-text link targets joined with `"; "`. `None` when the body has
    /// no links.
    pub text_links: Option<String>,

    /// Raw accessible label of the reactions button.
    pub total_reactions: Option<String>,

    /// Raw accessible label containing "comments".
    pub total_comments: Option<String>,

    /// Raw accessible label containing "reposts".
    pub total_reposts: Option<String>,

    /// `src` of the first `<video>`.
    pub video_src: Option<String>,

    /// `poster` of the first `<video>`.
    pub video_poster: Option<String>,

    /// Media classification.
    pub post_type: PostType,
}

impl PostRecord {
    /// Column names in output order.
    pub const FIELD_NAMES: [&'static str; 13] = [
        "reposter_name",
        "original_poster",
        "original_poster_link",
        "follower_count",
        "posted_time",
        "post_text",
        "text_links",
        "total_reactions",
        "total_comments",
        "total_reposts",
        "video_src",
        "video_poster",
        "post_type",
    ];

    /// Field values in `FIELD_NAMES` order, with `None` rendered empty.
    #[must_use]
    pub fn to_row(&self) -> [&str; 13] {
        fn cell(v: Option<&String>) -> &str {
            v.map_or("", String::as_str)
        }
        [
            cell(self.reposter_name.as_ref()),
            cell(self.original_poster.as_ref()),
            cell(self.original_poster_link.as_ref()),
            cell(self.follower_count.as_ref()),
            cell(self.posted_time.as_ref()),
            cell(self.post_text.as_ref()),
            cell(self.text_links.as_ref()),
            cell(self.total_reactions.as_ref()),
            cell(self.total_comments.as_ref()),
            cell(self.total_reposts.as_ref()),
            cell(self.video_src.as_ref()),
            cell(self.video_poster.as_ref()),
            self.post_type.as_str(),
        ]
    }
}
