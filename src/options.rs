//! Configuration options for post extraction.
//!
//! The defaults target one saved snapshot of the feed markup. Every
//! tag+class signature is a CSS selector, so markup drift can be absorbed
//! by overriding a field instead of patching the extractor.

use dom_query::Matcher;

use crate::error::{Error, Result};

/// Configuration options for post extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the stock feed markup.
///
/// # Example
///
/// ```rust
/// use rs_feedposts::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Treat an extra avatar marker as a profile image
/// let options = Options {
///     excluded_image_markers: vec![
///         "profile-displayphoto".to_string(),
///         "EntityPhoto".to_string(),
///         "ghost-person".to_string(),
///     ],
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Selector identifying one post container.
    ///
    /// Default: `li.JCniPHMkzeWTJVYtYcBxPACGcXOBjlBoflxc`
    pub post_selector: String,

    /// Name shown when the post is a reshare.
    ///
    /// Default: `span.update-components-header__text-view`
    pub reposter_selector: String,

    /// Name of the original author. Its nearest `<a href>` ancestor
    /// supplies `original_poster_link`.
    ///
    /// Default: `span.kgDPXkLQKouRClQPVOdEYtMnqfCCpJTUntJk`
    pub original_poster_selector: String,

    /// Descriptor under the actor (followers or headline).
    ///
    /// Default: `span.update-components-actor__description`
    pub follower_count_selector: String,

    /// Timestamp text under the actor.
    ///
    /// Default: `span.update-components-actor__sub-description`
    pub posted_time_selector: String,

    /// Body text container.
    ///
    /// Default: `div.feed-shared-inline-show-more-text`
    pub post_text_selector: String,

    /// Reactions button; its `aria-label` is taken verbatim.
    ///
    /// Default: `button[data-reaction-details]`
    pub reactions_selector: String,

    /// Substring identifying the comments button label.
    ///
    /// Default: `"comments"`
    pub comments_label_needle: String,

    /// Substring identifying the reposts button label.
    ///
    /// Default: `"reposts"`
    pub reposts_label_needle: String,

    /// Dedicated video section. A bare `<video>` also counts as video.
    ///
    /// Default: `div.update-components-linkedin-video`
    pub video_section_selector: String,

    /// Carousel marker container.
    ///
    /// Default: `div.feed-shared-update-v2--with-carousel-fix`
    pub carousel_selector: String,

    /// Images whose `src` + `class` contain any of these substrings are
    /// avatars and do not make a post an image post.
    ///
    /// Default: `["profile-displayphoto", "EntityPhoto"]`
    pub excluded_image_markers: Vec<String>,

    /// Honour `<meta charset>` declarations when decoding bytes.
    ///
    /// When disabled, input bytes are decoded as UTF-8 with invalid
    /// sequences replaced.
    ///
    /// Default: `false`
    pub detect_charset: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            post_selector: "li.JCniPHMkzeWTJVYtYcBxPACGcXOBjlBoflxc".to_string(),
            reposter_selector: "span.update-components-header__text-view".to_string(),
            original_poster_selector: "span.kgDPXkLQKouRClQPVOdEYtMnqfCCpJTUntJk".to_string(),
            follower_count_selector: "span.update-components-actor__description".to_string(),
            posted_time_selector: "span.update-components-actor__sub-description".to_string(),
            post_text_selector: "div.feed-shared-inline-show-more-text".to_string(),
            reactions_selector: "button[data-reaction-details]".to_string(),
            comments_label_needle: "comments".to_string(),
            reposts_label_needle: "reposts".to_string(),
            video_section_selector: "div.update-components-linkedin-video".to_string(),
            carousel_selector: "div.feed-shared-update-v2--with-carousel-fix".to_string(),
            excluded_image_markers: vec![
                "profile-displayphoto".to_string(),
                "EntityPhoto".to_string(),
            ],
            detect_charset: false,
        }
    }
}

impl Options {
    /// Check that every configured selector parses.
    ///
    /// `dom_query` treats an unparsable selector as matching nothing, which
    /// would silently null every field. Validating up front turns that into
    /// an error.
    pub fn validate(&self) -> Result<()> {
        for selector in self.selectors() {
            if Matcher::new(selector).is_err() {
                return Err(Error::InvalidSelector(selector.to_string()));
            }
        }
        Ok(())
    }

    fn selectors(&self) -> [&str; 9] {
        [
            self.post_selector.as_str(),
            self.reposter_selector.as_str(),
            self.original_poster_selector.as_str(),
            self.follower_count_selector.as_str(),
            self.posted_time_selector.as_str(),
            self.post_text_selector.as_str(),
            self.reactions_selector.as_str(),
            self.video_section_selector.as_str(),
            self.carousel_selector.as_str(),
        ]
    }
}
