//! DOM Operations Adapter
//!
//! Thin layer over `dom_query` exposing the lookups the record extractor
//! needs: first/all descendants by CSS selector, nearest ancestor with an
//! attribute, attribute access with presence check, and stripped text.
//! Every lookup returns `Option`/`Vec` so callers can express
//! find-or-null without touching `dom_query` directly.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

/// Tags whose text content is never visible.
const INVISIBLE_TEXT_TAGS: &[&str] = &["script", "style", "template"];

// === Parsing ===

/// Parse HTML string into document.
///
/// Never fails: html5ever recovers from malformed markup and yields a
/// best-effort tree.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value, `None` when the attribute is absent.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Check whether the selection's first node has the given tag.
#[must_use]
pub fn is_tag(sel: &Selection, expected: &str) -> bool {
    tag_name(sel).is_some_and(|t| t.eq_ignore_ascii_case(expected))
}

// === Querying ===

/// First descendant matching a CSS selector, or `None`.
#[must_use]
pub fn find_first<'a>(root: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = root.select_single(selector);
    found.exists().then_some(found)
}

/// All descendants matching a CSS selector, in document order.
#[must_use]
pub fn find_all<'a>(root: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    root.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Tree Navigation ===

/// Nearest ancestor with tag `tag` that carries attribute `attr`.
///
/// The starting element itself is not considered.
#[must_use]
pub fn find_parent_with_attr<'a>(
    sel: &Selection<'a>,
    tag: &str,
    attr: &str,
) -> Option<Selection<'a>> {
    let mut current = sel.parent();

    while current.exists() {
        if is_tag(&current, tag) && has_attribute(&current, attr) {
            return Some(current);
        }
        current = current.parent();
    }

    None
}

// === Text Content ===

/// Visible text with each text node trimmed and concatenated.
///
/// Whitespace-only text nodes are dropped and no separator is inserted
/// between the remaining pieces, so `<p> a </p><p> b </p>` yields `"ab"`.
/// Text inside `script`, `style` and `template` is skipped.
#[must_use]
pub fn stripped_text(sel: &Selection) -> String {
    let Some(root_node) = sel.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();

    for node in root_node.descendants() {
        if !node.is_text() {
            continue;
        }

        let hidden = node
            .parent()
            .and_then(|parent| parent.node_name())
            .is_some_and(|tag| {
                INVISIBLE_TEXT_TAGS
                    .iter()
                    .any(|t| tag.eq_ignore_ascii_case(t))
            });
        if hidden {
            continue;
        }

        let text = node.text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            out.push_str(trimmed);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_first_returns_none_when_missing() {
        let doc = parse("<div><span class=\"a\">x</span></div>");
        let root = doc.select("div");
        assert!(find_first(&root, "span.b").is_none());
        assert!(find_first(&root, "span.a").is_some());
    }

    #[test]
    fn find_first_matches_class_token_not_substring() {
        let doc = parse(r#"<div><span class="foo-bar">no</span><span class="x foo">yes</span></div>"#);
        let root = doc.select("div");
        let found = find_first(&root, "span.foo").map(|s| stripped_text(&s));
        assert_eq!(found.as_deref(), Some("yes"));
    }

    #[test]
    fn find_all_preserves_document_order() {
        let doc = parse(r#"<ul><li class="p">1</li><li>skip</li><li class="p">2</li><li class="p">3</li></ul>"#);
        let root = doc.select("ul");
        let texts: Vec<String> = find_all(&root, "li.p").iter().map(stripped_text).collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
    }

    #[test]
    fn find_parent_with_attr_walks_up_to_link() {
        let doc = parse(r#"<div><a href="/in/someone"><div><span><b id="t">N</b></span></div></a></div>"#);
        let b = doc.select("#t");
        let link = find_parent_with_attr(&b, "a", "href");
        assert_eq!(
            link.and_then(|l| get_attribute(&l, "href")).as_deref(),
            Some("/in/someone")
        );
    }

    #[test]
    fn find_parent_with_attr_ignores_link_without_href() {
        let doc = parse(r#"<div><a name="anchor"><span id="t">N</span></a></div>"#);
        let span = doc.select("#t");
        assert!(find_parent_with_attr(&span, "a", "href").is_none());
    }

    #[test]
    fn find_parent_with_attr_none_at_root() {
        let doc = parse(r#"<div><span id="t">N</span></div>"#);
        let span = doc.select("#t");
        assert!(find_parent_with_attr(&span, "a", "href").is_none());
    }

    #[test]
    fn stripped_text_trims_and_joins_without_separator() {
        let doc = parse("<div>  Hello \n <b> world </b>\n<i>!</i> </div>");
        let div = doc.select("div");
        assert_eq!(stripped_text(&div), "Helloworld!");
    }

    #[test]
    fn stripped_text_skips_script_and_style() {
        let doc = parse("<div>a<script>var x = 1;</script><style>.c{}</style>b</div>");
        let div = doc.select("div");
        assert_eq!(stripped_text(&div), "ab");
    }

    #[test]
    fn stripped_text_of_empty_element_is_empty_string() {
        let doc = parse("<div><span class=\"e\">   </span></div>");
        let span = doc.select("span.e");
        assert_eq!(stripped_text(&span), "");
    }

    #[test]
    fn attribute_presence_is_distinct_from_empty_value() {
        let doc = parse(r#"<div><video src="" poster="p.jpg"></video></div>"#);
        let video = doc.select("video");
        assert_eq!(get_attribute(&video, "src").as_deref(), Some(""));
        assert_eq!(get_attribute(&video, "poster").as_deref(), Some("p.jpg"));
        assert_eq!(get_attribute(&video, "autoplay"), None);
        assert!(!has_attribute(&video, "autoplay"));
    }

    #[test]
    fn tag_name_is_lowercase() {
        let doc = parse("<DIV><SPAN id=\"s\">x</SPAN></DIV>");
        let span = doc.select("#s");
        assert_eq!(tag_name(&span).as_deref(), Some("span"));
        assert!(is_tag(&span, "span"));
        assert_eq!(class_name(&span), None);
    }
}
