//! Predicate-based element search.
//!
//! CSS selectors cover tag+class signatures; everything else (substring
//! tests on attribute values, composite image filters) is expressed as a
//! rule closure and run through [`query`] or [`query_all`].

use dom_query::Selection;

use crate::dom;

/// Query for first element matching the rule
///
/// Iterates through all descendants in document order and returns the first
/// element for which the rule returns true. The root itself is not tested.
///
/// # Example
///
/// ```rust
/// use rs_feedposts::{dom, selector};
///
/// let doc = dom::parse(r#"<div><button aria-label="12 comments">c</button></div>"#);
/// let root = doc.select("div");
///
/// let rule = selector::attr_contains("button", "aria-label", "comments");
/// let found = selector::query(&root, rule);
/// assert!(found.is_some());
/// ```
#[must_use]
pub fn query<'a, F>(root: &Selection<'a>, rule: F) -> Option<Selection<'a>>
where
    F: Fn(&Selection) -> bool,
{
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| rule(sel))
}

/// Query for all elements matching the rule, in document order.
#[must_use]
pub fn query_all<'a, F>(root: &Selection<'a>, rule: F) -> Vec<Selection<'a>>
where
    F: Fn(&Selection) -> bool,
{
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}

/// Rule: element `tag` whose attribute `attr` is present and contains
/// `needle`.
pub fn attr_contains<'n>(
    tag: &'n str,
    attr: &'n str,
    needle: &'n str,
) -> impl Fn(&Selection) -> bool + 'n {
    move |sel| {
        dom::is_tag(sel, tag)
            && sel
                .attr(attr)
                .is_some_and(|value| value.contains(needle))
    }
}

/// Rule: `<img>` whose `src` followed by its `class` string contains none
/// of `markers`.
///
/// Used to tell content images apart from avatars and logos.
pub fn image_without_markers(markers: &[String]) -> impl Fn(&Selection) -> bool + '_ {
    move |sel| {
        if !dom::is_tag(sel, "img") {
            return false;
        }
        let src = dom::get_attribute(sel, "src").unwrap_or_default();
        let class = dom::class_name(sel).unwrap_or_default();
        let combined = format!("{src}{class}");
        !markers.iter().any(|marker| combined.contains(marker.as_str()))
    }
}
