//! Match highlighting.
//!
//! Occurrences of the search term are wrapped in a `span` carrying the
//! [`HIGHLIGHT_CLASS`] class so the presentation layer can style them.

use std::borrow::Cow;

use regex::Captures;

use crate::pattern::SearchPattern;

/// CSS class carried by every highlight span.
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// Wraps every case-insensitive occurrence of the pattern in `text`.
///
/// Occurrences are found in a single left-to-right scan and each one is
/// wrapped once, keeping its original casing. Text without an occurrence is
/// returned borrowed and unchanged.
///
/// An empty term matches between every pair of characters; callers filter
/// empty terms out before compiling a pattern.
///
/// # Example
///
/// ```
/// use jsonsieve::{highlight, SearchPattern};
///
/// let pattern = SearchPattern::literal("an").unwrap();
/// assert_eq!(
///     highlight("Banana", &pattern),
///     r#"B<span class="highlight">an</span><span class="highlight">an</span>a"#
/// );
/// assert_eq!(highlight("Apple", &pattern), "Apple");
/// ```
pub fn highlight<'t>(text: &'t str, pattern: &SearchPattern) -> Cow<'t, str> {
    pattern
        .regex()
        .replace_all(text, |caps: &Captures<'_>| wrap(&caps[0]))
}

/// Returns `fragment` wrapped in a highlight span.
pub fn wrap(fragment: &str) -> String {
    format!("<span class=\"{}\">{}</span>", HIGHLIGHT_CLASS, fragment)
}
