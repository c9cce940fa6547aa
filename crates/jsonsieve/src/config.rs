//! Filter configuration.
//!
//! Every setting is optional. A config can be built fluently or deserialized
//! from any serde format; missing keys take their defaults.
//!
//! ```
//! use jsonsieve::{FilterConfig, TermSyntax};
//!
//! let config = FilterConfig::new()
//!     .with_search_properties(["name", "color"])
//!     .with_title_property("name")
//!     .with_min_search_term_length(2);
//! assert_eq!(config.term_syntax, TermSyntax::Literal);
//!
//! let parsed: FilterConfig = serde_json::from_str(r#"{"min_search_term_length": 2}"#).unwrap();
//! assert_eq!(parsed.title_property, "name");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::matcher::{PropertyMatcher, DEFAULT_TITLE_PROPERTY};
use crate::pattern::TermSyntax;

/// Configuration of a filtering pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Properties eligible for matching.
    ///
    /// `None` means "every key of the first record".
    pub search_properties: Option<Vec<String>>,
    /// Property shown as the heading of each result. Default `"name"`.
    pub title_property: String,
    /// Terms with fewer characters than this cancel the search. Default `0`.
    pub min_search_term_length: usize,
    /// How term characters are interpreted. Default [`TermSyntax::Literal`].
    pub term_syntax: TermSyntax,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            search_properties: None,
            title_property: DEFAULT_TITLE_PROPERTY.to_string(),
            min_search_term_length: 0,
            term_syntax: TermSyntax::default(),
        }
    }
}

impl FilterConfig {
    /// Creates a config with all defaults.
    pub fn new() -> Self {
        FilterConfig::default()
    }

    /// Restricts matching to the given properties.
    pub fn with_search_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_properties = Some(properties.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the title property.
    pub fn with_title_property(mut self, property: impl Into<String>) -> Self {
        self.title_property = property.into();
        self
    }

    /// Sets the minimum term length, in characters.
    pub fn with_min_search_term_length(mut self, length: usize) -> Self {
        self.min_search_term_length = length;
        self
    }

    /// Sets how term characters are interpreted.
    pub fn with_term_syntax(mut self, syntax: TermSyntax) -> Self {
        self.term_syntax = syntax;
        self
    }

    /// Returns the term if it should start a search.
    ///
    /// Absent, empty, and too-short terms return `None`, which callers treat
    /// as cancellation rather than as a search with no results.
    pub fn active_term<'t>(&self, term: Option<&'t str>) -> Option<&'t str> {
        let term = term?;
        if term.is_empty() || term.chars().count() < self.min_search_term_length {
            return None;
        }
        Some(term)
    }

    /// Builds the property matcher for a collection.
    ///
    /// Without configured search properties, the keys of the first record
    /// are used. Later records are assumed to share that shape.
    pub fn matcher_for(&self, records: &[Value]) -> PropertyMatcher {
        let title = self.title_property.clone();
        match (&self.search_properties, records.first()) {
            (Some(properties), _) => PropertyMatcher::new(properties.iter().cloned(), title),
            (None, Some(first)) => PropertyMatcher::from_record_keys(first, title),
            (None, None) => PropertyMatcher::new(Vec::<String>::new(), title),
        }
    }
}
