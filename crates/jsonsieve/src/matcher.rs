//! Per-record property matching.
//!
//! The [`PropertyMatcher`] decides, for one record and one search pattern,
//! which searchable properties contain the term, and builds the
//! [`FilteredItem`] shown for the record.
//!
//! # Matching rules
//!
//! ```text
//! candidate  = property is searchable ∧ present on the record ∧ truthy
//! matched    = candidate ∧ pattern occurs in the compact JSON of the value
//! item       = Some(..) iff at least one property matched
//! ```
//!
//! Falsy values (`null`, `false`, `0`, `""`) are never candidates, so a
//! search for `"0"` cannot match a property holding `0`. Strings are tested
//! in their JSON form, quotes included.
//!
//! When an item is built, the title property is always added if the record
//! has it, highlighted where it contains the term.

use serde_json::{Map, Value};
use tracing::trace;

use crate::highlight::highlight;
use crate::identity::ID_FIELD;
use crate::item::FilteredItem;
use crate::pattern::SearchPattern;
use crate::render::render_value;
use crate::value::{is_truthy, search_text, title_text};

/// Default title property.
pub const DEFAULT_TITLE_PROPERTY: &str = "name";

/// Matches records property by property.
///
/// # Example
///
/// ```
/// use jsonsieve::{PropertyMatcher, SearchPattern};
/// use serde_json::json;
///
/// let matcher = PropertyMatcher::new(["name", "color"], "name");
/// let pattern = SearchPattern::literal("an").unwrap();
///
/// assert!(matcher.match_record(&json!({"name": "Apple", "color": "red"}), &pattern).is_none());
///
/// let item = matcher
///     .match_record(&json!({"name": "Banana", "color": "yellow"}), &pattern)
///     .unwrap();
/// assert!(item.contains("name"));
/// assert!(!item.contains("color"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMatcher {
    search_properties: Vec<String>,
    title_property: String,
}

impl PropertyMatcher {
    /// Creates a matcher over the given searchable properties.
    ///
    /// Repeated names are kept once, at their first position.
    pub fn new<I, S>(search_properties: I, title_property: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for property in search_properties.into_iter().map(Into::into) {
            if !unique.contains(&property) {
                unique.push(property);
            }
        }
        PropertyMatcher {
            search_properties: unique,
            title_property: title_property.into(),
        }
    }

    /// Creates a matcher searching every key of `record`.
    ///
    /// Keys are taken in the record's order. A non-object record yields a
    /// matcher with no searchable properties, which matches nothing.
    pub fn from_record_keys(record: &Value, title_property: impl Into<String>) -> Self {
        Self::new(record_keys(record), title_property)
    }

    /// Returns the searchable property names.
    pub fn search_properties(&self) -> &[String] {
        &self.search_properties
    }

    /// Returns the title property name.
    pub fn title_property(&self) -> &str {
        &self.title_property
    }

    /// Returns the names of the searchable properties of `record` that match.
    pub fn matched_properties<'m>(
        &'m self,
        record: &Value,
        pattern: &SearchPattern,
    ) -> Vec<&'m str> {
        let Some(object) = record.as_object() else {
            return Vec::new();
        };
        self.search_properties
            .iter()
            .filter(|property| property_matches(object, property, pattern))
            .map(String::as_str)
            .collect()
    }

    /// Matches one record, returning its filtered projection.
    ///
    /// Returns `None` when no searchable property matched. Records that are
    /// not JSON objects never match.
    pub fn match_record(&self, record: &Value, pattern: &SearchPattern) -> Option<FilteredItem> {
        let object = record.as_object()?;

        let mut item = FilteredItem::new();
        let mut matched = 0usize;
        for property in &self.search_properties {
            if !property_matches(object, property, pattern) {
                continue;
            }
            matched += 1;
            // The raw id is copied below; it is never shown highlighted.
            if property == ID_FIELD {
                continue;
            }
            if let Some(value) = object.get(property) {
                let rendered = render_value(value);
                item.push_field(property.as_str(), highlight(&rendered, pattern));
            }
        }

        if matched == 0 {
            return None;
        }

        if let Some(id) = object.get(ID_FIELD) {
            item.set_id(id.clone());
        }

        if !item.contains(&self.title_property) && self.title_property != ID_FIELD {
            if let Some(title) = object.get(&self.title_property) {
                let text = title_text(title);
                item.push_field(self.title_property.as_str(), highlight(&text, pattern));
            }
        }

        trace!(matched, fields = item.len(), "record matched");
        Some(item)
    }
}

fn property_matches(object: &Map<String, Value>, property: &str, pattern: &SearchPattern) -> bool {
    match object.get(property) {
        Some(value) if is_truthy(value) => pattern.is_match(&search_text(value)),
        _ => false,
    }
}

/// Returns the keys of an object record, in order.
pub fn record_keys(record: &Value) -> Vec<String> {
    record
        .as_object()
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default()
}
