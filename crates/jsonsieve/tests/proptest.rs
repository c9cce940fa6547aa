//! Property-based tests for jsonsieve using proptest.

use proptest::prelude::*;
use serde_json::{json, Value};

use jsonsieve::{
    assign_ids, assign_ids_with, filter_collection, filter_items, highlight, is_truthy,
    render_value, search_text, FilterConfig, PropertyMatcher, SearchPattern, ID_FIELD,
};

// ============================================================================
// Test helpers
// ============================================================================

const PROPERTIES: [&str; 3] = ["name", "count", "flag"];

fn record_strategy() -> impl Strategy<Value = Value> {
    ("[a-zA-Z ]{0,12}", 0i64..120, any::<bool>())
        .prop_map(|(name, count, flag)| json!({ "name": name, "count": count, "flag": flag }))
}

fn term_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,3}"
}

/// Reference decision: some truthy searchable property contains the term.
fn expected_match(record: &Value, term: &str) -> bool {
    let term = term.to_lowercase();
    PROPERTIES.iter().any(|property| match record.get(*property) {
        Some(value) if is_truthy(value) => search_text(value).to_lowercase().contains(&term),
        _ => false,
    })
}

fn strip_markup(text: &str) -> String {
    text.replace("<span class=\"highlight\">", "")
        .replace("</span>", "")
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// The matcher yields an item exactly when a truthy property contains the term.
    #[test]
    fn match_iff_some_property_contains_term(
        record in record_strategy(),
        term in term_strategy(),
    ) {
        let matcher = PropertyMatcher::new(PROPERTIES, "name");
        let pattern = SearchPattern::literal(&term).unwrap();

        let item = matcher.match_record(&record, &pattern);
        prop_assert_eq!(item.is_some(), expected_match(&record, &term));
    }

    /// A produced item is never empty and always carries the title.
    #[test]
    fn items_carry_the_title(
        record in record_strategy(),
        term in term_strategy(),
    ) {
        let matcher = PropertyMatcher::new(PROPERTIES, "name");
        let pattern = SearchPattern::literal(&term).unwrap();

        if let Some(item) = matcher.match_record(&record, &pattern) {
            prop_assert!(!item.is_empty());
            let title = item.get("name").unwrap();
            prop_assert_eq!(strip_markup(title), record["name"].as_str().unwrap());
        }
    }

    /// Assigning ids twice changes nothing the second time.
    #[test]
    fn id_assignment_is_idempotent(
        mut records in prop::collection::vec(record_strategy(), 0..30),
    ) {
        assign_ids(&mut records);
        let first = records.clone();

        prop_assert_eq!(assign_ids(&mut records), 0);
        prop_assert_eq!(records, first);
    }

    /// Highlighting text without an occurrence returns it unchanged.
    #[test]
    fn highlight_without_occurrence_is_identity(
        text in "[a-z ]{0,30}",
        term in "[a-z]{1,4}",
    ) {
        prop_assume!(!text.contains(&term));
        let pattern = SearchPattern::literal(&term).unwrap();
        prop_assert_eq!(highlight(&text, &pattern), text.as_str());
    }

    /// Removing the markup from highlighted text gives back the original.
    #[test]
    fn highlight_only_adds_markup(
        text in "[a-zA-Z0-9 .,()*+?]{0,40}",
        term in "[a-zA-Z.()*+?]{1,3}",
    ) {
        let pattern = SearchPattern::literal(&term).unwrap();
        let highlighted = highlight(&text, &pattern);
        prop_assert_eq!(strip_markup(&highlighted), text);
    }

    /// Results keep the relative order of the input records.
    #[test]
    fn filter_preserves_order(
        mut records in prop::collection::vec(record_strategy(), 0..40),
        term in term_strategy(),
    ) {
        let mut next = 0usize;
        assign_ids_with(&mut records, || {
            next += 1;
            format!("{:04}", next)
        });

        let matcher = PropertyMatcher::new(PROPERTIES, "name");
        let pattern = SearchPattern::literal(&term).unwrap();
        let results = filter_collection(&records, &pattern, &matcher);

        let ids: Vec<&str> = results
            .iter()
            .map(|item| item.id().and_then(Value::as_str).unwrap())
            .collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ids, sorted);

        let expected = records.iter().filter(|r| expected_match(r, &term)).count();
        prop_assert_eq!(results.len(), expected);
    }

    /// No term means no filter, whatever the collection.
    #[test]
    fn empty_term_is_no_filter(
        records in prop::collection::vec(record_strategy(), 0..20),
    ) {
        let config = FilterConfig::new();
        prop_assert!(filter_items(&records, None, &config).unwrap().is_none());
        prop_assert!(filter_items(&records, Some(""), &config).unwrap().is_none());
    }

    /// Strings render as themselves.
    #[test]
    fn strings_render_unchanged(text in ".{0,40}") {
        let value = Value::String(text.clone());
        prop_assert_eq!(render_value(&value), text.as_str());
    }

    /// Existing ids are never replaced.
    #[test]
    fn existing_ids_survive(id in "[a-z0-9-]{1,20}") {
        let mut records = vec![json!({ "_id": id.clone(), "name": "x" }), json!({ "name": "y" })];
        assign_ids(&mut records);
        prop_assert_eq!(records[0][ID_FIELD].as_str(), Some(id.as_str()));
        prop_assert!(records[1][ID_FIELD].is_string());
    }
}
