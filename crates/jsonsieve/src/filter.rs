//! Collection-wide filtering.
//!
//! Every call scans the whole collection. Results are never cached between
//! calls, so the output always reflects the records and term passed in.

use std::time::Instant;

use serde_json::Value;
use tracing::debug;

use crate::config::FilterConfig;
use crate::error::Result;
use crate::item::FilteredItem;
use crate::matcher::PropertyMatcher;
use crate::pattern::SearchPattern;

/// Runs the matcher over every record, keeping the ones that match.
///
/// Results keep the input order.
pub fn filter_collection(
    records: &[Value],
    pattern: &SearchPattern,
    matcher: &PropertyMatcher,
) -> Vec<FilteredItem> {
    records
        .iter()
        .filter_map(|record| matcher.match_record(record, pattern))
        .collect()
}

/// Filters a collection with a search term.
///
/// Returns `Ok(None)` when there is no active search: the term is absent,
/// empty, or shorter than [`FilterConfig::min_search_term_length`]. This is
/// distinct from `Ok(Some(vec![]))`, an active search with no results.
///
/// Errors only when the config selects [`TermSyntax::Pattern`] and the term
/// is not a valid regular expression.
///
/// [`TermSyntax::Pattern`]: crate::TermSyntax::Pattern
///
/// # Example
///
/// ```
/// use jsonsieve::{filter_items, FilterConfig};
/// use serde_json::json;
///
/// let records = vec![
///     json!({"name": "Apple", "color": "red"}),
///     json!({"name": "Banana", "color": "yellow"}),
/// ];
/// let config = FilterConfig::new();
///
/// let results = filter_items(&records, Some("an"), &config).unwrap().unwrap();
/// assert_eq!(results.len(), 1);
///
/// assert!(filter_items(&records, Some("zzz"), &config).unwrap().unwrap().is_empty());
/// assert!(filter_items(&records, None, &config).unwrap().is_none());
/// ```
pub fn filter_items(
    records: &[Value],
    term: Option<&str>,
    config: &FilterConfig,
) -> Result<Option<Vec<FilteredItem>>> {
    let Some(term) = config.active_term(term) else {
        return Ok(None);
    };

    let pattern = SearchPattern::new(term, config.term_syntax)?;
    let matcher = config.matcher_for(records);
    Ok(Some(run(records, &pattern, &matcher)))
}

pub(crate) fn run(
    records: &[Value],
    pattern: &SearchPattern,
    matcher: &PropertyMatcher,
) -> Vec<FilteredItem> {
    let start = Instant::now();
    let results = filter_collection(records, pattern, matcher);
    debug!(
        term = pattern.term(),
        records = records.len(),
        matches = results.len(),
        elapsed_micros = start.elapsed().as_micros() as u64,
        "filter pass"
    );
    results
}
