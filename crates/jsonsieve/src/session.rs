//! Stateful live-filter controller.
//!
//! [`LiveFilter`] owns a record collection and the current search state, and
//! exposes the triggers a presentation layer drives:
//!
//! | Trigger | Method |
//! |---------|--------|
//! | term typed (after debounce) | [`LiveFilter::on_search_term_changed`] |
//! | search cleared | [`LiveFilter::on_search_canceled`] |
//! | new collection | [`LiveFilter::set_items`] |
//! | result chosen | [`LiveFilter::select`] / [`LiveFilter::select_item`] |
//! | result list closed | [`LiveFilter::dismiss`] |
//!
//! The results are `None` while no search is active, and `Some` (possibly
//! empty) while one is.

use serde_json::Value;
use tracing::debug;

use crate::config::FilterConfig;
use crate::error::Result;
use crate::filter;
use crate::identity::{assign_ids, record_id};
use crate::item::FilteredItem;
use crate::matcher::{record_keys, PropertyMatcher};
use crate::pattern::SearchPattern;

/// Outcome of a search-term change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The term was absent or too short; the search was canceled.
    Canceled,
    /// The collection was filtered.
    Filtered {
        /// Number of matching records.
        matches: usize,
    },
}

/// A record collection with live search state.
///
/// # Example
///
/// ```
/// use jsonsieve::{FilterConfig, LiveFilter, SearchOutcome};
/// use serde_json::json;
///
/// let mut live = LiveFilter::with_items(
///     vec![
///         json!({"name": "Apple", "color": "red"}),
///         json!({"name": "Banana", "color": "yellow"}),
///     ],
///     FilterConfig::new(),
/// )
/// .unwrap();
///
/// let outcome = live.on_search_term_changed(Some("an")).unwrap();
/// assert_eq!(outcome, SearchOutcome::Filtered { matches: 1 });
///
/// let id = live.filtered_items().unwrap()[0].id().unwrap().clone();
/// let original = live.select(&id).unwrap();
/// assert_eq!(original["name"], "Banana");
/// assert!(live.filtered_items().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LiveFilter {
    config: FilterConfig,
    items: Vec<Value>,
    search_properties: Option<Vec<String>>,
    search_term: Option<String>,
    filtered: Option<Vec<FilteredItem>>,
}

impl LiveFilter {
    /// Creates an empty filter.
    pub fn new(config: FilterConfig) -> Self {
        LiveFilter {
            search_properties: config.search_properties.clone(),
            config,
            ..LiveFilter::default()
        }
    }

    /// Creates a filter over `items`.
    pub fn with_items(items: Vec<Value>, config: FilterConfig) -> Result<Self> {
        let mut live = LiveFilter::new(config);
        live.set_items(items)?;
        Ok(live)
    }

    /// Replaces the collection.
    ///
    /// If no searchable properties are configured, and none were resolved
    /// from an earlier collection, the keys of the first record become the
    /// searchable set. This happens before ids are assigned, so a generated
    /// `_id` is never searchable.
    ///
    /// Missing `_id`s are then assigned in place, the current results are
    /// dropped, and the collection is filtered again with the last term.
    pub fn set_items(&mut self, mut items: Vec<Value>) -> Result<()> {
        if self.search_properties.is_none() {
            if let Some(first) = items.first() {
                self.search_properties = Some(record_keys(first));
            }
        }

        assign_ids(&mut items);
        self.items = items;
        self.filtered = None;
        debug!(records = self.items.len(), "collection replaced");

        self.refilter()?;
        Ok(())
    }

    /// Handles a new search term from the input.
    ///
    /// An absent or empty term, or one shorter than the configured minimum,
    /// cancels the search. Otherwise the term is remembered and the whole
    /// collection is filtered with it.
    pub fn on_search_term_changed(&mut self, term: Option<&str>) -> Result<SearchOutcome> {
        let Some(term) = self.config.active_term(term) else {
            debug!("search canceled by term");
            self.on_search_canceled();
            return Ok(SearchOutcome::Canceled);
        };

        // Compile before touching state so a bad pattern leaves it intact.
        let pattern = SearchPattern::new(term, self.config.term_syntax)?;
        self.search_term = Some(term.to_string());
        let matches = self.apply(&pattern);
        Ok(SearchOutcome::Filtered { matches })
    }

    /// Clears the term and the results.
    pub fn on_search_canceled(&mut self) {
        self.search_term = None;
        self.filtered = None;
    }

    /// Closes the result list, keeping the term.
    pub fn dismiss(&mut self) {
        self.filtered = None;
    }

    /// Selects a result by `_id`.
    ///
    /// Returns the original record (never the highlighted projection) and
    /// closes the result list. Returns `None` if no record has that id.
    pub fn select(&mut self, id: &Value) -> Option<&Value> {
        self.filtered = None;
        self.items.iter().find(|item| record_id(item) == Some(id))
    }

    /// Selects a result item, returning its original record.
    ///
    /// Items without an `_id` cannot be traced back and return `None`.
    pub fn select_item(&mut self, item: &FilteredItem) -> Option<&Value> {
        let id = item.id()?.clone();
        self.select(&id)
    }

    /// Returns the original record with the given `_id`.
    pub fn find(&self, id: &Value) -> Option<&Value> {
        self.items.iter().find(|item| record_id(item) == Some(id))
    }

    /// Returns the current results, or `None` when no search is active.
    pub fn filtered_items(&self) -> Option<&[FilteredItem]> {
        self.filtered.as_deref()
    }

    /// Returns `true` while a result list is active.
    pub fn is_filtering(&self) -> bool {
        self.filtered.is_some()
    }

    /// Returns the last accepted search term.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// Returns the collection, with ids assigned.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Returns the searchable properties in effect, if known yet.
    pub fn search_properties(&self) -> Option<&[String]> {
        self.search_properties.as_deref()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    fn refilter(&mut self) -> Result<()> {
        let Some(term) = self.search_term.as_deref() else {
            return Ok(());
        };
        let pattern = SearchPattern::new(term, self.config.term_syntax)?;
        self.apply(&pattern);
        Ok(())
    }

    fn apply(&mut self, pattern: &SearchPattern) -> usize {
        let matcher = self.matcher();
        let results = filter::run(&self.items, pattern, &matcher);
        let matches = results.len();
        self.filtered = Some(results);
        matches
    }

    fn matcher(&self) -> PropertyMatcher {
        PropertyMatcher::new(
            self.search_properties.iter().flatten().cloned(),
            self.config.title_property.clone(),
        )
    }
}
