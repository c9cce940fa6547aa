//! jsonsieve - Live-filter engine for JSON record collections.
//!
//! jsonsieve is the logic behind a "filter as you type" list. Given a
//! collection of JSON records and a search term it decides which records
//! match, which of their properties matched, and renders each match for
//! display with the matching text wrapped in highlight markup. It provides:
//!
//! - Stable `_id` assignment so results can be traced back to their records
//! - Case-insensitive substring matching over chosen properties
//! - Inline HTML rendering of non-string values (objects, arrays, numbers)
//! - `<span class="highlight">` markup around every occurrence
//! - A stateful [`LiveFilter`] driven by term, collection and selection events
//!
//! # Quick Start
//!
//! ```rust
//! use jsonsieve::{filter_items, FilterConfig};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"name": "Apple", "color": "red"}),
//!     json!({"name": "Banana", "color": "yellow"}),
//! ];
//!
//! let config = FilterConfig::new().with_search_properties(["name", "color"]);
//! let results = filter_items(&records, Some("an"), &config).unwrap().unwrap();
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(
//!     results[0].get("name"),
//!     Some(r#"B<span class="highlight">an</span><span class="highlight">an</span>a"#)
//! );
//! assert!(!results[0].contains("color"));
//! ```
//!
//! # Matching Semantics
//!
//! ```text
//! item(record) = Some(projection)  if any searchable, truthy property
//!                                  contains the term (case-insensitive,
//!                                  tested on the value's compact JSON)
//!              = None              otherwise
//!
//! projection   = _id (raw) + matched properties (highlighted)
//!              + title property (always, highlighted where it matches)
//! ```
//!
//! - Falsy values (`null`, `false`, `0`, `""`) never match.
//! - Results keep the collection's order; nothing is ranked or cached.
//! - No term means no filter (`None`), which differs from a filter with
//!   no results (`Some(vec![])`).
//!
//! # Term Syntax
//!
//! | [`TermSyntax`] | Behavior |
//! |----------------|----------|
//! | `Literal` (default) | Term characters match themselves, `.` and `(` included |
//! | `Pattern` | Term is a regular expression; invalid ones are an error |

mod config;
mod error;
mod filter;
mod highlight;
mod identity;
mod item;
mod matcher;
mod pattern;
mod render;
mod session;
mod value;

// Re-export public API
pub use config::FilterConfig;
pub use error::{Result, SieveError};
pub use filter::{filter_collection, filter_items};
pub use highlight::{highlight, wrap, HIGHLIGHT_CLASS};
pub use identity::{assign_ids, assign_ids_with, has_id, record_id, ID_FIELD};
pub use item::FilteredItem;
pub use matcher::{record_keys, PropertyMatcher, DEFAULT_TITLE_PROPERTY};
pub use pattern::{SearchPattern, TermSyntax};
pub use render::{prettify, render_value};
pub use session::{LiveFilter, SearchOutcome};
pub use value::{
    is_truthy, kind_name, records_from_json, records_from_value, search_text, title_text,
};
