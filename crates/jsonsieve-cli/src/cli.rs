//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jsonsieve::{FilterConfig, TermSyntax};

/// Filter a JSON array of records the way a live-filter list would.
///
/// Prints the matching records with every occurrence of TERM wrapped in
/// highlight markup, plus each record's title property.
#[derive(Debug, Parser)]
#[command(name = "jsieve")]
#[command(version)]
#[command(about = "Filter a JSON array of records and highlight matches")]
pub struct Cli {
    /// Search term. Terms shorter than --min-length cancel the search.
    pub term: String,

    /// JSON file holding an array of records. Reads stdin when absent or "-".
    pub file: Option<PathBuf>,

    /// Searchable property (repeatable or comma-separated).
    /// Defaults to the keys of the first record.
    #[arg(short, long = "property", value_name = "NAME", value_delimiter = ',')]
    pub properties: Vec<String>,

    /// Property shown as each result's heading
    #[arg(short, long, value_name = "NAME")]
    pub title: Option<String>,

    /// Minimum term length, in characters
    #[arg(short, long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Treat TERM as a regular expression instead of literal text
    #[arg(short, long)]
    pub regex: bool,

    /// JSON file with filter settings; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The filtered projection as a JSON array (`null` when canceled).
    Json,
    /// One block per result, markup turned into terminal text.
    Text,
}

impl Cli {
    /// Applies the command-line flags on top of a base config.
    pub fn apply_to(&self, mut config: FilterConfig) -> FilterConfig {
        if !self.properties.is_empty() {
            config = config.with_search_properties(self.properties.iter().cloned());
        }
        if let Some(title) = &self.title {
            config = config.with_title_property(title.clone());
        }
        if let Some(min_length) = self.min_length {
            config = config.with_min_search_term_length(min_length);
        }
        if self.regex {
            config = config.with_term_syntax(TermSyntax::Pattern);
        }
        config
    }

    /// Returns the default log directive for the verbosity flag.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
