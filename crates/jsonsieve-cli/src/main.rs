//! jsieve - filter a JSON array of records from the command line.
//!
//! A worked example of the jsonsieve engine. It loads a collection, feeds
//! the term through a [`LiveFilter`] exactly as a live-filter widget would,
//! and prints the annotated results.
//!
//! ```text
//! jsieve an fruits.json
//! jsieve --format text -p name,color an fruits.json
//! cat people.json | jsieve --regex '^"a' -t login
//! RUST_LOG=jsonsieve=trace jsieve lyon people.json
//! ```

mod cli;
mod input;
mod output;

use anyhow::Result;
use clap::Parser;
use jsonsieve::{LiveFilter, SearchOutcome};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Format};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());
    run(&cli)
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.apply_to(input::load_config(cli.config.as_deref())?);
    let records = input::load_records(cli.file.as_deref())?;
    let title_property = config.title_property.clone();

    let mut live = LiveFilter::with_items(records, config)?;
    match live.on_search_term_changed(Some(&cli.term))? {
        SearchOutcome::Canceled => info!(term = %cli.term, "search canceled"),
        SearchOutcome::Filtered { matches } => {
            info!(term = %cli.term, matches, records = live.items().len(), "search complete")
        }
    }

    let rendered = match cli.format {
        Format::Json => output::render_json(live.filtered_items())? + "\n",
        Format::Text => output::render_text(live.filtered_items(), &title_property),
    };
    print!("{}", rendered);
    Ok(())
}
