//! Command-line front end: load a catalog snapshot, then analyze a selection
//! or search for products. Output is JSON.

pub mod config;

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};

use skinmatch_catalog::{Catalog, load_catalog_str};
use skinmatch_compatibility::Selection;

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Analyze the named products, in the given order.
    Analyze(Vec<String>),
    /// Suggest products whose name or category contains the term.
    Search(String),
}

impl Command {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        match args.next().as_deref() {
            Some("analyze") => {
                let names: Vec<String> = args.collect();
                if names.len() < 2 {
                    bail!("analyze needs at least two product names");
                }
                Ok(Command::Analyze(names))
            }
            Some("search") => {
                let term = args.collect::<Vec<_>>().join(" ");
                Ok(Command::Search(term))
            }
            Some(other) => bail!("unknown command `{other}` (expected `analyze` or `search`)"),
            None => bail!("usage: skinmatch analyze <name> <name>... | skinmatch search <term>"),
        }
    }
}

/// Load the configured catalog and execute `command`.
pub fn run(config: &Config, command: &Command) -> Result<Value> {
    let json = std::fs::read_to_string(&config.catalog_path)
        .with_context(|| format!("reading catalog {}", config.catalog_path.display()))?;
    let catalog = load_catalog_str(&json)
        .with_context(|| format!("loading catalog {}", config.catalog_path.display()))?;

    execute(&catalog, command, config.search_limit)
}

/// Execute `command` against an already-loaded catalog.
pub fn execute(catalog: &Catalog, command: &Command, search_limit: usize) -> Result<Value> {
    match command {
        Command::Analyze(names) => {
            let mut selection = Selection::new();
            for name in names {
                let product = catalog
                    .find_by_name(name)
                    .with_context(|| format!("unknown product `{name}`"))?;
                selection.add(product.clone());
            }

            let Some(result) = selection.analysis() else {
                bail!("select at least two distinct products");
            };
            tracing::info!(
                products = selection.len(),
                conflicts = result.conflict_count(),
                "analysis complete"
            );
            Ok(serde_json::to_value(&result)?)
        }
        Command::Search(term) => {
            let hits = catalog.search(term, &[], search_limit);
            Ok(json!({ "term": term, "products": hits }))
        }
    }
}
