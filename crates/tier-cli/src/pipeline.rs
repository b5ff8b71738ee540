//! File-level glue between the CLI and the library crates.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tier_ingest::{ParseOptions, ParseOutcome, parse_html, read_records};
use tier_map::{AliasIndex, AliasIndexBuilder, MatcherOptions, TierMatcher};
use tier_model::ColumnLayout;
use tracing::{debug, info, warn};

/// Default options, with the layout read from `layout` and the table
/// selector replaced by `selector` when given.
pub fn load_parse_options(layout: Option<&Path>, selector: Option<&str>) -> Result<ParseOptions> {
    let mut options = ParseOptions::default();
    if let Some(path) = layout {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read layout {}", path.display()))?;
        let layout: ColumnLayout = serde_json::from_str(&text)
            .with_context(|| format!("parse layout {}", path.display()))?;
        debug!(path = %path.display(), "column layout loaded");
        options = options.with_layout(layout);
    }
    if let Some(selector) = selector {
        options = options.with_selector(selector);
    }
    Ok(options)
}

/// Parses a saved sheet export.
///
/// A document without the data table yields an empty outcome and a warning;
/// every other parse failure is an error.
pub fn parse_sheet(html_path: &Path, options: &ParseOptions) -> Result<ParseOutcome> {
    let html = fs::read_to_string(html_path)
        .with_context(|| format!("read sheet {}", html_path.display()))?;
    match parse_html(&html, options) {
        Ok(outcome) => Ok(outcome),
        Err(err) if err.is_table_not_found() => {
            warn!(path = %html_path.display(), error = %err, "data table not found, no records extracted");
            Ok(ParseOutcome::default())
        }
        Err(err) => Err(err).with_context(|| format!("parse sheet {}", html_path.display())),
    }
}

pub fn build_index(records_path: &Path) -> Result<AliasIndex> {
    let records = read_records(records_path).context("load records")?;
    let index = AliasIndexBuilder::new().build(&records);
    info!(
        records = records.len(),
        keys = index.len(),
        candidates = index.candidate_count(),
        "alias index ready"
    );
    Ok(index)
}

/// Matcher over the records in `records_path`; `listing` enables the
/// listing-site title rewrites.
pub fn load_matcher(records_path: &Path, listing: bool) -> Result<TierMatcher> {
    let index = build_index(records_path)?;
    let options = if listing {
        MatcherOptions::listing()
    } else {
        MatcherOptions::default()
    };
    TierMatcher::new(index, options).context("build matcher")
}
