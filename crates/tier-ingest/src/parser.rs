//! Document → records pipeline.

use scraper::Html;
use tier_model::ProductRecord;
use tracing::{debug, info, info_span};

use crate::error::Result;
use crate::extract::extract_records;
use crate::grid::Grid;
use crate::html::{collect_cells, find_table};
use crate::options::ParseOptions;

/// Result of parsing one document.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<ProductRecord>,
    pub start_row: usize,
    pub skipped_rows: usize,
    pub grid_width: usize,
    pub grid_height: usize,
}

/// Parses raw HTML and extracts tier records from its data table.
pub fn parse_html(html: &str, options: &ParseOptions) -> Result<ParseOutcome> {
    let document = Html::parse_document(html);
    parse_document(&document, options)
}

/// Extracts tier records from an already parsed document.
///
/// # Errors
///
/// Returns [`IngestError::TableNotFound`](crate::IngestError::TableNotFound)
/// when no element matches the table selector. Malformed rows never fail the
/// parse; they are counted in [`ParseOutcome::skipped_rows`].
pub fn parse_document(document: &Html, options: &ParseOptions) -> Result<ParseOutcome> {
    let span = info_span!("parse_table", selector = %options.table_selector);
    let _guard = span.enter();

    options.layout.validate()?;
    let table = find_table(document, &options.table_selector)?;
    let rows = collect_cells(table);
    let grid = Grid::build(&rows, options.header_sample_rows);
    debug!(
        rows = grid.height(),
        columns = grid.width(),
        "reconstructed grid"
    );

    let extraction = extract_records(&grid, options);
    info!(
        records = extraction.records.len(),
        skipped = extraction.skipped_rows,
        "parsed tier table"
    );

    Ok(ParseOutcome {
        records: extraction.records,
        start_row: extraction.start_row,
        skipped_rows: extraction.skipped_rows,
        grid_width: grid.width(),
        grid_height: grid.height(),
    })
}
