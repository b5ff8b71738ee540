//! Typed record extraction from a reconstructed grid.

use std::sync::LazyLock;

use regex::Regex;
use tier_model::{ColumnLayout, Efficiency, ProductRecord};
use tracing::{debug, trace};

use crate::grid::Grid;
use crate::options::ParseOptions;

/// Parenthesised notes such as `("Gen 5")` or `(ATX 3.1)`; listing titles rarely carry them.
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)").expect("Invalid parenthetical regex"));

const TOPOLOGY_SEPARATOR: &str = " + ";

/// Records read from a grid plus bookkeeping for the caller's log line.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<ProductRecord>,
    /// First row considered as data.
    pub start_row: usize,
    /// Rows at or after `start_row` that did not produce a record.
    pub skipped_rows: usize,
}

/// Joins series fragments into one series name.
///
/// Blank fragments are dropped, consecutive repeats (left by merged cells)
/// collapse to one, leading/trailing `-` and spaces are trimmed, and
/// parenthesised content is removed.
pub fn clean_series<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for fragment in fragments {
        if fragment.trim().is_empty() || parts.last() == Some(&fragment) {
            continue;
        }
        parts.push(fragment);
    }
    let joined = parts.join(" ");
    let trimmed = joined.trim_matches(|c: char| c == '-' || c == ' ');
    PARENTHETICAL.replace_all(trimmed, "").trim().to_string()
}

/// Reads one record per qualifying row, starting at the sentinel row.
pub fn extract_records(grid: &Grid, options: &ParseOptions) -> Extraction {
    let start_row = find_start_row(grid, options);
    let mut extraction = Extraction {
        start_row,
        ..Extraction::default()
    };

    for row in start_row..grid.height() {
        match read_row(grid, row, options) {
            Some(record) => extraction.records.push(record),
            None => extraction.skipped_rows += 1,
        }
    }

    debug!(
        start_row,
        records = extraction.records.len(),
        skipped = extraction.skipped_rows,
        "extracted records"
    );
    extraction
}

fn find_start_row(grid: &Grid, options: &ParseOptions) -> usize {
    let layout = &options.layout;
    if grid.width() > layout.tier {
        let sentinel = (0..grid.height())
            .find(|&row| grid.get(row, layout.brand) == Some(options.sentinel_brand.as_str()));
        if let Some(row) = sentinel {
            return row;
        }
    }
    debug!(
        sentinel = %options.sentinel_brand,
        fallback = options.fallback_start_row,
        "sentinel brand not found, using fallback start row"
    );
    options.fallback_start_row
}

fn read_row(grid: &Grid, row: usize, options: &ParseOptions) -> Option<ProductRecord> {
    let layout = &options.layout;
    if grid.populated(row) < options.min_populated_columns {
        trace!(row, "skipping sparse row");
        return None;
    }
    let tier = grid.non_empty(row, layout.tier)?;
    if tier == options.tier_header {
        trace!(row, "skipping repeated header row");
        return None;
    }
    let brand = grid.non_empty(row, layout.brand)?;

    let series = clean_series(layout.series.iter().filter_map(|&col| grid.get(row, col)));
    let field = |col: usize| grid.non_empty(row, col).map(str::to_string);

    Some(ProductRecord {
        brand: brand.to_string(),
        series,
        wattage: field(layout.wattage),
        tier: tier.to_string(),
        year: field(layout.year),
        form_factor: field(layout.form_factor),
        atx_version: field(layout.atx_version),
        modular: field(layout.modular),
        efficiency: grid
            .non_empty(row, layout.efficiency)
            .map(Efficiency::describe),
        topology: topology(grid, row, layout),
        odm: field(layout.odm),
        platform: field(layout.platform),
        notes: field(layout.notes),
    })
}

fn topology(grid: &Grid, row: usize, layout: &ColumnLayout) -> Option<String> {
    let parts: Vec<&str> = layout
        .topology
        .iter()
        .filter_map(|&col| grid.non_empty(row, col))
        .collect();
    (!parts.is_empty()).then(|| parts.join(TOPOLOGY_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn test_clean_series_joins_and_dedupes() {
        assert_eq!(clean_series(["RM-x", "RM-x", "2018"]), "RM-x 2018");
        assert_eq!(clean_series(["Focus", "", "GX"]), "Focus GX");
        assert_eq!(clean_series(["A", "B", "A"]), "A B A");
    }

    #[test]
    fn test_clean_series_strips_parentheses_and_dashes() {
        assert_eq!(clean_series(["RM-e 2023 (\"Gen 5\")"]), "RM-e 2023");
        assert_eq!(clean_series(["SF Platinum 2024", "(ATX 3.1)"]), "SF Platinum 2024");
        assert_eq!(clean_series(["- Core BBS-S -"]), "Core BBS-S");
        assert_eq!(clean_series(["Focus GX (OneSeasonic)", "v2"]), "Focus GX v2");
    }

    #[test]
    fn test_clean_series_empty() {
        assert_eq!(clean_series(Vec::<&str>::new()), "");
        assert_eq!(clean_series(["  ", ""]), "");
    }

    fn data_row(brand: &str, series: &str, wattage: &str, tier: &str) -> Vec<Cell> {
        let mut cells = vec![
            Cell::new("n"),
            Cell::new(brand),
            Cell::spanning(series, 1, 3),
            Cell::new(wattage),
            Cell::new(tier),
        ];
        cells.extend((7..20).map(|c| Cell::new(format!("m{c}"))));
        cells
    }

    #[test]
    fn test_start_row_falls_back_without_sentinel() {
        let rows: Vec<Vec<Cell>> = (0..6)
            .map(|i| data_row("Acme", &format!("S{i}"), "500W", "C"))
            .collect();
        let grid = Grid::build(&rows, 10);
        let extraction = extract_records(&grid, &ParseOptions::default());
        assert_eq!(extraction.start_row, 4);
        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.records[0].series, "S4");
    }

    #[test]
    fn test_metadata_columns() {
        let mut row = data_row("1st Player", "NGDP", "650-850W", "A-");
        row[11] = Cell::new("G");
        row[13] = Cell::new("");
        let grid = Grid::build(&[row], 10);
        let extraction = extract_records(&grid, &ParseOptions::default());
        let record = &extraction.records[0];
        assert_eq!(extraction.start_row, 0);
        assert_eq!(record.year.as_deref(), Some("m7"));
        assert_eq!(record.form_factor.as_deref(), Some("m9"));
        assert_eq!(record.efficiency.as_deref(), Some("80+ Gold"));
        assert_eq!(record.topology.as_deref(), Some("m14 + m16"));
        assert_eq!(record.notes.as_deref(), Some("m19"));
    }
}
