use serde::{Deserialize, Serialize};
use tier_model::ColumnLayout;

/// Settings for locating the data table and extracting records from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// CSS selector of the data table (Google Sheets exports use `table.waffle`).
    pub table_selector: String,
    /// Rows sampled when estimating the grid width.
    pub header_sample_rows: usize,
    /// Brand value of the first data row.
    pub sentinel_brand: String,
    /// Start row used when the sentinel brand is absent.
    pub fallback_start_row: usize,
    /// Rows with fewer non-empty slots are skipped.
    pub min_populated_columns: usize,
    /// Header text of the tier column; rows repeating it are skipped.
    pub tier_header: String,
    pub layout: ColumnLayout,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            table_selector: "table.waffle".to_string(),
            header_sample_rows: 10,
            sentinel_brand: "1st Player".to_string(),
            fallback_start_row: 4,
            min_populated_columns: 7,
            tier_header: "Tier".to_string(),
            layout: ColumnLayout::default(),
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.table_selector = selector.into();
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }
}
