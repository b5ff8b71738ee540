//! Field → column offsets for the published tier-list sheet.
//!
//! The offsets describe one specific spreadsheet layout and are not inferred
//! from the header rows. Column 0 of the export is the sheet's row number;
//! column 8 is unlabelled and column 11 holds the input-voltage range, neither
//! of which is extracted.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub brand: usize,
    /// Series fragments, concatenated in this order.
    pub series: Vec<usize>,
    pub wattage: usize,
    pub tier: usize,
    pub year: usize,
    pub form_factor: usize,
    pub atx_version: usize,
    pub modular: usize,
    pub efficiency: usize,
    /// Primary, secondary and synchronous-rectification topology.
    pub topology: Vec<usize>,
    pub odm: usize,
    pub platform: usize,
    pub notes: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            brand: 1,
            series: vec![2, 3, 4],
            wattage: 5,
            tier: 6,
            year: 7,
            form_factor: 9,
            atx_version: 10,
            modular: 12,
            efficiency: 13,
            topology: vec![14, 15, 16],
            odm: 17,
            platform: 18,
            notes: 19,
        }
    }
}

impl ColumnLayout {
    /// Checks that brand, series, wattage and tier read from distinct columns.
    pub fn validate(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(ModelError::EmptyField { field: "series" });
        }
        let mut seen: Vec<(usize, &'static str)> = Vec::new();
        let required = [("brand", self.brand), ("wattage", self.wattage), ("tier", self.tier)]
            .into_iter()
            .chain(self.series.iter().map(|&c| ("series", c)));
        for (field, column) in required {
            if let Some(&(_, first)) = seen.iter().find(|(c, _)| *c == column) {
                return Err(ModelError::OverlappingColumns {
                    column,
                    first,
                    second: field,
                });
            }
            seen.push((column, field));
        }
        Ok(())
    }
}
