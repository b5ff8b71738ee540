//! Catalog records and the per-alias match candidates derived from them.

use serde::{Deserialize, Serialize};

use crate::tier::TierLabel;

/// One row of the tier list.
///
/// `brand`, `series` and `wattage` are kept exactly as they appear in the
/// sheet; alias splitting happens when the index is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Raw brand cell, e.g. `"FSP (Fortron/Sparkle)"` or `"Antec/Atom"`.
    pub brand: String,
    /// Cleaned series text, possibly several aliases joined by `/`.
    pub series: String,
    /// Wattage constraint: `"650W"`, `"550/650W"`, `"550-850W"`, `"All PSUs"`.
    #[serde(default)]
    pub wattage: Option<String>,
    /// Tier label such as `"A"`, `"B+"` or `"C-"`.
    pub tier: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub form_factor: Option<String>,
    #[serde(default)]
    pub atx_version: Option<String>,
    #[serde(default)]
    pub modular: Option<String>,
    #[serde(default)]
    pub efficiency: Option<String>,
    #[serde(default)]
    pub topology: Option<String>,
    #[serde(default)]
    pub odm: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ProductRecord {
    /// Creates a record with only the fields the matcher needs.
    pub fn new(
        brand: impl Into<String>,
        series: impl Into<String>,
        wattage: impl Into<String>,
        tier: impl Into<String>,
    ) -> Self {
        let wattage = wattage.into();
        Self {
            brand: brand.into(),
            series: series.into(),
            wattage: (!wattage.is_empty()).then_some(wattage),
            tier: tier.into(),
            year: None,
            form_factor: None,
            atx_version: None,
            modular: None,
            efficiency: None,
            topology: None,
            odm: None,
            platform: None,
            notes: None,
        }
    }

    pub fn tier(&self) -> TierLabel<'_> {
        TierLabel::new(&self.tier)
    }
}

/// A record paired with one of its series aliases.
///
/// A record whose series reads `"RM-x 2018 / RM-x White"` yields two
/// candidates, one per alias. On the wire the record fields are flattened
/// and the alias is stored as `matchSeries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    #[serde(flatten)]
    pub record: ProductRecord,
    #[serde(rename = "matchSeries")]
    pub match_series: String,
}

impl MatchCandidate {
    pub fn new(record: ProductRecord, match_series: impl Into<String>) -> Self {
        Self {
            record,
            match_series: match_series.into(),
        }
    }

    pub fn tier(&self) -> TierLabel<'_> {
        self.record.tier()
    }

    pub fn wattage(&self) -> Option<&str> {
        self.record.wattage.as_deref()
    }

    /// Alias length in characters; the index orders buckets by this.
    pub fn alias_len(&self) -> usize {
        self.match_series.chars().count()
    }
}
