//! Brand-keyed index of series aliases.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tier_model::{MatchCandidate, ProductRecord, normalize_key};
use tracing::{debug, info_span};

use crate::error::Result;
use crate::export::escape_for_script;
use crate::overrides::BrandOverrides;

/// Immutable map from normalized brand key to its candidates.
///
/// Every bucket is ordered by alias length, longest first; equal lengths
/// keep record order. Keys iterate lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasIndex {
    buckets: BTreeMap<String, Vec<MatchCandidate>>,
}

impl AliasIndex {
    pub fn get(&self, key: &str) -> Option<&[MatchCandidate]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MatchCandidate])> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of brand keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total entries across all buckets.
    pub fn candidate_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// JSON safe to embed verbatim in a `<script>` body.
    pub fn to_script_safe_json(&self) -> Result<String> {
        self.to_json().map(|json| escape_for_script(&json))
    }

    /// Reads an index written by [`to_json`](Self::to_json).
    ///
    /// Buckets are re-sorted, and empty keys and empty buckets dropped, so
    /// hand-edited input upholds the same guarantees as a built index.
    pub fn from_json(json: &str) -> Result<Self> {
        let buckets: BTreeMap<String, Vec<MatchCandidate>> = serde_json::from_str(json)?;
        Ok(Self::from_buckets(buckets))
    }

    fn from_buckets(mut buckets: BTreeMap<String, Vec<MatchCandidate>>) -> Self {
        buckets.retain(|key, bucket| !key.is_empty() && !bucket.is_empty());
        for bucket in buckets.values_mut() {
            bucket.sort_by_key(|c| Reverse(c.alias_len()));
        }
        Self { buckets }
    }
}

impl<'de> Deserialize<'de> for AliasIndex {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        BTreeMap::deserialize(deserializer).map(Self::from_buckets)
    }
}

/// Series aliases of one record: the series split on `/`, each fragment trimmed.
///
/// Empty fragments are kept; an empty alias matches any title of its brand.
pub fn series_aliases(series: &str) -> impl Iterator<Item = &str> {
    series.split('/').map(str::trim)
}

/// Builds an [`AliasIndex`] from parsed records.
#[derive(Debug, Clone, Default)]
pub struct AliasIndexBuilder {
    overrides: BrandOverrides,
}

impl AliasIndexBuilder {
    /// Builder with the default brand override table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(mut self, overrides: BrandOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Keys a raw brand cell is indexed under.
    ///
    /// `"FSP (Fortron/Sparkle)"` yields `fspfortronsparkle`, `fsp`, `fortron`,
    /// `sparkle` and `fspgroup`.
    pub fn brand_keys(&self, raw_brand: &str) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        keys.insert(normalize_key(raw_brand));

        let spaced = raw_brand.replace(['/', '(', ')'], " ");
        keys.extend(
            spaced
                .split_whitespace()
                .filter(|token| token.chars().count() > 1)
                .map(normalize_key),
        );
        keys.extend(self.overrides.aliases_for(raw_brand).map(str::to_owned));

        keys.retain(|key| !key.is_empty());
        keys
    }

    /// Folds `records` into an index. Building the same records twice gives
    /// equal indexes.
    pub fn build(&self, records: &[ProductRecord]) -> AliasIndex {
        let _span = info_span!("build_index", records = records.len()).entered();

        let buckets = records.iter().fold(
            BTreeMap::<String, Vec<MatchCandidate>>::new(),
            |mut buckets, record| {
                let candidates: Vec<MatchCandidate> = series_aliases(&record.series)
                    .map(|alias| MatchCandidate::new(record.clone(), alias))
                    .collect();
                for key in self.brand_keys(&record.brand) {
                    buckets
                        .entry(key)
                        .or_default()
                        .extend(candidates.iter().cloned());
                }
                buckets
            },
        );

        let index = AliasIndex::from_buckets(buckets);
        debug!(
            keys = index.len(),
            candidates = index.candidate_count(),
            "alias index built"
        );
        index
    }
}
