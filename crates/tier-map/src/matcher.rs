//! Title to tier lookup against an [`AliasIndex`].

use std::collections::BTreeSet;

use tier_model::{MatchCandidate, normalize_key};
use tracing::{debug, trace};

use crate::error::Result;
use crate::index::AliasIndex;
use crate::rewrite::{CompiledRewrite, TitleRewrite, listing_rewrites};
use crate::rules::MatchRule;
use crate::wattage::WattageConstraint;

/// Matcher behaviour beyond the fixed rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Applied to the raw title in order, before normalization.
    pub rewrites: Vec<TitleRewrite>,
    /// Keys that never count as a brand match.
    pub ignored_brand_keys: BTreeSet<String>,
}

impl MatcherOptions {
    /// Options for titles scraped from listing sites.
    ///
    /// `gaming` is ignored as a brand key because it appears in product names
    /// far more often than as a brand.
    pub fn listing() -> Self {
        Self {
            rewrites: listing_rewrites(),
            ignored_brand_keys: BTreeSet::from(["gaming".to_string()]),
        }
    }
}

/// How a title was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierMatch<'a> {
    pub tier: &'a str,
    pub brand_key: &'a str,
    pub candidate: &'a MatchCandidate,
    /// Position of `candidate` in its brand bucket.
    pub position: usize,
    pub rule: MatchRule,
}

/// Read-only query over an [`AliasIndex`]; safe to share across threads.
#[derive(Debug)]
pub struct TierMatcher {
    index: AliasIndex,
    rewrites: Vec<CompiledRewrite>,
    ignored_brand_keys: BTreeSet<String>,
}

impl TierMatcher {
    /// Compiles the rewrite table; fails on an invalid pattern.
    pub fn new(index: AliasIndex, options: MatcherOptions) -> Result<Self> {
        let rewrites = options
            .rewrites
            .iter()
            .map(TitleRewrite::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            index,
            rewrites,
            ignored_brand_keys: options.ignored_brand_keys,
        })
    }

    /// Matcher with no rewrites and no ignored keys.
    pub fn with_defaults(index: AliasIndex) -> Self {
        Self {
            index,
            rewrites: Vec::new(),
            ignored_brand_keys: BTreeSet::new(),
        }
    }

    pub fn find_tier(&self, title: &str, wattage: Option<u32>) -> Option<&str> {
        self.find_match(title, wattage).map(|m| m.tier)
    }

    /// Finds the first candidate, longest alias first, that passes an alias
    /// rule and the wattage check. `wattage` of `None` or `0` means unknown.
    pub fn find_match(&self, title: &str, wattage: Option<u32>) -> Option<TierMatch<'_>> {
        let wattage = wattage.filter(|&w| w > 0);
        let rewritten = self
            .rewrites
            .iter()
            .fold(title.to_string(), |acc, rewrite| rewrite.apply(&acc));
        let normalized = normalize_key(&rewritten);

        let Some((brand_key, candidates)) = self.brand_bucket(&normalized) else {
            debug!(title, "no brand key in title");
            return None;
        };

        let mut clean = normalized.replacen(brand_key, "", 1);
        if let Some(watts) = wattage {
            clean = clean.replacen(&watts.to_string(), "", 1);
        }
        trace!(title, brand_key, clean = %clean, "brand key selected");

        for (position, candidate) in candidates.iter().enumerate() {
            let Some(rule) = MatchRule::first_accepting(&candidate.match_series, &clean) else {
                continue;
            };
            if !WattageConstraint::parse(candidate.wattage().unwrap_or_default()).accepts(wattage) {
                trace!(alias = %candidate.match_series, "alias matched, wattage rejected");
                continue;
            }
            trace!(
                brand_key,
                alias = %candidate.match_series,
                %rule,
                tier = %candidate.record.tier,
                "candidate matched"
            );
            return Some(TierMatch {
                tier: &candidate.record.tier,
                brand_key,
                candidate,
                position,
                rule,
            });
        }
        debug!(title, brand_key, "no candidate passed");
        None
    }

    /// Longest indexed key contained in `normalized`; ties go to the
    /// lexicographically smallest key.
    fn brand_bucket(&self, normalized: &str) -> Option<(&str, &[MatchCandidate])> {
        let mut best: Option<(&str, &[MatchCandidate])> = None;
        for (key, candidates) in self.index.iter() {
            if self.ignored_brand_keys.contains(key) || !normalized.contains(key) {
                continue;
            }
            if best.is_none_or(|(b, _)| key.len() > b.len()) {
                best = Some((key, candidates));
            }
        }
        best
    }
}
