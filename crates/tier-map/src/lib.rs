//! Alias index and tier matching.
//!
//! [`AliasIndexBuilder`] folds [`ProductRecord`](tier_model::ProductRecord)s
//! into an immutable [`AliasIndex`] keyed by normalized brand aliases.
//! [`TierMatcher`] answers "which tier is this listing title?" against that
//! index using three fixed alias rules gated by a wattage check. Nothing is
//! scored: the first candidate, in longest-alias-first order, that passes wins.
//!
//! ```ignore
//! use tier_map::{AliasIndexBuilder, TierMatcher};
//!
//! let index = AliasIndexBuilder::new().build(&records);
//! let matcher = TierMatcher::with_defaults(index);
//! assert_eq!(matcher.find_tier("Corsair RM850x (2018)", Some(850)), Some("A"));
//! ```

#![deny(unsafe_code)]

mod error;
mod export;
mod index;
mod matcher;
mod overrides;
mod rewrite;
mod rules;
mod wattage;

pub use error::{MapError, Result};
pub use export::escape_for_script;
pub use index::{AliasIndex, AliasIndexBuilder, series_aliases};
pub use matcher::{MatcherOptions, TierMatch, TierMatcher};
pub use overrides::{BrandOverride, BrandOverrides};
pub use rewrite::{TitleRewrite, listing_rewrites};
pub use rules::{EFFICIENCY_WORDS, MatchRule, NOISE_TOKENS};
pub use wattage::WattageConstraint;
