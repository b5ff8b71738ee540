//! Data model for the PSU tier list.
//!
//! These types are the interchange format between the table parser
//! (`tier-ingest`) and the alias index / matcher (`tier-map`). They carry no
//! behaviour beyond small helpers and serialize to the same JSON shape the
//! browser consumer reads.

pub mod efficiency;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod record;
pub mod tier;

pub use efficiency::Efficiency;
pub use error::{ModelError, Result};
pub use layout::ColumnLayout;
pub use normalize::normalize_key;
pub use record::{MatchCandidate, ProductRecord};
pub use tier::{TierLabel, TierModifier};
