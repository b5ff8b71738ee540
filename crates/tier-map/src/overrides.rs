//! Extra brand keys that tokenizing the brand cell cannot produce.

use serde::{Deserialize, Serialize};

/// Adds `aliases` to every record whose raw brand contains `trigger`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandOverride {
    /// Case-sensitive substring of the raw brand cell.
    pub trigger: String,
    /// Already-normalized keys.
    pub aliases: Vec<String>,
}

impl BrandOverride {
    pub fn new<I, S>(trigger: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            trigger: trigger.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandOverrides(Vec<BrandOverride>);

impl BrandOverrides {
    pub fn new(overrides: Vec<BrandOverride>) -> Self {
        Self(overrides)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Aliases of every override triggered by `raw_brand`.
    pub fn aliases_for<'a>(&'a self, raw_brand: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |o| raw_brand.contains(o.trigger.as_str()))
            .flat_map(|o| o.aliases.iter().map(String::as_str))
    }
}

impl Default for BrandOverrides {
    /// Listing sites write FSP as "FSP Group", which no sheet cell contains.
    fn default() -> Self {
        Self::new(vec![
            BrandOverride::new("1st Player", ["1stplayer"]),
            BrandOverride::new("FSP", ["fsp", "fspgroup"]),
        ])
    }
}
