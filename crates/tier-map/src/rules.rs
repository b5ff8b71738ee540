//! The three alias tests, in priority order.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tier_model::normalize_key;

/// Alias tokens ignored by the tokenized rule; listing titles often omit them.
pub const NOISE_TOKENS: &[&str] = &["modular", "non", "full", "mod", "semi", "series"];

/// Efficiency words removed by the fallback rule.
pub const EFFICIENCY_WORDS: &[&str] = &["gold", "bronze", "platinum", "titanium", "silver", "white"];

static EFFICIENCY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("({})", EFFICIENCY_WORDS.join("|"))).expect("Invalid efficiency regex")
});

/// Minimum length of a de-noised alias before the fallback rule may use it.
const MIN_FALLBACK_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRule {
    /// The normalized alias is a substring of the clean title.
    Exact,
    /// Every meaningful alias token appears in the clean title, in any order.
    Tokens,
    /// The alias with efficiency words removed is a substring of the clean title.
    WithoutEfficiency,
}

impl MatchRule {
    /// Rules in the order they are tried for each candidate.
    pub const PRIORITY: [MatchRule; 3] = [Self::Exact, Self::Tokens, Self::WithoutEfficiency];

    /// Whether `alias` (raw series alias) matches `clean_title` (normalized,
    /// brand and wattage removed) under this rule.
    pub fn accepts(self, alias: &str, clean_title: &str) -> bool {
        match self {
            Self::Exact => clean_title.contains(&normalize_key(alias)),
            Self::Tokens => {
                let tokens = alias_tokens(alias);
                tokens.len() > 1 && tokens.iter().all(|t| clean_title.contains(t.as_str()))
            }
            Self::WithoutEfficiency => {
                let stripped = strip_efficiency(&normalize_key(alias));
                stripped.len() >= MIN_FALLBACK_LEN && clean_title.contains(&stripped)
            }
        }
    }

    /// First rule in priority order that accepts the alias.
    pub fn first_accepting(alias: &str, clean_title: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|rule| rule.accepts(alias, clean_title))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Tokens => "tokens",
            Self::WithoutEfficiency => "without-efficiency",
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alias split on whitespace, `-` and `/`, normalized, noise removed.
fn alias_tokens(alias: &str) -> Vec<String> {
    alias
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '/')
        .map(normalize_key)
        .filter(|t| !t.is_empty() && !NOISE_TOKENS.contains(&t.as_str()))
        .collect()
}

fn strip_efficiency(normalized: &str) -> String {
    EFFICIENCY_PATTERN.replace_all(normalized, "").into_owned()
}
