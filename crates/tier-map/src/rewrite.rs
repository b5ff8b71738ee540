//! Title rewrites applied before normalization.
//!
//! Listing sites abbreviate product names differently from the sheet
//! ("RM850x" vs "RM-x 2021", "850G" vs "850 Gold"). A rewrite table lifts
//! those titles into the sheet's vocabulary.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

/// One case-insensitive regex substitution, applied to the first match only.
///
/// `replacement` uses the `regex` crate syntax (`${1}` for group 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRewrite {
    pub pattern: String,
    pub replacement: String,
}

impl TitleRewrite {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    pub(crate) fn compile(&self) -> Result<CompiledRewrite> {
        let regex = RegexBuilder::new(&self.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| MapError::InvalidRewrite {
                pattern: self.pattern.clone(),
                message: e.to_string(),
            })?;
        Ok(CompiledRewrite {
            regex,
            replacement: self.replacement.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledRewrite {
    regex: Regex,
    replacement: String,
}

impl CompiledRewrite {
    pub(crate) fn apply(&self, title: &str) -> String {
        self.regex
            .replace(title, self.replacement.as_str())
            .into_owned()
    }
}

/// Rewrites for PCPartPicker and Tweakers style titles, in application order.
pub fn listing_rewrites() -> Vec<TitleRewrite> {
    vec![
        TitleRewrite::new(r"(\d+)P Gaming", "${1} Platinum"),
        TitleRewrite::new(r"V(\d+) SFX", r#"V Series "Vanguard" SFX ${1}"#),
        TitleRewrite::new(r"RM(\d+)x", "RMx 2021 ${1}"),
        TitleRewrite::new(r"(\d+)G(\s|$)", "${1} Gold${2}"),
        // First "ATX 3" not followed by ".0"; the following character is carried over.
        TitleRewrite::new(r"ATX 3(?P<rest>$|[^.]|\.$|\.[^0])", "ATX 3.0${rest}"),
        TitleRewrite::new(r"Century II", "Century II Gold ATX 3.1"),
        TitleRewrite::new(r"NZXT C(\d+)\s*\(?2019\)?", "NZXT C Series Gold V1 ${1}"),
        TitleRewrite::new(r"NZXT C(\d+)\s*\(?2022\)?", "NZXT C Series Gold V2 ${1}"),
        TitleRewrite::new(r"NZXT C(\d+)\s*\(?2024\)?", "NZXT C Series Gold ATX 3.1 ${1}"),
        TitleRewrite::new(r"NZXT C\s*\(?2019\)?", "NZXT C Series Gold V1"),
        TitleRewrite::new(r"NZXT C(\d+)", "NZXT C Series Gold ${1}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_all(title: &str) -> String {
        listing_rewrites()
            .iter()
            .map(|r| r.compile().unwrap())
            .fold(title.to_string(), |acc, r| r.apply(&acc))
    }

    #[test]
    fn listing_table_compiles() {
        for rewrite in listing_rewrites() {
            assert!(rewrite.compile().is_ok(), "{}", rewrite.pattern);
        }
    }

    #[test]
    fn expands_abbreviations() {
        assert_eq!(apply_all("Corsair RM850x"), "Corsair RMx 2021 850");
        assert_eq!(apply_all("MSI MAG A850G"), "MSI MAG A850 Gold");
        assert_eq!(apply_all("Seasonic 1000P Gaming"), "Seasonic 1000 Platinum");
        assert_eq!(apply_all("NZXT C850 (2022)"), "NZXT C Series Gold V2 850");
    }

    #[test]
    fn atx_version_is_pinned() {
        assert_eq!(apply_all("Foo ATX 3 850W"), "Foo ATX 3.0 850W");
        assert_eq!(apply_all("Foo ATX 3.0 850W"), "Foo ATX 3.0 850W");
    }

    #[test]
    fn versioned_atx_is_skipped_for_a_later_bare_one() {
        assert_eq!(apply_all("X ATX 3.0 Y ATX 3"), "X ATX 3.0 Y ATX 3.0");
        assert_eq!(apply_all("Foo ATX 3.1 850W"), "Foo ATX 3.0.1 850W");
        assert_eq!(apply_all("Foo ATX 3"), "Foo ATX 3.0");
    }

    #[test]
    fn only_first_match_is_replaced() {
        let rewrite = TitleRewrite::new("gold", "Gold!").compile().unwrap();
        assert_eq!(rewrite.apply("gold GOLD"), "Gold! GOLD");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(apply_all("corsair rm750X"), "corsair RMx 2021 750");
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = TitleRewrite::new("(unclosed", "x").compile().unwrap_err();
        assert!(matches!(err, MapError::InvalidRewrite { .. }));
        assert!(err.to_string().contains("(unclosed"));
    }
}
