//! Wattage constraint strings from the sheet's wattage column.

use tracing::debug;

/// Sentinel the sheet uses for series rated regardless of wattage.
pub const ALL_WATTAGES: &str = "All PSUs";

/// A list entry accepts wattages closer than this.
const LIST_TOLERANCE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WattageConstraint {
    /// No constraint, or the "All PSUs" sentinel.
    Any,
    /// Inclusive range, from strings like `"550-850W"`.
    Range { min: u32, max: u32 },
    /// Discrete values, from strings like `"650W"` or `"550/650W"`.
    List(Vec<u32>),
    /// Nothing numeric could be read; accepts every wattage.
    Unparsable,
}

impl WattageConstraint {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_WATTAGES {
            return Self::Any;
        }
        let cleaned: String = raw
            .to_lowercase()
            .replacen('w', "", 1)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let parts: Vec<&str> = cleaned.split(['/', '-']).collect();

        let constraint = if raw.contains('-') {
            let min = parts.first().and_then(|p| leading_number(p));
            let max = parts.last().and_then(|p| leading_number(p));
            match (min, max) {
                (Some(min), Some(max)) => Self::Range { min, max },
                _ => Self::Unparsable,
            }
        } else {
            let values: Vec<u32> = parts.iter().filter_map(|p| leading_number(p)).collect();
            if values.is_empty() {
                Self::Unparsable
            } else {
                Self::List(values)
            }
        };
        if constraint == Self::Unparsable {
            debug!(wattage = raw, "unparsable wattage constraint, accepting all");
        }
        constraint
    }

    /// Tests a product wattage; `None` and `0` mean unknown and always pass.
    pub fn accepts(&self, watts: Option<u32>) -> bool {
        let Some(watts) = watts.filter(|&w| w > 0) else {
            return true;
        };
        match self {
            Self::Any | Self::Unparsable => true,
            Self::Range { min, max } => (*min..=*max).contains(&watts),
            Self::List(values) => values.iter().any(|v| v.abs_diff(watts) < LIST_TOLERANCE),
        }
    }
}

/// Leading run of ASCII digits, so `"850a"` reads as 850 and `"x"` as nothing.
fn leading_number(token: &str) -> Option<u32> {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shapes() {
        assert_eq!(WattageConstraint::parse(""), WattageConstraint::Any);
        assert_eq!(WattageConstraint::parse("All PSUs"), WattageConstraint::Any);
        assert_eq!(
            WattageConstraint::parse("550-750W"),
            WattageConstraint::Range { min: 550, max: 750 }
        );
        assert_eq!(
            WattageConstraint::parse("550 / 650W"),
            WattageConstraint::List(vec![550, 650])
        );
        assert_eq!(
            WattageConstraint::parse("450-550-650W"),
            WattageConstraint::Range { min: 450, max: 650 }
        );
    }

    #[test]
    fn range_is_inclusive() {
        let range = WattageConstraint::parse("550-750W");
        assert!(range.accepts(Some(550)));
        assert!(range.accepts(Some(600)));
        assert!(range.accepts(Some(750)));
        assert!(!range.accepts(Some(800)));
        assert!(!range.accepts(Some(500)));
    }

    #[test]
    fn list_uses_tolerance() {
        let list = WattageConstraint::parse("550/650");
        assert!(list.accepts(Some(645)));
        assert!(list.accepts(Some(559)));
        assert!(!list.accepts(Some(660)));
        assert!(!list.accepts(Some(700)));
    }

    #[test]
    fn unknown_wattage_always_passes() {
        let list = WattageConstraint::parse("650W");
        assert!(list.accepts(None));
        assert!(list.accepts(Some(0)));
    }

    #[test]
    fn malformed_strings_degrade_to_accepting() {
        for raw in ["TBD", "-750W", "??/??", "Various"] {
            let constraint = WattageConstraint::parse(raw);
            assert_eq!(constraint, WattageConstraint::Unparsable, "{raw}");
            assert!(constraint.accepts(Some(1200)), "{raw}");
        }
    }

    #[test]
    fn list_skips_unreadable_entries() {
        let list = WattageConstraint::parse("650/TBD");
        assert_eq!(list, WattageConstraint::List(vec![650]));
        assert!(!list.accepts(Some(850)));
    }

    #[test]
    fn leading_number_reads_prefix() {
        assert_eq!(leading_number("1000"), Some(1000));
        assert_eq!(leading_number("850a"), Some(850));
        assert_eq!(leading_number(""), None);
        assert_eq!(leading_number("a850"), None);
    }
}
