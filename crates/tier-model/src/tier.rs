use std::fmt;

/// Sub-tier modifier carried by a `+` or `-` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierModifier {
    Plus,
    Minus,
}

/// Borrowed view over a tier label such as `"A"`, `"B+"` or `"C-"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TierLabel<'a>(&'a str);

impl<'a> TierLabel<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// The label with every `+` and `-` removed; consumers key display styles on it.
    pub fn base(&self) -> String {
        self.0.chars().filter(|c| !matches!(c, '+' | '-')).collect()
    }

    /// `Plus` wins when a label carries both markers.
    pub fn modifier(&self) -> Option<TierModifier> {
        if self.0.contains('+') {
            Some(TierModifier::Plus)
        } else if self.0.contains('-') {
            Some(TierModifier::Minus)
        } else {
            None
        }
    }
}

impl fmt::Display for TierLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
