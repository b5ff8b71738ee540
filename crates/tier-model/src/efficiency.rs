/// 80 Plus certification levels as abbreviated in the sheet's efficiency column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Efficiency {
    White,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Titanium,
    Unrated,
}

impl Efficiency {
    /// Maps a single-letter code (`W`, `B`, `S`, `G`, `P`, `T`, `N`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "W" => Some(Self::White),
            "B" => Some(Self::Bronze),
            "S" => Some(Self::Silver),
            "G" => Some(Self::Gold),
            "P" => Some(Self::Platinum),
            "T" => Some(Self::Titanium),
            "N" => Some(Self::Unrated),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::White => "80+ White/Standard",
            Self::Bronze => "80+ Bronze",
            Self::Silver => "80+ Silver",
            Self::Gold => "80+ Gold",
            Self::Platinum => "80+ Platinum",
            Self::Titanium => "80+ Titanium",
            Self::Unrated => "Unrated/None",
        }
    }

    /// Expands a known code to its label and passes anything else through.
    pub fn describe(raw: &str) -> String {
        Self::from_code(raw).map_or_else(|| raw.to_string(), |e| e.label().to_string())
    }
}
