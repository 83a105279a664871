use serde::{Deserialize, Serialize};

/// What a disclosed cell shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    Hazard,
    /// No neighboring hazards, disclosing it opens its neighbors too.
    Blank,
    /// Number of neighboring hazards, always within `1..=8`.
    Count(u8),
}

impl Symbol {
    /// Character shown for a cell that has not been disclosed yet.
    pub const HIDDEN_CHAR: char = '#';
    pub const HAZARD_CHAR: char = '*';
    pub const BLANK_CHAR: char = '_';

    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Blank,
            count => Self::Count(count),
        }
    }

    pub const fn is_hazard(self) -> bool {
        matches!(self, Self::Hazard)
    }

    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Hazard => Self::HAZARD_CHAR,
            Self::Blank => Self::BLANK_CHAR,
            Self::Count(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        }
    }
}
