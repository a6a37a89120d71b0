//! Puzzle categories

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct CategoryError(pub String);

/// The fixed set of puzzle categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Songs,
    Places,
    Food,
    Phrases,
    Landmarks,
}

impl Category {
    /// All categories in board order
    pub const ALL: [Self; 5] = [
        Self::Songs,
        Self::Places,
        Self::Food,
        Self::Phrases,
        Self::Landmarks,
    ];

    /// Label shown above the board
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Songs => "Songs",
            Self::Places => "Places",
            Self::Food => "Food",
            Self::Phrases => "Phrases",
            Self::Landmarks => "Landmarks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    /// Parse a category name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CategoryError(trimmed.to_string()))
    }
}
