//! Waste categories and the chemical signature table used to judge detections.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A category the user claims when throwing an item away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    Organic,
    Plastic,
    Metal,
    Glass,
}

impl WasteCategory {
    pub const ALL: [Self; 4] = [Self::Organic, Self::Plastic, Self::Metal, Self::Glass];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Organic => "organic",
            Self::Plastic => "plastic",
            Self::Metal => "metal",
            Self::Glass => "glass",
        }
    }

    /// Capitalized name for menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Organic => "Organic",
            Self::Plastic => "Plastic",
            Self::Metal => "Metal",
            Self::Glass => "Glass",
        }
    }

    /// Substances whose detection counts as a match for this category.
    #[must_use]
    pub const fn signatures(self) -> &'static [&'static str] {
        match self {
            Self::Organic => &["C6H12O6", "CH4", "CO2"],
            Self::Plastic => &["C2H4", "C8H8", "C3H6"],
            Self::Metal => &["Fe", "Al", "Cu"],
            Self::Glass => &["SiO2", "Na2O", "CaO"],
        }
    }

    #[must_use]
    pub fn matches(self, substance: &str) -> bool {
        self.signatures().contains(&substance)
    }

    /// The category a substance belongs to, if any.
    #[must_use]
    pub fn of_substance(substance: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cat| cat.matches(substance))
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("please select a waste type")]
    Missing,
    #[error("unknown waste type: {0}")]
    Unknown(String),
}

impl FromStr for WasteCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key.is_empty() {
            return Err(CategoryError::Missing);
        }
        Self::ALL
            .into_iter()
            .find(|cat| cat.key() == key)
            .ok_or_else(|| CategoryError::Unknown(s.trim().to_string()))
    }
}

/// Every known substance across all categories, in table order.
#[must_use]
pub fn all_substances() -> Vec<&'static str> {
    WasteCategory::ALL
        .iter()
        .flat_map(|cat| cat.signatures().iter().copied())
        .collect()
}
