//! Degree classification bands and their presentation hints

use serde::{Deserialize, Serialize};
use std::fmt;

/// Banded label derived from a GPA and a credit total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeClassification {
    /// First Class
    FirstClass,
    /// Second Class (Upper Division)
    SecondClassUpper,
    /// Second Class (Lower Division)
    SecondClassLower,
    /// Third Class
    ThirdClass,
    /// Pass
    Pass,
    /// Fail
    Fail,
    /// Fewer credits than the minimum needed for any classification
    NotEnoughCredits,
}

impl DegreeClassification {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstClass => "First Class",
            Self::SecondClassUpper => "Second Class Upper",
            Self::SecondClassLower => "Second Class Lower",
            Self::ThirdClass => "Third Class",
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::NotEnoughCredits => "Not Enough Credits",
        }
    }
}

impl fmt::Display for DegreeClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Semantic color category used by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    /// Top band
    Green,
    /// Strong band
    Blue,
    /// Middle band
    Teal,
    /// Low band
    Amber,
    /// Marginal band
    Orange,
    /// Failing band
    Red,
    /// No classification yet
    Neutral,
}

impl ColorTag {
    /// Tag name, also used as a CSS class suffix in HTML reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Teal => "teal",
            Self::Amber => "amber",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(DegreeClassification::SecondClassUpper.to_string(), "Second Class Upper");
        assert_eq!(DegreeClassification::NotEnoughCredits.label(), "Not Enough Credits");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DegreeClassification::FirstClass).unwrap();
        assert_eq!(json, "\"first_class\"");
        assert_eq!(serde_json::to_string(&ColorTag::Amber).unwrap(), "\"amber\"");
    }
}
