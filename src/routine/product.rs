// Product domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Half of the day a product belongs to. `Both` products show up in the
/// morning and the evening checklist alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Evening,
    Both,
}

impl Period {
    /// True if a product with this period belongs to the `active` checklist.
    pub fn applies_to(self, active: Period) -> bool {
        self == Period::Both || self == active
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Evening => "evening",
            Period::Both => "both",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown period '{0}' (expected 'morning', 'evening' or 'both')")]
pub struct ParsePeriodError(String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(Period::Morning),
            "evening" => Ok(Period::Evening),
            "both" => Ok(Period::Both),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}

/// Product category, used for grouping and for the checklist icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cleanser,
    Toner,
    Serum,
    Moisturizer,
    Sunscreen,
    Treatment,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cleanser,
        Category::Toner,
        Category::Serum,
        Category::Moisturizer,
        Category::Sunscreen,
        Category::Treatment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Cleanser => "cleanser",
            Category::Toner => "toner",
            Category::Serum => "serum",
            Category::Moisturizer => "moisturizer",
            Category::Sunscreen => "sunscreen",
            Category::Treatment => "treatment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry. Immutable after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub period: Period,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_applies_to_either_period() {
        assert!(Period::Both.applies_to(Period::Morning));
        assert!(Period::Both.applies_to(Period::Evening));
        assert!(Period::Morning.applies_to(Period::Morning));
        assert!(!Period::Morning.applies_to(Period::Evening));
        assert!(!Period::Evening.applies_to(Period::Morning));
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("morning".parse::<Period>().unwrap(), Period::Morning);
        assert_eq!("Evening".parse::<Period>().unwrap(), Period::Evening);
        assert_eq!(" both ".parse::<Period>().unwrap(), Period::Both);
        assert!("noon".parse::<Period>().is_err());
    }

    #[test]
    fn test_category_labels_are_unique() {
        let mut labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Category::ALL.len());
    }
}
