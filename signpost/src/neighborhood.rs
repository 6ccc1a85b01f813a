//! # Neighborhoods
//!
//! Closed set of Summerville neighborhood labels plus the address classifier.
//!
//! Classification is case-insensitive substring matching against an ordered
//! rule list. The order is load-bearing: the first matching rule wins, so an
//! address containing both "Nexton" and "Main St" resolves to Nexton.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neighborhood {
    #[serde(rename = "Historic Downtown")]
    HistoricDowntown,
    Nexton,
    #[serde(rename = "North Main")]
    NorthMain,
    #[serde(rename = "Old Trolley")]
    OldTrolley,
    #[serde(rename = "Summers Corner")]
    SummersCorner,
    #[serde(rename = "Summerville Area")]
    SummervilleArea,
}

impl Neighborhood {
    pub fn label(self) -> &'static str {
        match self {
            Neighborhood::HistoricDowntown => "Historic Downtown",
            Neighborhood::Nexton => "Nexton",
            Neighborhood::NorthMain => "North Main",
            Neighborhood::OldTrolley => "Old Trolley",
            Neighborhood::SummersCorner => "Summers Corner",
            Neighborhood::SummervilleArea => "Summerville Area",
        }
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword rules in priority order. Downtown comes last among the keyword
/// rules because its keywords ("main st") are the broadest.
const RULES: &[(&[&str], Neighborhood)] = &[
    (&["nexton", "nexton pkwy"], Neighborhood::Nexton),
    (&["n main", "north main"], Neighborhood::NorthMain),
    (&["old trolley", "trolley rd"], Neighborhood::OldTrolley),
    (&["summers corner"], Neighborhood::SummersCorner),
    (
        &["s main", "main st", "downtown"],
        Neighborhood::HistoricDowntown,
    ),
];

/// Maps a free-text address to exactly one neighborhood label. Addresses
/// matching no rule fall back to [`Neighborhood::SummervilleArea`].
pub fn classify(address: &str) -> Neighborhood {
    let addr = address.to_lowercase();

    for (keywords, neighborhood) in RULES {
        if keywords.iter().any(|keyword| addr.contains(keyword)) {
            return *neighborhood;
        }
    }

    Neighborhood::SummervilleArea
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nexton() {
        assert_eq!(classify("1001 Nexton Pkwy"), Neighborhood::Nexton);
    }

    #[test]
    fn test_north_main() {
        assert_eq!(classify("1400 N Main St"), Neighborhood::NorthMain);
        assert_eq!(classify("North Main Plaza"), Neighborhood::NorthMain);
    }

    #[test]
    fn test_old_trolley() {
        assert_eq!(classify("1001 Old Trolley Rd"), Neighborhood::OldTrolley);
        assert_eq!(classify("12 Trolley Rd"), Neighborhood::OldTrolley);
    }

    #[test]
    fn test_summers_corner() {
        assert_eq!(classify("300 Summers Corner Dr"), Neighborhood::SummersCorner);
    }

    #[test]
    fn test_historic_downtown() {
        assert_eq!(classify("107 S Main St"), Neighborhood::HistoricDowntown);
        assert_eq!(classify("Downtown Square"), Neighborhood::HistoricDowntown);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify("219 N Cedar St"), Neighborhood::SummervilleArea);
        assert_eq!(classify(""), Neighborhood::SummervilleArea);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("1001 NEXTON PKWY"), Neighborhood::Nexton);
    }

    #[test]
    fn test_priority_on_overlap() {
        // "Nexton" outranks the broader "Main St" keyword.
        assert_eq!(
            classify("10 Main St, Nexton"),
            Neighborhood::Nexton
        );
        // "N Main" contains "main st" addresses too; the North Main rule
        // fires first.
        assert_eq!(classify("1400 N Main St"), Neighborhood::NorthMain);
    }

    #[test]
    fn test_deterministic() {
        let address = "1001 Old Trolley Rd";
        assert_eq!(classify(address), classify(address));
    }
}
