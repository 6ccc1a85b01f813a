//! # Aggregation Reporter
//!
//! Grouped counts over a store snapshot, sorted descending by count. Ties
//! keep first-encountered order, which the stable sort preserves.

use serde::Serialize;

use crate::spot::Spot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborhoodCount {
    pub neighborhood: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CuisineCount {
    pub cuisine: String,
    pub count: usize,
}

/// Spot counts per neighborhood, descending.
pub fn by_neighborhood(spots: &[Spot]) -> Vec<NeighborhoodCount> {
    let mut counts: Vec<NeighborhoodCount> = Vec::new();

    for spot in spots {
        let label = spot.neighborhood.label();
        match counts.iter_mut().find(|entry| entry.neighborhood == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(NeighborhoodCount {
                neighborhood: label.to_string(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Spot counts per cuisine tag, descending. A spot with N tags contributes
/// to N counters.
pub fn by_cuisine(spots: &[Spot]) -> Vec<CuisineCount> {
    let mut counts: Vec<CuisineCount> = Vec::new();

    for spot in spots {
        for tag in &spot.cuisine_tags {
            match counts.iter_mut().find(|entry| &entry.cuisine == tag) {
                Some(entry) => entry.count += 1,
                None => counts.push(CuisineCount {
                    cuisine: tag.clone(),
                    count: 1,
                }),
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
