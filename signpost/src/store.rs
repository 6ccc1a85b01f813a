//! # Spot Store
//!
//! Read-mostly, insertion-ordered collection of spot records. Loaded once at
//! startup from the data file the ingest binary writes, falling back to the
//! embedded seed set. Records are only ever replaced wholesale: the new set
//! is built fully, validated, and then swapped in, so readers never observe a
//! partially-ingested store.

use std::{collections::HashSet, fs, path::Path};

use tracing::warn;

use crate::{error::Error, spot::Spot};

const SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Default)]
pub struct Store {
    spots: Vec<Spot>,
}

impl Store {
    pub fn from_spots(spots: Vec<Spot>) -> Self {
        Self {
            spots: retain_valid(spots),
        }
    }

    /// Loads the store from an ingested JSON data file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = fs::read_to_string(path)?;
        let spots: Vec<Spot> = serde_json::from_str(&data)?;

        Ok(Self::from_spots(spots))
    }

    /// The embedded 20-venue seed set.
    pub fn seed() -> Self {
        let spots: Vec<Spot> = serde_json::from_str(SEED).expect("embedded seed data is valid");

        Self::from_spots(spots)
    }

    /// Swaps in a full replacement record set.
    pub fn replace(&mut self, spots: Vec<Spot>) {
        self.spots = retain_valid(spots);
    }

    /// The current snapshot, in insertion order.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn get(&self, id: &str) -> Option<&Spot> {
        self.spots.iter().find(|spot| spot.id == id)
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

/// Drops records that violate store invariants: invalid coordinates, or an id
/// already taken by an earlier record.
fn retain_valid(spots: Vec<Spot>) -> Vec<Spot> {
    let mut seen: HashSet<String> = HashSet::new();

    spots
        .into_iter()
        .filter(|spot| {
            if let Err(err) = spot.validate() {
                warn!(id = %spot.id, "dropping spot: {err}");
                return false;
            }
            if !seen.insert(spot.id.clone()) {
                warn!(id = %spot.id, "dropping spot: duplicate id");
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spot::fixtures::spot;

    #[test]
    fn test_seed_loads() {
        let store = Store::seed();
        assert_eq!(store.len(), 20);
        assert!(store.get("masons-rooftop").is_some());

        for spot in store.spots() {
            assert!(spot.validate().is_ok());
            assert!(!spot.cuisine_tags.is_empty());
        }
    }

    #[test]
    fn test_invalid_coordinates_dropped() {
        let store = Store::from_spots(vec![
            spot("good", "Good", 33.0, -80.0),
            spot("bad", "Bad", 95.0, -80.0),
        ]);
        assert_eq!(store.len(), 1);
        assert!(store.get("bad").is_none());
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let store = Store::from_spots(vec![
            spot("dup", "First", 33.0, -80.0),
            spot("dup", "Second", 33.1, -80.1),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("dup").unwrap().name, "First");
    }

    #[test]
    fn test_get_unknown_id() {
        assert!(Store::seed().get("no-such-spot").is_none());
    }

    #[test]
    fn test_replace_swaps_whole_set() {
        let mut store = Store::seed();
        store.replace(vec![spot("only", "Only", 33.0, -80.0)]);
        assert_eq!(store.len(), 1);
        assert!(store.get("masons-rooftop").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Store::load(Path::new("/no/such/file.json")).is_err());
    }
}
