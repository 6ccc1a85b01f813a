//! # Spot Records
//!
//! The venue record shape shared by the store, the query engine, the HTTP
//! layer, and the ingestion binary. Field names serialize camelCase to match
//! the data file the ingest binary writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::Error, geo, neighborhood::Neighborhood};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HappyHour {
    pub days: String,
    pub hours: String,
    #[serde(default)]
    pub deals: Vec<String>,
}

/// One restaurant, bar, or similar establishment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    /// Opaque place id when ingested from the places API, slug when seeded.
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub neighborhood: Neighborhood,
    /// Curated cuisine labels; never empty (see [`crate::cuisine::derive`]).
    pub cuisine_tags: Vec<String>,
    /// Raw source type strings, retained so tags can be re-derived.
    #[serde(default)]
    pub raw_types: Vec<String>,
    /// Free-form descriptive strings used by text search.
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub happy_hour: Option<HappyHour>,
    pub rating: Option<f64>,
    pub user_rating_count: Option<u32>,
    pub price_level: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<Vec<String>>,
    pub editorial_summary: Option<String>,
    pub business_status: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Spot {
    /// A record with out-of-range coordinates must never enter the store.
    pub fn validate(&self) -> Result<(), Error> {
        geo::validate(self.coordinates.latitude, self.coordinates.longitude)
    }
}
