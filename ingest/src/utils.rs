use chrono::Utc;
use serde_json::{Value, json};
use signpost::{
    cuisine, neighborhood,
    spot::{Coordinates, Spot},
};

use crate::models::Place;

pub struct SearchPoint {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// The places API caps results per request, so coverage comes from several
/// search points spread across town rather than one big circle.
pub const SEARCH_POINTS: &[SearchPoint] = &[
    SearchPoint {
        name: "Downtown",
        lat: 33.0185,
        lng: -80.1753,
    },
    SearchPoint {
        name: "Nexton",
        lat: 33.0550,
        lng: -80.1300,
    },
    SearchPoint {
        name: "North Main",
        lat: 33.0450,
        lng: -80.1700,
    },
    SearchPoint {
        name: "Old Trolley",
        lat: 33.0350,
        lng: -80.1600,
    },
    SearchPoint {
        name: "Summers Corner",
        lat: 33.0850,
        lng: -80.1500,
    },
];

pub const DEFAULT_RADIUS_M: f64 = 5000.0;
pub const MAX_RESULTS_PER_CALL: u32 = 20;

const INCLUDED_TYPES: &[&str] = &[
    "restaurant",
    "cafe",
    "bakery",
    "bar",
    "meal_takeaway",
    "meal_delivery",
    "coffee_shop",
    "fast_food_restaurant",
];

const EXCLUDED_TYPES: &[&str] = &["gas_station", "convenience_store"];

pub fn build_payload(point: &SearchPoint, radius_m: f64) -> Value {
    json!({
        "locationRestriction": {
            "circle": {
                "center": { "latitude": point.lat, "longitude": point.lng },
                "radius": radius_m
            }
        },
        "includedTypes": INCLUDED_TYPES,
        "excludedTypes": EXCLUDED_TYPES,
        "maxResultCount": MAX_RESULTS_PER_CALL
    })
}

/// Raw place to stored spot. Returns `None` for places without coordinates,
/// which must not enter the store.
pub fn transform_place(place: Place) -> Option<Spot> {
    let location = place.location?;
    let address = place.formatted_address.unwrap_or_default();
    let cuisine_tags = cuisine::derive(&place.types);

    Some(Spot {
        id: place.id,
        name: place
            .display_name
            .map(|name| name.text)
            .unwrap_or_default(),
        neighborhood: neighborhood::classify(&address),
        address,
        coordinates: Coordinates {
            latitude: location.latitude,
            longitude: location.longitude,
        },
        cuisine_tags,
        raw_types: place.types,
        tags: Vec::new(),
        description: None,
        happy_hour: None,
        rating: place.rating,
        user_rating_count: place.user_rating_count,
        price_level: place.price_level,
        phone: place.national_phone_number,
        website: place.website_uri,
        opening_hours: place
            .regular_opening_hours
            .map(|hours| hours.weekday_descriptions),
        editorial_summary: place.editorial_summary.map(|summary| summary.text),
        business_status: place.business_status.or_else(|| Some("OPERATIONAL".to_string())),
        fetched_at: Some(Utc::now()),
    })
}
