//! # Query Engine
//!
//! Pure reads over a store snapshot: text search, haversine nearby search,
//! and neighborhood/cuisine facet filters. The three operations compose by
//! plain set intersection, so callers may apply them in any order.

use serde::Serialize;

use crate::{
    error::Error,
    geo::{self, EARTH_RADIUS_KM},
    spot::{Coordinates, Spot},
};

/// Radius applied when a nearby query does not supply one, in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// A nearby result: the spot plus its distance from the query point.
#[derive(Debug, Serialize)]
pub struct NearbyHit<'a> {
    #[serde(flatten)]
    pub spot: &'a Spot,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// Case-insensitive substring match against name, cuisine tags, neighborhood,
/// or free-form tags. An empty or whitespace-only query returns the full
/// store in store order.
pub fn text_search<'a>(spots: &'a [Spot], query: &str) -> Vec<&'a Spot> {
    let needle = query.trim().to_lowercase();

    if needle.is_empty() {
        return spots.iter().collect();
    }

    spots.iter().filter(|spot| matches(spot, &needle)).collect()
}

fn matches(spot: &Spot, needle: &str) -> bool {
    spot.name.to_lowercase().contains(needle)
        || spot
            .cuisine_tags
            .iter()
            .any(|cuisine| cuisine.to_lowercase().contains(needle))
        || spot.neighborhood.label().to_lowercase().contains(needle)
        || spot.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Spots within `radius_km` of the query point, ascending by distance.
///
/// The sort is stable, so spots at exactly equal distance keep their store
/// order. Invalid query coordinates fail with [`Error::InvalidCoordinate`].
pub fn nearby<'a>(
    spots: &'a [Spot],
    latitude: f64,
    longitude: f64,
    radius_km: Option<f64>,
) -> Result<Vec<NearbyHit<'a>>, Error> {
    geo::validate(latitude, longitude)?;

    let radius_km = radius_km.unwrap_or(DEFAULT_RADIUS_KM);
    let origin = Coordinates {
        latitude,
        longitude,
    };

    let mut hits: Vec<NearbyHit<'a>> = spots
        .iter()
        .filter_map(|spot| {
            let distance_km = geo::haversine_unchecked(&origin, &spot.coordinates, EARTH_RADIUS_KM);
            (distance_km <= radius_km).then_some(NearbyHit {
                spot,
                distance_km,
            })
        })
        .collect();

    hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    Ok(hits)
}

/// Keeps spots matching the given neighborhood label and/or carrying the
/// given cuisine tag. Both filters are optional and AND together; with
/// neither, every spot passes.
pub fn facet_filter<'a>(
    spots: &'a [Spot],
    neighborhood: Option<&str>,
    cuisine: Option<&str>,
) -> Vec<&'a Spot> {
    spots
        .iter()
        .filter(|spot| neighborhood.map_or(true, |n| spot.neighborhood.label() == n))
        .filter(|spot| cuisine.map_or(true, |c| spot.cuisine_tags.iter().any(|tag| tag == c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{neighborhood::Neighborhood, spot::fixtures::spot};

    fn store() -> Vec<Spot> {
        let mut masons = spot("masons-rooftop", "Mason's Rooftop Bar", 33.0185, -80.1753);
        masons.neighborhood = Neighborhood::HistoricDowntown;
        masons.cuisine_tags = vec!["American".into(), "Bar".into()];
        masons.tags = vec!["rooftop".into(), "cocktails".into()];

        let mut oak = spot("oak-steakhouse", "Oak Steakhouse", 33.0561, -80.1319);
        oak.neighborhood = Neighborhood::Nexton;
        oak.cuisine_tags = vec!["Steakhouse".into()];
        oak.tags = vec!["upscale".into(), "wine".into()];

        let mut azul = spot("azul-mexican", "Azul Mexican Kitchen", 33.0380, -80.1610);
        azul.neighborhood = Neighborhood::NorthMain;
        azul.cuisine_tags = vec!["Mexican".into()];
        azul.tags = vec!["margaritas".into()];

        vec![masons, oak, azul]
    }

    #[test]
    fn test_text_search_empty_returns_store_order() {
        let spots = store();
        let results = text_search(&spots, "");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "masons-rooftop");
        assert_eq!(results[2].id, "azul-mexican");

        let whitespace = text_search(&spots, "   ");
        assert_eq!(whitespace.len(), 3);
    }

    #[test]
    fn test_text_search_matches_each_field() {
        let spots = store();
        // name
        assert_eq!(text_search(&spots, "mason")[0].id, "masons-rooftop");
        // cuisine tag
        assert_eq!(text_search(&spots, "steak")[0].id, "oak-steakhouse");
        // neighborhood label
        assert_eq!(text_search(&spots, "north main")[0].id, "azul-mexican");
        // free-form tag
        assert_eq!(text_search(&spots, "margarita")[0].id, "azul-mexican");
    }

    #[test]
    fn test_text_search_case_insensitive() {
        let spots = store();
        assert_eq!(text_search(&spots, "MEXICAN").len(), 1);
        assert_eq!(text_search(&spots, "RoofTop").len(), 1);
    }

    #[test]
    fn test_text_search_no_match() {
        let spots = store();
        assert!(text_search(&spots, "sushi").is_empty());
    }

    #[test]
    fn test_nearby_filters_and_sorts() {
        let spots = store();
        // Downtown query point: Mason's is on top of it, Azul ~2.6 km out,
        // Oak ~6 km out and beyond the default radius.
        let hits = nearby(&spots, 33.0185, -80.1753, None).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].spot.id, "masons-rooftop");
        assert_eq!(hits[1].spot.id, "azul-mexican");
        assert!(hits[0].distance_km <= hits[1].distance_km);
    }

    #[test]
    fn test_nearby_respects_radius() {
        let spots = store();
        let hits = nearby(&spots, 33.0185, -80.1753, Some(50.0)).unwrap();
        assert_eq!(hits.len(), 3);
        for hit in &hits {
            assert!(hit.distance_km <= 50.0);
        }

        let none = nearby(&spots, 33.0185, -80.1753, Some(0.001)).unwrap();
        assert_eq!(none.len(), 1, "only the co-located spot survives");
    }

    #[test]
    fn test_nearby_stable_ties() {
        // v1 and v2 sit at the same point, equidistant from the query.
        let v1 = spot("v1", "First", 33.0, -80.0);
        let v2 = spot("v2", "Second", 33.0, -80.0);
        let spots = vec![v1, v2];

        let hits = nearby(&spots, 33.01, -80.0, Some(5.0)).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].spot.id, "v1");
        assert_eq!(hits[1].spot.id, "v2");
    }

    #[test]
    fn test_nearby_invalid_query_point() {
        let spots = store();
        assert!(nearby(&spots, 91.0, -80.0, None).is_err());
        assert!(nearby(&spots, f64::NAN, -80.0, None).is_err());
    }

    #[test]
    fn test_facet_filter_by_neighborhood() {
        let spots = store();
        let results = facet_filter(&spots, Some("Nexton"), None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "oak-steakhouse");
    }

    #[test]
    fn test_facet_filter_by_cuisine() {
        let spots = store();
        let results = facet_filter(&spots, None, Some("Bar"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "masons-rooftop");
    }

    #[test]
    fn test_facet_filter_composes_with_and() {
        let spots = store();
        assert_eq!(facet_filter(&spots, Some("Nexton"), Some("Steakhouse")).len(), 1);
        assert!(facet_filter(&spots, Some("Nexton"), Some("Mexican")).is_empty());
    }

    #[test]
    fn test_facet_filter_without_facets_is_noop() {
        let spots = store();
        assert_eq!(facet_filter(&spots, None, None).len(), spots.len());
    }

    #[test]
    fn test_facet_filter_unknown_label() {
        let spots = store();
        assert!(facet_filter(&spots, Some("Atlantis"), None).is_empty());
    }

    #[test]
    fn test_filters_commute() {
        let spots = store();
        // facet-then-search equals search-then-facet.
        let facet_first: Vec<&str> = facet_filter(&spots, Some("Historic Downtown"), None)
            .into_iter()
            .filter(|s| !text_search(std::slice::from_ref(*s), "bar").is_empty())
            .map(|s| s.id.as_str())
            .collect();

        let search_first: Vec<&str> = text_search(&spots, "bar")
            .into_iter()
            .filter(|s| s.neighborhood.label() == "Historic Downtown")
            .map(|s| s.id.as_str())
            .collect();

        assert_eq!(facet_first, search_first);
    }
}
