//! # Cuisine Tags
//!
//! Maps raw place-type strings from the places API to the curated cuisine
//! vocabulary shown to users.

/// Sentinel tag for venues whose raw types map to nothing.
pub const FALLBACK: &str = "Restaurant";

const CUISINE_MAP: &[(&str, &str)] = &[
    ("american_restaurant", "American"),
    ("italian_restaurant", "Italian"),
    ("mexican_restaurant", "Mexican"),
    ("chinese_restaurant", "Chinese"),
    ("japanese_restaurant", "Japanese"),
    ("sushi_restaurant", "Sushi"),
    ("thai_restaurant", "Thai"),
    ("indian_restaurant", "Indian"),
    ("french_restaurant", "French"),
    ("greek_restaurant", "Greek"),
    ("mediterranean_restaurant", "Mediterranean"),
    ("seafood_restaurant", "Seafood"),
    ("steak_house", "Steakhouse"),
    ("barbecue_restaurant", "BBQ"),
    ("burger_restaurant", "Burgers"),
    ("pizza_restaurant", "Pizza"),
    ("sandwich_shop", "Sandwiches"),
    ("cafe", "Cafe"),
    ("coffee_shop", "Coffee"),
    ("bakery", "Bakery"),
    ("bar", "Bar"),
    ("pub", "Pub"),
    ("fast_food_restaurant", "Fast Food"),
];

/// Normalizes raw type strings to cuisine labels.
///
/// Unknown raw types are skipped, duplicates are removed, and output order
/// follows first appearance in the input. An empty result becomes
/// `["Restaurant"]` so the tag list is never empty.
pub fn derive<S: AsRef<str>>(raw_types: &[S]) -> Vec<String> {
    let mut cuisines: Vec<String> = Vec::new();

    for raw in raw_types {
        let Some((_, label)) = CUISINE_MAP.iter().find(|(key, _)| *key == raw.as_ref()) else {
            continue;
        };

        if !cuisines.iter().any(|c| c == label) {
            cuisines.push((*label).to_string());
        }
    }

    if cuisines.is_empty() {
        cuisines.push(FALLBACK.to_string());
    }

    cuisines
}
