use serde::Deserialize;

pub const ENDPOINT: &str = "https://places.googleapis.com/v1/places:searchNearby";

/// Only the fields we store; keeps response payloads small.
pub const FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,\
places.location,places.types,places.nationalPhoneNumber,places.websiteUri,\
places.regularOpeningHours,places.priceLevel,places.rating,places.userRatingCount,\
places.editorialSummary,places.businessStatus";

#[derive(Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub places: Vec<Place>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub display_name: Option<LocalizedText>,
    pub formatted_address: Option<String>,
    pub location: Option<LatLng>,
    #[serde(default)]
    pub types: Vec<String>,
    pub national_phone_number: Option<String>,
    pub website_uri: Option<String>,
    pub regular_opening_hours: Option<OpeningHours>,
    pub price_level: Option<String>,
    pub rating: Option<f64>,
    pub user_rating_count: Option<u32>,
    pub editorial_summary: Option<LocalizedText>,
    pub business_status: Option<String>,
}

#[derive(Deserialize)]
pub struct LocalizedText {
    pub text: String,
}

#[derive(Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_descriptions: Vec<String>,
}
