use serde::Deserialize;

use super::{location::Location, restaurant::RestaurantEntry, Loose};
use crate::common::{Category, Collection, Cuisine, Establishment};

wrapper!(
    /// The categories list nests each item under a second `categories` key.
    CategoryEntry { categories: Category }
);
wrapper!(CollectionEntry { collection: Collection });
wrapper!(CuisineEntry { cuisine: Cuisine });
wrapper!(EstablishmentEntry { establishment: Establishment });

#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Option<Vec<CategoryEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub country_id: Option<i64>,
    pub country_name: Option<String>,
    pub country_flag_url: Option<String>,
    pub should_experiment_with: Option<u8>,
    pub discovery_enabled: Option<u8>,
    pub has_new_ad_format: Option<u8>,
    pub is_state: Option<u8>,
    pub state_id: Option<i64>,
    pub state_name: Option<String>,
    pub state_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CitiesResponse {
    pub location_suggestions: Option<Vec<City>>,
    pub status: Option<String>,
    pub has_more: Option<u8>,
    pub has_total: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionsResponse {
    pub collections: Option<Vec<CollectionEntry>>,
    pub share_url: Option<String>,
    pub display_text: Option<String>,
    pub has_more: Option<u8>,
    pub has_total: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct CuisinesResponse {
    pub cuisines: Option<Vec<CuisineEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct EstablishmentsResponse {
    pub establishments: Option<Vec<EstablishmentEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct GeoCodeResponse {
    pub location: Option<Location>,
    pub popularity: Option<Popularity>,
    pub link: Option<String>,
    pub nearby_restaurants: Option<Vec<RestaurantEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct Popularity {
    pub popularity: Option<Loose>,
    pub nightlife_index: Option<Loose>,
    pub nearby_res: Option<Vec<String>>,
    pub top_cuisines: Option<Vec<String>>,
    pub popularity_res: Option<Loose>,
    pub nightlife_res: Option<Loose>,
    pub subzone: Option<String>,
    pub subzone_id: Option<i64>,
    pub city: Option<String>,
}
