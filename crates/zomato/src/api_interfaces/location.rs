use serde::Deserialize;

use super::{restaurant::RestaurantEntry, Loose};
use crate::restaurant::User;

wrapper!(UserEntry { user: User });

#[derive(Debug, Deserialize)]
pub struct Location {
    pub entity_type: Option<String>,
    pub entity_id: Option<i64>,
    pub title: Option<String>,
    pub latitude: Option<Loose>,
    pub longitude: Option<Loose>,
    pub city_id: Option<i64>,
    pub city_name: Option<String>,
    pub country_id: Option<i64>,
    pub country_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LocationDetailsResponse {
    pub location: Option<Location>,
    pub num_restaurant: Option<Loose>,
    pub best_rated_restaurant: Option<Vec<RestaurantEntry>>,
    pub experts: Option<Vec<UserEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct LocationsResponse {
    pub location_suggestions: Option<Vec<Location>>,
    pub status: Option<String>,
    pub has_more: Option<u8>,
    pub has_total: Option<u8>,
}
