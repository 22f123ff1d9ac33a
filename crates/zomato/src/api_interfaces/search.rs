use serde::Deserialize;

use super::{restaurant::RestaurantEntry, Loose};

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results_found: Option<Loose>,
    pub results_start: Option<Loose>,
    pub results_shown: Option<Loose>,
    pub restaurants: Option<Vec<RestaurantEntry>>,
}
