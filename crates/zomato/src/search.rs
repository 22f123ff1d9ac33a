use derive_builder::Builder;
use serde::Serialize;

use crate::{
    api_interfaces::search as wire,
    common::{EntityType, Order, Sort},
    error::{DecodeError, ValidationError},
    normalize::{convert_list, loose_i64},
    request::{impl_build_request, Endpoint, Query},
    restaurant::Restaurant,
};

/// Restaurant search. Every filter is optional; unset filters are left out
/// of the query string.
#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(default, setter(into), build_fn(error = "ValidationError"))]
pub struct SearchRequest {
    /// Free-text search
    pub query: String,
    pub entity_id: i64,
    pub entity_type: Option<EntityType>,
    pub latitude: f64,
    pub longitude: f64,
    /// Offset of the first result
    pub start: u64,
    pub count: u64,
    /// Search radius in meters
    pub radius: f64,
    /// Establishment type ID, as returned by the establishments endpoint
    pub establishment_type: String,
    /// Cuisine IDs, sent comma-joined
    pub cuisines: Vec<String>,
    pub collection_id: String,
    /// Category ID, as returned by the categories endpoint
    pub category: String,
    pub sort: Option<Sort>,
    pub order: Option<Order>,
}

impl SearchRequest {
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResults {
    pub results_found: Option<i64>,
    pub results_start: Option<i64>,
    pub results_shown: Option<i64>,
    pub restaurants: Vec<Restaurant>,
}

impl TryFrom<wire::SearchResponse> for SearchResults {
    type Error = DecodeError;

    fn try_from(response: wire::SearchResponse) -> Result<Self, DecodeError> {
        Ok(Self {
            results_found: loose_i64("results_found", response.results_found)?,
            results_start: loose_i64("results_start", response.results_start)?,
            results_shown: loose_i64("results_shown", response.results_shown)?,
            restaurants: convert_list(response.restaurants)?,
        })
    }
}

impl Endpoint for SearchRequest {
    const NAME: &'static str = "search";
    const PATH: &'static str = "/search";
    type Wire = wire::SearchResponse;
    type Output = SearchResults;

    fn query(&self) -> Query {
        Query::new()
            .push("q", &self.query)
            .push("entity_id", &self.entity_id)
            .push("entity_type", &self.entity_type)
            .push("lat", &self.latitude)
            .push("lon", &self.longitude)
            .push("start", &self.start)
            .push("count", &self.count)
            .push("radius", &self.radius)
            .push("establishment_type", &self.establishment_type)
            .push("cuisines", &self.cuisines)
            .push("collection_id", &self.collection_id)
            .push("category", &self.category)
            .push("sort", &self.sort)
            .push("order", &self.order)
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        SearchResults::try_from(wire)
    }
}

impl_build_request!(SearchRequest);
