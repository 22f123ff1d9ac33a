//! Reference data endpoints: categories, cities, collections, cuisines,
//! establishments and geocoding.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    api_interfaces::common as wire,
    error::{DecodeError, ValidationError},
    location::Location,
    normalize::{
        convert_list, convert_opt, loose_f64, loose_i64, string_to_number, unwrap_list,
        zero_one_to_bool,
    },
    request::{impl_build_request, require, Endpoint, Query, QueryValue},
    restaurant::Restaurant,
};

/// Sort order of search results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sort {
    Cost,
    Rating,
    RealDistance,
}

impl Sort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::Cost => "cost",
            Sort::Rating => "rating",
            Sort::RealDistance => "real_distance",
        }
    }
}

/// Direction used together with [`Sort`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

/// Kind of location an `entity_id` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    City,
    Subzone,
    Zone,
    Landmark,
    Metro,
    Group,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::City => "city",
            EntityType::Subzone => "subzone",
            EntityType::Zone => "zone",
            EntityType::Landmark => "landmark",
            EntityType::Metro => "metro",
            EntityType::Group => "group",
        }
    }
}

macro_rules! enum_query_value {
    ($($ty:ty),+) => {
        $(
            impl QueryValue for $ty {
                fn is_omitted(&self) -> bool {
                    false
                }

                fn encode(&self) -> Result<String, String> {
                    Ok(self.as_str().to_owned())
                }
            }
        )+
    };
}
enum_query_value!(Sort, Order, EntityType);

/// Lists the categories of restaurant listings (delivery, dine-out, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoriesRequest;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Endpoint for CategoriesRequest {
    const NAME: &'static str = "categories";
    const PATH: &'static str = "/categories";
    type Wire = wire::CategoriesResponse;
    type Output = Vec<Category>;

    fn query(&self) -> Query {
        Query::new()
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        Ok(unwrap_list(wire.categories.unwrap_or_default()))
    }
}

/// Finds cities by name, coordinates or ID.
#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(default, setter(into), build_fn(error = "ValidationError"))]
pub struct CitiesRequest {
    /// City name to search for
    pub query: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city_ids: Vec<i64>,
    /// Maximum number of results
    pub count: u64,
}

impl CitiesRequest {
    pub fn builder() -> CitiesRequestBuilder {
        CitiesRequestBuilder::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub country_id: Option<i64>,
    pub country_name: Option<String>,
    pub country_flag_url: Option<String>,
    pub should_experiment_with: Option<bool>,
    pub discovery_enabled: Option<bool>,
    pub has_new_ad_format: Option<bool>,
    /// Whether this location is a state rather than a city
    pub is_state: Option<bool>,
    pub state_id: Option<i64>,
    pub state_name: Option<String>,
    pub state_code: Option<String>,
}

impl From<wire::City> for City {
    fn from(city: wire::City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            country_id: city.country_id,
            country_name: city.country_name,
            country_flag_url: city.country_flag_url,
            should_experiment_with: zero_one_to_bool(city.should_experiment_with),
            discovery_enabled: zero_one_to_bool(city.discovery_enabled),
            has_new_ad_format: zero_one_to_bool(city.has_new_ad_format),
            is_state: zero_one_to_bool(city.is_state),
            state_id: city.state_id,
            state_name: city.state_name,
            state_code: city.state_code,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cities {
    pub location_suggestions: Vec<City>,
    pub status: Option<String>,
    pub has_more: Option<bool>,
    pub has_total: Option<bool>,
}

impl From<wire::CitiesResponse> for Cities {
    fn from(response: wire::CitiesResponse) -> Self {
        Self {
            location_suggestions: response
                .location_suggestions
                .unwrap_or_default()
                .into_iter()
                .map(City::from)
                .collect(),
            status: response.status,
            has_more: zero_one_to_bool(response.has_more),
            has_total: zero_one_to_bool(response.has_total),
        }
    }
}

impl Endpoint for CitiesRequest {
    const NAME: &'static str = "cities";
    const PATH: &'static str = "/cities";
    type Wire = wire::CitiesResponse;
    type Output = Cities;

    fn query(&self) -> Query {
        Query::new()
            .push("q", &self.query)
            .push("lat", &self.latitude)
            .push("lon", &self.longitude)
            .push("city_ids", &self.city_ids)
            .push("count", &self.count)
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        Ok(Cities::from(wire))
    }
}

/// Lists curated restaurant collections in a city.
#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(default, setter(into), build_fn(error = "ValidationError"))]
pub struct CollectionsRequest {
    pub city_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub count: u64,
}

impl CollectionsRequest {
    pub fn builder() -> CollectionsRequestBuilder {
        CollectionsRequestBuilder::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(alias = "collection_id")]
    pub id: Option<i64>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "res_count")]
    pub restaurant_count: Option<i64>,
    pub image_url: Option<String>,
    pub share_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Collections {
    pub collections: Vec<Collection>,
    pub share_url: Option<String>,
    pub display_text: Option<String>,
    pub has_more: Option<bool>,
    pub has_total: Option<bool>,
}

impl From<wire::CollectionsResponse> for Collections {
    fn from(response: wire::CollectionsResponse) -> Self {
        Self {
            collections: unwrap_list(response.collections.unwrap_or_default()),
            share_url: response.share_url,
            display_text: response.display_text,
            has_more: zero_one_to_bool(response.has_more),
            has_total: zero_one_to_bool(response.has_total),
        }
    }
}

impl Endpoint for CollectionsRequest {
    const NAME: &'static str = "collections";
    const PATH: &'static str = "/collections";
    type Wire = wire::CollectionsResponse;
    type Output = Collections;

    fn query(&self) -> Query {
        Query::new()
            .push("city_id", &self.city_id)
            .push("lat", &self.latitude)
            .push("lon", &self.longitude)
            .push("count", &self.count)
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        Ok(Collections::from(wire))
    }
}

/// Lists the cuisines served in a city.
#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(default, setter(into), build_fn(error = "ValidationError"))]
pub struct CuisinesRequest {
    pub city_id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl CuisinesRequest {
    pub fn builder() -> CuisinesRequestBuilder {
        CuisinesRequestBuilder::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cuisine {
    #[serde(alias = "cuisine_id")]
    pub id: i64,
    #[serde(alias = "cuisine_name")]
    pub name: String,
}

impl Endpoint for CuisinesRequest {
    const NAME: &'static str = "cuisines";
    const PATH: &'static str = "/cuisines";
    type Wire = wire::CuisinesResponse;
    type Output = Vec<Cuisine>;

    fn query(&self) -> Query {
        Query::new()
            .push("city_id", &self.city_id)
            .push("lat", &self.latitude)
            .push("lon", &self.longitude)
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        Ok(unwrap_list(wire.cuisines.unwrap_or_default()))
    }
}

/// Lists establishment types (cafe, bar, fine dining, ...) in a city.
#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(default, setter(into), build_fn(error = "ValidationError"))]
pub struct EstablishmentsRequest {
    pub city_id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl EstablishmentsRequest {
    pub fn builder() -> EstablishmentsRequestBuilder {
        EstablishmentsRequestBuilder::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Establishment {
    pub id: i64,
    pub name: String,
}

impl Endpoint for EstablishmentsRequest {
    const NAME: &'static str = "establishments";
    const PATH: &'static str = "/establishments";
    type Wire = wire::EstablishmentsResponse;
    type Output = Vec<Establishment>;

    fn query(&self) -> Query {
        Query::new()
            .push("city_id", &self.city_id)
            .push("lat", &self.latitude)
            .push("lon", &self.longitude)
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        Ok(unwrap_list(wire.establishments.unwrap_or_default()))
    }
}

/// Foodie and nightlife index, top cuisines and nearby restaurants around a point.
#[derive(Builder, Clone, Copy, Debug, PartialEq)]
#[builder(build_fn(error = "ValidationError"))]
pub struct GeoCodeRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCodeRequest {
    pub fn builder() -> GeoCodeRequestBuilder {
        GeoCodeRequestBuilder::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Popularity {
    /// Foodie index out of 5.00
    pub popularity: Option<f64>,
    /// Nightlife index out of 5.00
    pub nightlife_index: Option<f64>,
    pub nearby_restaurant_ids: Vec<i64>,
    pub top_cuisines: Vec<String>,
    pub popularity_restaurant: Option<i64>,
    pub nightlife_restaurant: Option<i64>,
    pub subzone: Option<String>,
    pub subzone_id: Option<i64>,
    pub city: Option<String>,
}

impl TryFrom<wire::Popularity> for Popularity {
    type Error = DecodeError;

    fn try_from(popularity: wire::Popularity) -> Result<Self, DecodeError> {
        let mut nearby_restaurant_ids = Vec::new();
        for id in popularity.nearby_res.unwrap_or_default() {
            if let Some(id) = string_to_number("popularity.nearby_res", &id)? {
                nearby_restaurant_ids.push(id);
            }
        }
        Ok(Self {
            popularity: loose_f64("popularity.popularity", popularity.popularity)?,
            nightlife_index: loose_f64("popularity.nightlife_index", popularity.nightlife_index)?,
            nearby_restaurant_ids,
            top_cuisines: popularity.top_cuisines.unwrap_or_default(),
            popularity_restaurant: loose_i64("popularity.popularity_res", popularity.popularity_res)?,
            nightlife_restaurant: loose_i64("popularity.nightlife_res", popularity.nightlife_res)?,
            subzone: popularity.subzone,
            subzone_id: popularity.subzone_id,
            city: popularity.city,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeoCode {
    pub location: Option<Location>,
    pub popularity: Option<Popularity>,
    pub link: Option<String>,
    pub nearby_restaurants: Vec<Restaurant>,
}

impl TryFrom<wire::GeoCodeResponse> for GeoCode {
    type Error = DecodeError;

    fn try_from(response: wire::GeoCodeResponse) -> Result<Self, DecodeError> {
        Ok(Self {
            location: convert_opt(response.location)?,
            popularity: convert_opt(response.popularity)?,
            link: response.link,
            nearby_restaurants: convert_list(response.nearby_restaurants)?,
        })
    }
}

impl Endpoint for GeoCodeRequest {
    const NAME: &'static str = "geocode";
    const PATH: &'static str = "/geocode";
    type Wire = wire::GeoCodeResponse;
    type Output = GeoCode;

    fn validate(&self) -> Result<(), ValidationError> {
        require("lat", &self.latitude)?;
        require("lon", &self.longitude)
    }

    fn query(&self) -> Query {
        Query::new()
            .push("lat", &self.latitude)
            .push("lon", &self.longitude)
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        GeoCode::try_from(wire)
    }
}

impl_build_request!(
    CategoriesRequest,
    CitiesRequest,
    CollectionsRequest,
    CuisinesRequest,
    EstablishmentsRequest,
    GeoCodeRequest,
);
