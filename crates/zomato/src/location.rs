use derive_builder::Builder;
use serde::Serialize;

use crate::{
    api_interfaces::location as wire,
    common::EntityType,
    error::{DecodeError, ValidationError},
    normalize::{convert_all, convert_list, convert_opt, loose_f64, loose_i64, unwrap_list, zero_one_to_bool},
    request::{impl_build_request, require, Endpoint, Query},
    restaurant::{Restaurant, User},
};

/// A point or area the API knows as a search entity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Location {
    pub entity_type: Option<String>,
    pub entity_id: Option<i64>,
    pub title: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city_id: Option<i64>,
    pub city_name: Option<String>,
    pub country_id: Option<i64>,
    pub country_name: Option<String>,
}

impl TryFrom<wire::Location> for Location {
    type Error = DecodeError;

    fn try_from(location: wire::Location) -> Result<Self, DecodeError> {
        Ok(Self {
            entity_type: location.entity_type,
            entity_id: location.entity_id,
            title: location.title,
            latitude: loose_f64("location.latitude", location.latitude)?,
            longitude: loose_f64("location.longitude", location.longitude)?,
            city_id: location.city_id,
            city_name: location.city_name,
            country_id: location.country_id,
            country_name: location.country_name,
        })
    }
}

/// Popularity, top restaurants and top reviewers of one location entity.
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq)]
#[builder(build_fn(error = "ValidationError"))]
pub struct LocationDetailsRequest {
    pub entity_id: i64,
    pub entity_type: EntityType,
}

impl LocationDetailsRequest {
    pub fn builder() -> LocationDetailsRequestBuilder {
        LocationDetailsRequestBuilder::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationDetails {
    pub location: Option<Location>,
    pub restaurant_count: Option<i64>,
    pub best_rated_restaurants: Vec<Restaurant>,
    pub experts: Vec<User>,
}

impl TryFrom<wire::LocationDetailsResponse> for LocationDetails {
    type Error = DecodeError;

    fn try_from(response: wire::LocationDetailsResponse) -> Result<Self, DecodeError> {
        Ok(Self {
            location: convert_opt(response.location)?,
            restaurant_count: loose_i64("num_restaurant", response.num_restaurant)?,
            best_rated_restaurants: convert_list(response.best_rated_restaurant)?,
            experts: unwrap_list(response.experts.unwrap_or_default()),
        })
    }
}

impl Endpoint for LocationDetailsRequest {
    const NAME: &'static str = "location_details";
    const PATH: &'static str = "/location_details";
    type Wire = wire::LocationDetailsResponse;
    type Output = LocationDetails;

    fn validate(&self) -> Result<(), ValidationError> {
        require("entity_id", &self.entity_id)
    }

    fn query(&self) -> Query {
        Query::new()
            .push("entity_id", &self.entity_id)
            .push("entity_type", &self.entity_type)
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        LocationDetails::try_from(wire)
    }
}

/// Resolves free text into location entities.
#[derive(Builder, Clone, Debug, Default, PartialEq)]
#[builder(setter(into), build_fn(error = "ValidationError"))]
pub struct LocationsRequest {
    /// Text to search for, e.g. a neighbourhood name
    pub query: String,
    #[builder(default)]
    pub latitude: f64,
    #[builder(default)]
    pub longitude: f64,
    #[builder(default)]
    pub count: u64,
}

impl LocationsRequest {
    pub fn builder() -> LocationsRequestBuilder {
        LocationsRequestBuilder::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Locations {
    pub location_suggestions: Vec<Location>,
    pub status: Option<String>,
    pub has_more: Option<bool>,
    pub has_total: Option<bool>,
}

impl TryFrom<wire::LocationsResponse> for Locations {
    type Error = DecodeError;

    fn try_from(response: wire::LocationsResponse) -> Result<Self, DecodeError> {
        Ok(Self {
            location_suggestions: convert_all(response.location_suggestions)?,
            status: response.status,
            has_more: zero_one_to_bool(response.has_more),
            has_total: zero_one_to_bool(response.has_total),
        })
    }
}

impl Endpoint for LocationsRequest {
    const NAME: &'static str = "locations";
    const PATH: &'static str = "/locations";
    type Wire = wire::LocationsResponse;
    type Output = Locations;

    fn validate(&self) -> Result<(), ValidationError> {
        require("query", &self.query)
    }

    fn query(&self) -> Query {
        Query::new()
            .push("query", &self.query)
            .push("lat", &self.latitude)
            .push("lon", &self.longitude)
            .push("count", &self.count)
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        Locations::try_from(wire)
    }
}

impl_build_request!(LocationDetailsRequest, LocationsRequest);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, request::BuildRequest};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn location_details_request_encodes_entity() {
        let request = LocationDetailsRequest::builder()
            .entity_id(36932)
            .entity_type(EntityType::Group)
            .build()
            .unwrap();
        let raw = request.build_request().unwrap();
        assert_eq!(raw.url.path(), "/api/v2.1/location_details");
        assert_eq!(raw.url.query(), Some("entity_id=36932&entity_type=group"));
    }

    #[test]
    fn location_details_builder_requires_entity_type() {
        let err = LocationDetailsRequest::builder()
            .entity_id(36932)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::Required("entity_type"));
    }

    #[test]
    fn location_details_rejects_zero_entity_id() {
        let err = LocationDetailsRequest {
            entity_id: 0,
            entity_type: EntityType::City,
        }
        .build_request()
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                endpoint: "location_details",
                source: ValidationError::Required("entity_id")
            }
        ));
    }

    #[test]
    fn locations_request_requires_query() {
        assert_eq!(
            LocationsRequest::builder().count(5u64).build().unwrap_err(),
            ValidationError::Required("query")
        );
        let blank = LocationsRequest {
            query: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(blank.validate(), Err(ValidationError::Required("query")));
    }

    #[test]
    fn locations_request_encodes_params() {
        let request = LocationsRequest::builder()
            .query("connaught place")
            .count(2u64)
            .build()
            .unwrap();
        let raw = request.build_request().unwrap();
        assert_eq!(raw.url.query(), Some("query=connaught+place&count=2"));
    }

    #[test]
    fn locations_decode_quoted_coordinates() {
        let body = json!({
            "location_suggestions": [{
                "entity_type": "subzone",
                "entity_id": 289,
                "title": "Connaught Place, New Delhi",
                "latitude": "28.6321",
                "longitude": 77.2195,
                "city_id": 1,
                "city_name": "Delhi NCR",
                "country_id": 1,
                "country_name": "India"
            }],
            "status": "success",
            "has_more": 0,
            "has_total": 0
        });
        let locations = LocationsRequest::decode(body.to_string().as_bytes()).unwrap();
        assert_eq!(
            locations.location_suggestions,
            vec![Location {
                entity_type: Some("subzone".to_string()),
                entity_id: Some(289),
                title: Some("Connaught Place, New Delhi".to_string()),
                latitude: Some(28.6321),
                longitude: Some(77.2195),
                city_id: Some(1),
                city_name: Some("Delhi NCR".to_string()),
                country_id: Some(1),
                country_name: Some("India".to_string()),
            }]
        );
        assert_eq!(locations.has_more, None);
    }

    #[test]
    fn locations_reject_malformed_latitude() {
        let body = json!({"location_suggestions": [{"latitude": "north"}]});
        let err = LocationsRequest::decode(body.to_string().as_bytes()).unwrap_err();
        assert_eq!(err.field_name(), Some("location.latitude"));
    }

    #[test]
    fn location_details_unwrap_restaurants_and_experts() {
        let body = json!({
            "location": {"entity_type": "group", "entity_id": 36932},
            "num_restaurant": "1200",
            "best_rated_restaurant": [
                {"restaurant": {"id": "18238", "name": "Indian Accent"}},
                {}
            ],
            "experts": [
                {"user": {"name": "Foodie", "foodie_level_num": 10}}
            ]
        });
        let details = LocationDetailsRequest::decode(body.to_string().as_bytes()).unwrap();
        assert_eq!(details.restaurant_count, Some(1200));
        assert_eq!(details.best_rated_restaurants.len(), 1);
        assert_eq!(details.best_rated_restaurants[0].id, Some(18238));
        assert_eq!(details.experts[0].name.as_deref(), Some("Foodie"));
        assert_eq!(details.experts[0].foodie_level_number, Some(10));
    }
}
