#![recursion_limit = "256"]

mod api_interfaces;
mod api_key;
pub mod client;
pub mod common;
pub mod constants;
pub mod error;
pub mod location;
pub mod normalize;
pub mod request;
pub mod restaurant;
pub mod search;
mod util;

pub use api_key::{ApiKey, API_KEY_ENV};
pub use client::{Client, ClientConfig, ClientConfigError, ClientInitError};
pub use common::{
    CategoriesRequest, Category, Cities, CitiesRequest, City, Collection, Collections,
    CollectionsRequest, Cuisine, CuisinesRequest, EntityType, Establishment,
    EstablishmentsRequest, GeoCode, GeoCodeRequest, Order, Popularity, Sort,
};
pub use error::{ApiError, DecodeError, Error, ValidationError};
pub use location::{Location, LocationDetails, LocationDetailsRequest, Locations, LocationsRequest};
pub use request::{authenticate, Authenticated, BuildRequest, Endpoint, RawRequest};
pub use restaurant::{
    DailyMenu, DailyMenuRequest, DailyMenus, Dish, Event, Photo, Restaurant, RestaurantLocation,
    RestaurantRequest, Review, Reviews, ReviewsRequest, User, UserRating,
};
pub use search::{SearchRequest, SearchResults};
pub use tokio_util::sync::CancellationToken;
pub use util::default_http_client;
