//! Restaurant records and the endpoints keyed by a restaurant ID:
//! details, daily menus and reviews.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    api_interfaces::restaurant as wire,
    error::{DecodeError, ValidationError},
    normalize::{
        convert_all, convert_list, convert_opt, loose_f64, loose_i64, loose_string,
        opt_timestamp, split_csv, unix_timestamp, zero_one_to_bool,
    },
    request::{impl_build_request, require, Endpoint, Query},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: Option<String>,
    pub zomato_handle: Option<String>,
    pub foodie_level: Option<String>,
    #[serde(alias = "foodie_level_num")]
    pub foodie_level_number: Option<i64>,
    pub foodie_color: Option<String>,
    pub profile_url: Option<String>,
    #[serde(alias = "profile_deeplink")]
    pub profile_deeplink_url: Option<String>,
    #[serde(alias = "profile_image")]
    pub profile_image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RestaurantLocation {
    pub address: Option<String>,
    pub locality: Option<String>,
    pub city: Option<String>,
    pub city_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub zipcode: Option<i64>,
    pub country_id: Option<i64>,
    pub locality_verbose: Option<String>,
}

impl TryFrom<wire::RestaurantLocation> for RestaurantLocation {
    type Error = DecodeError;

    fn try_from(location: wire::RestaurantLocation) -> Result<Self, DecodeError> {
        Ok(Self {
            address: location.address,
            locality: location.locality,
            city: location.city,
            city_id: location.city_id,
            latitude: loose_f64("restaurant.location.latitude", location.latitude)?,
            longitude: loose_f64("restaurant.location.longitude", location.longitude)?,
            zipcode: loose_i64("restaurant.location.zipcode", location.zipcode)?,
            country_id: location.country_id,
            locality_verbose: location.locality_verbose,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserRating {
    /// Out of 5.0
    pub aggregate_rating: Option<f64>,
    pub rating_text: Option<String>,
    pub rating_color: Option<String>,
    pub votes: Option<i64>,
}

impl TryFrom<wire::UserRating> for UserRating {
    type Error = DecodeError;

    fn try_from(rating: wire::UserRating) -> Result<Self, DecodeError> {
        Ok(Self {
            aggregate_rating: loose_f64("user_rating.aggregate_rating", rating.aggregate_rating)?,
            rating_text: rating.rating_text,
            rating_color: rating.rating_color,
            votes: loose_i64("user_rating.votes", rating.votes)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Photo {
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub order: Option<i64>,
    pub md5sum: Option<String>,
    pub photo_id: Option<i64>,
    pub uuid: Option<i64>,
    pub kind: Option<String>,
    pub id: Option<String>,
    pub user: Option<User>,
    pub restaurant_id: Option<i64>,
    pub caption: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub friendly_time: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub comments_count: Option<i64>,
    pub likes_count: Option<i64>,
}

impl TryFrom<wire::Photo> for Photo {
    type Error = DecodeError;

    fn try_from(photo: wire::Photo) -> Result<Self, DecodeError> {
        Ok(Self {
            url: photo.url,
            thumbnail_url: photo.thumb_url,
            order: photo.order,
            md5sum: photo.md5sum,
            photo_id: photo.photo_id,
            uuid: photo.uuid,
            kind: photo.kind,
            id: loose_string(photo.id),
            user: photo.user,
            restaurant_id: loose_i64("photo.res_id", photo.res_id)?,
            caption: photo.caption,
            timestamp: unix_timestamp("photo.timestamp", photo.timestamp)?,
            friendly_time: photo.friendly_time,
            width: loose_i64("photo.width", photo.width)?,
            height: loose_i64("photo.height", photo.height)?,
            comments_count: loose_i64("photo.comments_count", photo.comments_count)?,
            likes_count: loose_i64("photo.likes_count", photo.likes_count)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Review {
    pub id: Option<i64>,
    pub rating: Option<f64>,
    pub review_text: Option<String>,
    pub rating_color: Option<String>,
    pub review_time_friendly: Option<String>,
    pub rating_text: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub likes: Option<i64>,
    pub user: Option<User>,
    pub comments_count: Option<i64>,
}

impl TryFrom<wire::Review> for Review {
    type Error = DecodeError;

    fn try_from(review: wire::Review) -> Result<Self, DecodeError> {
        Ok(Self {
            id: loose_i64("review.id", review.id)?,
            rating: loose_f64("review.rating", review.rating)?,
            review_text: review.review_text,
            rating_color: review.rating_color,
            review_time_friendly: review.review_time_friendly,
            rating_text: review.rating_text,
            timestamp: unix_timestamp("review.timestamp", review.timestamp)?,
            likes: loose_i64("review.likes", review.likes)?,
            user: review.user,
            comments_count: loose_i64("review.comments_count", review.comments_count)?,
        })
    }
}

/// A promotion or happening hosted at one or more restaurants.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    pub id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub date_added: Option<NaiveDateTime>,
    pub is_active: Option<bool>,
    pub is_valid: Option<bool>,
    pub show_share_url: Option<bool>,
    pub is_end_time_set: Option<bool>,
    pub photos: Vec<Photo>,
    pub restaurants: Vec<Restaurant>,
    pub share_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_time: Option<String>,
    pub display_date: Option<String>,
    pub disclaimer: Option<String>,
    pub category: Option<i64>,
    pub category_name: Option<String>,
    pub book_link_url: Option<String>,
    pub friendly_start_date: Option<String>,
    pub friendly_end_date: Option<String>,
    pub friendly_timing: Option<String>,
}

impl TryFrom<wire::Event> for Event {
    type Error = DecodeError;

    fn try_from(event: wire::Event) -> Result<Self, DecodeError> {
        Ok(Self {
            id: event.event_id,
            start_date: opt_timestamp("event.start_date", event.start_date.as_deref())?,
            end_date: opt_timestamp("event.end_date", event.end_date.as_deref())?,
            start_time: opt_timestamp("event.start_time", event.start_time.as_deref())?,
            end_time: opt_timestamp("event.end_time", event.end_time.as_deref())?,
            date_added: opt_timestamp("event.date_added", event.date_added.as_deref())?,
            is_active: zero_one_to_bool(event.is_active),
            is_valid: zero_one_to_bool(event.is_valid),
            show_share_url: zero_one_to_bool(event.show_share_url),
            is_end_time_set: zero_one_to_bool(event.is_end_time_set),
            photos: convert_list(event.photos)?,
            restaurants: convert_all(event.restaurants)?,
            share_url: event.share_url,
            title: event.title,
            description: event.description,
            display_time: event.display_time,
            display_date: event.display_date,
            disclaimer: event.disclaimer,
            category: event.event_category,
            category_name: event.event_category_name,
            book_link_url: event.book_link,
            friendly_start_date: event.friendly_start_date,
            friendly_end_date: event.friendly_end_date,
            friendly_timing: event.friendly_timing_str,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub location: Option<RestaurantLocation>,
    pub cuisines: Vec<String>,
    pub average_cost_for_two: Option<i64>,
    /// 1 (cheapest) to 4
    pub price_range: Option<u8>,
    pub currency: Option<String>,
    pub user_rating: Option<UserRating>,
    pub thumbnail_url: Option<String>,
    pub photos_url: Option<String>,
    pub menu_url: Option<String>,
    pub featured_image_url: Option<String>,
    pub events_url: Option<String>,
    pub deeplink_url: Option<String>,
    pub order_url: Option<String>,
    pub order_deeplink_url: Option<String>,
    pub book_url: Option<String>,
    pub has_online_delivery: Option<bool>,
    pub is_delivering_now: Option<bool>,
    pub has_table_booking: Option<bool>,
    pub switch_to_order_menu: Option<bool>,
    pub offers: Vec<Value>,
    pub establishment_types: Vec<Value>,
    pub events: Vec<Event>,
    pub api_key: Option<String>,
    pub reference_id: Option<i64>,
    pub review_count: Option<i64>,
    pub photo_count: Option<i64>,
    pub phone_numbers: Vec<String>,
    pub photos: Vec<Photo>,
    pub reviews: Vec<Review>,
}

impl TryFrom<wire::Restaurant> for Restaurant {
    type Error = DecodeError;

    fn try_from(restaurant: wire::Restaurant) -> Result<Self, DecodeError> {
        Ok(Self {
            id: loose_i64("restaurant.id", restaurant.id)?,
            name: restaurant.name,
            url: restaurant.url,
            location: convert_opt(restaurant.location)?,
            cuisines: split_csv(restaurant.cuisines.as_deref().unwrap_or_default()),
            average_cost_for_two: restaurant.average_cost_for_two,
            price_range: restaurant.price_range,
            currency: restaurant.currency,
            user_rating: convert_opt(restaurant.user_rating)?,
            thumbnail_url: restaurant.thumb,
            photos_url: restaurant.photos_url,
            menu_url: restaurant.menu_url,
            featured_image_url: restaurant.featured_image,
            events_url: restaurant.events_url,
            deeplink_url: restaurant.deeplink,
            order_url: restaurant.order_url,
            order_deeplink_url: restaurant.order_deeplink,
            book_url: restaurant.book_url,
            has_online_delivery: zero_one_to_bool(restaurant.has_online_delivery),
            is_delivering_now: zero_one_to_bool(restaurant.is_delivering_now),
            has_table_booking: zero_one_to_bool(restaurant.has_table_booking),
            switch_to_order_menu: zero_one_to_bool(restaurant.switch_to_order_menu),
            offers: restaurant.offers.unwrap_or_default(),
            establishment_types: restaurant.establishment_types.unwrap_or_default(),
            events: convert_list(restaurant.zomato_events)?,
            api_key: restaurant.apikey,
            reference_id: loose_i64("restaurant.R.res_id", restaurant.r.and_then(|r| r.res_id))?,
            review_count: restaurant.all_reviews_count,
            photo_count: restaurant.photo_count,
            phone_numbers: split_csv(restaurant.phone_numbers.as_deref().unwrap_or_default()),
            photos: convert_all(restaurant.photos)?,
            reviews: convert_all(restaurant.all_reviews)?,
        })
    }
}

/// Full details of one restaurant.
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq)]
#[builder(build_fn(error = "ValidationError"))]
pub struct RestaurantRequest {
    pub restaurant_id: i64,
}

impl RestaurantRequest {
    pub fn builder() -> RestaurantRequestBuilder {
        RestaurantRequestBuilder::default()
    }
}

impl Endpoint for RestaurantRequest {
    const NAME: &'static str = "restaurant";
    const PATH: &'static str = "/restaurant";
    type Wire = wire::Restaurant;
    type Output = Restaurant;

    fn validate(&self) -> Result<(), ValidationError> {
        require("res_id", &self.restaurant_id)
    }

    fn query(&self) -> Query {
        Query::new().push("res_id", &self.restaurant_id)
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        Restaurant::try_from(wire)
    }
}

/// Today's menus of a restaurant, where the restaurant publishes them.
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq)]
#[builder(build_fn(error = "ValidationError"))]
pub struct DailyMenuRequest {
    pub restaurant_id: i64,
}

impl DailyMenuRequest {
    pub fn builder() -> DailyMenuRequestBuilder {
        DailyMenuRequestBuilder::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dish {
    pub id: Option<i64>,
    pub name: Option<String>,
    /// Display price including the currency symbol
    pub price: Option<String>,
}

impl TryFrom<wire::Dish> for Dish {
    type Error = DecodeError;

    fn try_from(dish: wire::Dish) -> Result<Self, DecodeError> {
        Ok(Self {
            id: loose_i64("dish.dish_id", dish.dish_id)?,
            name: dish.name,
            price: dish.price,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyMenu {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub dishes: Vec<Dish>,
}

impl TryFrom<wire::DailyMenu> for DailyMenu {
    type Error = DecodeError;

    fn try_from(menu: wire::DailyMenu) -> Result<Self, DecodeError> {
        Ok(Self {
            id: loose_i64("daily_menu.daily_menu_id", menu.daily_menu_id)?,
            name: menu.name,
            start_date: opt_timestamp("daily_menu.start_date", menu.start_date.as_deref())?,
            end_date: opt_timestamp("daily_menu.end_date", menu.end_date.as_deref())?,
            dishes: convert_list(menu.dishes)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyMenus {
    pub status: Option<String>,
    pub daily_menus: Vec<DailyMenu>,
}

impl TryFrom<wire::DailyMenuResponse> for DailyMenus {
    type Error = DecodeError;

    fn try_from(response: wire::DailyMenuResponse) -> Result<Self, DecodeError> {
        Ok(Self {
            status: response.status,
            daily_menus: convert_list(response.daily_menus)?,
        })
    }
}

impl Endpoint for DailyMenuRequest {
    const NAME: &'static str = "daily_menu";
    const PATH: &'static str = "/dailymenu";
    type Wire = wire::DailyMenuResponse;
    type Output = DailyMenus;

    fn validate(&self) -> Result<(), ValidationError> {
        require("res_id", &self.restaurant_id)
    }

    fn query(&self) -> Query {
        Query::new().push("res_id", &self.restaurant_id)
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        DailyMenus::try_from(wire)
    }
}

/// A page of user reviews for one restaurant.
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq)]
#[builder(build_fn(error = "ValidationError"))]
pub struct ReviewsRequest {
    pub restaurant_id: i64,
    /// Offset of the first review
    #[builder(default)]
    pub start: u64,
    #[builder(default)]
    pub count: u64,
}

impl ReviewsRequest {
    pub fn builder() -> ReviewsRequestBuilder {
        ReviewsRequestBuilder::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Reviews {
    pub review_count: Option<i64>,
    pub reviews_start: Option<i64>,
    pub reviews_shown: Option<i64>,
    pub user_reviews: Vec<Review>,
    pub dashboard_url: Option<String>,
}

impl TryFrom<wire::ReviewsResponse> for Reviews {
    type Error = DecodeError;

    fn try_from(response: wire::ReviewsResponse) -> Result<Self, DecodeError> {
        Ok(Self {
            review_count: response.reviews_count,
            reviews_start: response.reviews_start,
            reviews_shown: response.reviews_shown,
            user_reviews: convert_list(response.user_reviews)?,
            dashboard_url: response.dashboard_url,
        })
    }
}

impl Endpoint for ReviewsRequest {
    const NAME: &'static str = "reviews";
    const PATH: &'static str = "/reviews";
    type Wire = wire::ReviewsResponse;
    type Output = Reviews;

    fn validate(&self) -> Result<(), ValidationError> {
        require("res_id", &self.restaurant_id)
    }

    fn query(&self) -> Query {
        Query::new()
            .push("res_id", &self.restaurant_id)
            .push("start", &self.start)
            .push("count", &self.count)
    }

    fn normalize(wire: Self::Wire) -> Result<Self::Output, DecodeError> {
        Reviews::try_from(wire)
    }
}

impl_build_request!(RestaurantRequest, DailyMenuRequest, ReviewsRequest);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::BuildRequest;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn restaurant_json() -> serde_json::Value {
        json!({
            "R": {"res_id": 463},
            "apikey": "abc",
            "id": "463",
            "name": "Pind Balluchi",
            "url": "https://www.zomato.com/ncr/pind-balluchi",
            "location": {
                "address": "A-2, Connaught Place",
                "locality": "Connaught Place",
                "city": "New Delhi",
                "city_id": 1,
                "latitude": "28.6328",
                "longitude": "77.2197",
                "zipcode": "110001",
                "country_id": 1,
                "locality_verbose": "Connaught Place, New Delhi"
            },
            "switch_to_order_menu": 0,
            "cuisines": "North Indian, Mughlai,",
            "average_cost_for_two": 1500,
            "price_range": 3,
            "currency": "Rs.",
            "offers": [{"offer": {"id": 1}}],
            "thumb": "https://b.zmtcdn.com/thumb.jpg",
            "user_rating": {
                "aggregate_rating": "3.9",
                "rating_text": "Good",
                "rating_color": "9ACD32",
                "votes": "1046"
            },
            "photos_url": "https://www.zomato.com/photos",
            "menu_url": "https://www.zomato.com/menu",
            "featured_image": "https://b.zmtcdn.com/featured.jpg",
            "has_online_delivery": 1,
            "is_delivering_now": 0,
            "deeplink": "zomato://restaurant/463",
            "has_table_booking": 1,
            "events_url": "https://www.zomato.com/events",
            "establishment_types": [],
            "all_reviews_count": 12,
            "photo_count": 3,
            "phone_numbers": "011 43502221, 011 43502222",
            "photos": [{
                "id": "u_123",
                "url": "https://b.zmtcdn.com/p.jpg",
                "thumb_url": "https://b.zmtcdn.com/p_thumb.jpg",
                "res_id": 463,
                "caption": "",
                "timestamp": 1500000000,
                "width": "640",
                "height": 480,
                "likes_count": 0,
                "comments_count": 0,
                "user": {"name": "Aanya", "profile_image": "https://b.zmtcdn.com/u.jpg"}
            }],
            "all_reviews": [{
                "id": 32,
                "rating": 4,
                "review_text": "Great dal",
                "timestamp": "1500000000",
                "likes": "2",
                "comments_count": 0
            }]
        })
    }

    #[test]
    fn restaurant_request_encodes_res_id() {
        let raw = RestaurantRequest { restaurant_id: 463 }.build_request().unwrap();
        assert_eq!(raw.url.path(), "/api/v2.1/restaurant");
        assert_eq!(raw.url.query(), Some("res_id=463"));
    }

    #[test]
    fn restaurant_id_is_required() {
        assert_eq!(
            RestaurantRequest::builder().build().unwrap_err(),
            ValidationError::Required("restaurant_id")
        );
        assert_eq!(
            RestaurantRequest { restaurant_id: 0 }.validate(),
            Err(ValidationError::Required("res_id"))
        );
        assert_eq!(
            DailyMenuRequest { restaurant_id: 0 }.validate(),
            Err(ValidationError::Required("res_id"))
        );
        assert_eq!(
            ReviewsRequest::builder().restaurant_id(0).build().unwrap().validate(),
            Err(ValidationError::Required("res_id"))
        );
    }

    #[test]
    fn reviews_request_encodes_paging() {
        let request = ReviewsRequest::builder()
            .restaurant_id(463)
            .start(20)
            .count(10)
            .build()
            .unwrap();
        let raw = request.build_request().unwrap();
        assert_eq!(raw.url.path(), "/api/v2.1/reviews");
        assert_eq!(raw.url.query(), Some("res_id=463&start=20&count=10"));
    }

    #[test]
    fn restaurant_normalizes_wire_quirks() {
        let restaurant =
            RestaurantRequest::decode(restaurant_json().to_string().as_bytes()).unwrap();

        assert_eq!(restaurant.id, Some(463));
        assert_eq!(restaurant.reference_id, Some(463));
        assert_eq!(restaurant.api_key.as_deref(), Some("abc"));
        assert_eq!(restaurant.cuisines, vec!["North Indian", "Mughlai"]);
        assert_eq!(restaurant.phone_numbers, vec!["011 43502221", "011 43502222"]);
        assert_eq!(restaurant.has_online_delivery, Some(true));
        assert_eq!(restaurant.is_delivering_now, None);
        assert_eq!(restaurant.switch_to_order_menu, None);
        assert_eq!(restaurant.has_table_booking, Some(true));
        assert_eq!(restaurant.thumbnail_url.as_deref(), Some("https://b.zmtcdn.com/thumb.jpg"));
        assert_eq!(restaurant.deeplink_url.as_deref(), Some("zomato://restaurant/463"));
        assert_eq!(restaurant.offers, vec![json!({"offer": {"id": 1}})]);
        assert!(restaurant.establishment_types.is_empty());
        assert!(restaurant.events.is_empty());
        assert_eq!(restaurant.review_count, Some(12));

        let location = restaurant.location.unwrap();
        assert_eq!(location.zipcode, Some(110001));
        assert_eq!(location.latitude, Some(28.6328));

        let rating = restaurant.user_rating.unwrap();
        assert_eq!(rating.aggregate_rating, Some(3.9));
        assert_eq!(rating.votes, Some(1046));
    }

    #[test]
    fn restaurant_photos_and_reviews() {
        let restaurant =
            RestaurantRequest::decode(restaurant_json().to_string().as_bytes()).unwrap();
        let posted = Utc.with_ymd_and_hms(2017, 7, 14, 2, 40, 0).unwrap();

        let photo = &restaurant.photos[0];
        assert_eq!(photo.id.as_deref(), Some("u_123"));
        assert_eq!(photo.restaurant_id, Some(463));
        assert_eq!(photo.timestamp, Some(posted));
        assert_eq!((photo.width, photo.height), (Some(640), Some(480)));
        assert_eq!(
            photo.user.as_ref().and_then(|u| u.profile_image_url.as_deref()),
            Some("https://b.zmtcdn.com/u.jpg")
        );

        let review = &restaurant.reviews[0];
        assert_eq!(review.id, Some(32));
        assert_eq!(review.rating, Some(4.0));
        assert_eq!(review.timestamp, Some(posted));
        assert_eq!(review.likes, Some(2));
    }

    #[test]
    fn restaurant_reports_malformed_zipcode() {
        let mut body = restaurant_json();
        body["location"]["zipcode"] = json!("CP-01");
        let err = RestaurantRequest::decode(body.to_string().as_bytes()).unwrap_err();
        assert_eq!(err.field_name(), Some("restaurant.location.zipcode"));
    }

    #[test]
    fn restaurant_with_blank_fields_is_absent_not_zero() {
        let restaurant = RestaurantRequest::decode(br#"{"cuisines": "", "id": ""}"#).unwrap();
        assert_eq!(restaurant.id, None);
        assert!(restaurant.cuisines.is_empty());
        assert!(restaurant.phone_numbers.is_empty());
        assert_eq!(restaurant.location, None);
    }

    #[test]
    fn restaurant_events_unwrap_and_parse_dates() {
        let body = json!({
            "id": 463,
            "zomato_events": [{
                "event": {
                    "event_id": 7,
                    "start_date": "2019-06-30",
                    "end_date": "",
                    "start_time": "19:30:00",
                    "end_time": "23:00:00",
                    "date_added": "2019-06-01 10:15:00",
                    "is_active": 1,
                    "is_valid": 1,
                    "show_share_url": 0,
                    "is_end_time_set": 1,
                    "photos": [{"photo": {"url": "https://b.zmtcdn.com/e.jpg"}}],
                    "restaurants": [],
                    "title": "Live Music",
                    "event_category": 2,
                    "event_category_name": "Music",
                    "book_link": "https://example.com/book",
                    "friendly_timing_str": "Sunday, 30th June"
                }
            }]
        });
        let restaurant = RestaurantRequest::decode(body.to_string().as_bytes()).unwrap();
        let event = &restaurant.events[0];
        assert_eq!(event.id, Some(7));
        assert_eq!(event.start_date, NaiveDate::from_ymd_opt(2019, 6, 30));
        assert_eq!(event.end_date, None);
        assert_eq!(event.start_time, NaiveTime::from_hms_opt(19, 30, 0));
        assert_eq!(
            event.date_added,
            NaiveDate::from_ymd_opt(2019, 6, 1).and_then(|d| d.and_hms_opt(10, 15, 0))
        );
        assert_eq!(event.is_active, Some(true));
        assert_eq!(event.show_share_url, None);
        assert_eq!(event.photos.len(), 1);
        assert_eq!(event.category_name.as_deref(), Some("Music"));
        assert_eq!(event.book_link_url.as_deref(), Some("https://example.com/book"));
        assert_eq!(event.friendly_timing.as_deref(), Some("Sunday, 30th June"));
    }

    #[test]
    fn event_with_wrong_date_format_names_field() {
        let body = json!({
            "zomato_events": [{"event": {"start_date": "30/06/2019"}}]
        });
        let err = RestaurantRequest::decode(body.to_string().as_bytes()).unwrap_err();
        assert_eq!(err.field_name(), Some("event.start_date"));
    }

    #[test]
    fn daily_menu_decodes_dishes() {
        let body = json!({
            "status": "success",
            "daily_menus": [{
                "daily_menu": {
                    "daily_menu_id": "16507624",
                    "name": "Vinohradský pivovar",
                    "start_date": "2016-03-08 11:00:00",
                    "end_date": "2016-03-08 15:00:00",
                    "dishes": [
                        {"dish": {"dish_id": "104089345", "name": "Tatarák", "price": "149 Kč"}},
                        {"dish": null}
                    ]
                }
            }]
        });
        let menus = DailyMenuRequest::decode(body.to_string().as_bytes()).unwrap();
        assert_eq!(menus.status.as_deref(), Some("success"));
        let menu = &menus.daily_menus[0];
        assert_eq!(menu.id, Some(16507624));
        assert_eq!(
            menu.start_date,
            NaiveDate::from_ymd_opt(2016, 3, 8).and_then(|d| d.and_hms_opt(11, 0, 0))
        );
        assert_eq!(
            menu.dishes,
            vec![Dish {
                id: Some(104089345),
                name: Some("Tatarák".to_string()),
                price: Some("149 Kč".to_string()),
            }]
        );
    }

    #[test]
    fn reviews_decode_dashboard_link() {
        let body = json!({
            "reviews_count": 2,
            "reviews_start": 0,
            "reviews_shown": 1,
            "user_reviews": [{
                "review": {
                    "id": "1",
                    "rating": "4.5",
                    "review_text": "Lovely",
                    "timestamp": 0,
                    "user": {"name": "Kabir", "foodie_level_num": 3}
                }
            }],
            "Respond to reviews via Zomato Dashboard": "https://www.zomato.com/business/apps"
        });
        let reviews = ReviewsRequest::decode(body.to_string().as_bytes()).unwrap();
        assert_eq!(reviews.review_count, Some(2));
        assert_eq!(
            reviews.dashboard_url.as_deref(),
            Some("https://www.zomato.com/business/apps")
        );
        let review = &reviews.user_reviews[0];
        assert_eq!(review.rating, Some(4.5));
        assert_eq!(review.timestamp, None);
        assert_eq!(
            review.user.as_ref().and_then(|u| u.foodie_level_number),
            Some(3)
        );
    }
}
