use serde::Deserialize;
use serde_json::Value;

use super::Loose;
use crate::restaurant::User;

wrapper!(RestaurantEntry { restaurant: Restaurant });
wrapper!(DailyMenuEntry { daily_menu: DailyMenu });
wrapper!(DishEntry { dish: Dish });
wrapper!(EventEntry { event: Event });
wrapper!(PhotoEntry { photo: Photo });
wrapper!(ReviewEntry { review: Review });

#[derive(Debug, Deserialize)]
pub struct DailyMenuResponse {
    pub status: Option<String>,
    pub daily_menus: Option<Vec<DailyMenuEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct DailyMenu {
    pub daily_menu_id: Option<Loose>,
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub dishes: Option<Vec<DishEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct Dish {
    pub dish_id: Option<Loose>,
    pub name: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Restaurant {
    pub id: Option<Loose>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub location: Option<RestaurantLocation>,
    pub cuisines: Option<String>,
    pub average_cost_for_two: Option<i64>,
    pub price_range: Option<u8>,
    pub currency: Option<String>,
    pub user_rating: Option<UserRating>,
    pub thumb: Option<String>,
    pub photos_url: Option<String>,
    pub menu_url: Option<String>,
    pub featured_image: Option<String>,
    pub events_url: Option<String>,
    pub deeplink: Option<String>,
    pub order_url: Option<String>,
    pub order_deeplink: Option<String>,
    pub book_url: Option<String>,
    pub has_online_delivery: Option<u8>,
    pub is_delivering_now: Option<u8>,
    pub has_table_booking: Option<u8>,
    pub switch_to_order_menu: Option<u8>,
    // Structure undocumented upstream; passed through untouched.
    pub offers: Option<Vec<Value>>,
    pub establishment_types: Option<Vec<Value>>,
    pub zomato_events: Option<Vec<EventEntry>>,
    pub apikey: Option<String>,
    #[serde(rename = "R")]
    pub r: Option<RestaurantRef>,
    pub all_reviews_count: Option<i64>,
    pub photo_count: Option<i64>,
    pub phone_numbers: Option<String>,
    pub photos: Option<Vec<Photo>>,
    pub all_reviews: Option<Vec<Review>>,
}

#[derive(Debug, Deserialize)]
pub struct RestaurantRef {
    pub res_id: Option<Loose>,
}

#[derive(Debug, Deserialize)]
pub struct RestaurantLocation {
    pub address: Option<String>,
    pub locality: Option<String>,
    pub city: Option<String>,
    pub city_id: Option<i64>,
    pub latitude: Option<Loose>,
    pub longitude: Option<Loose>,
    pub zipcode: Option<Loose>,
    pub country_id: Option<i64>,
    pub locality_verbose: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserRating {
    pub aggregate_rating: Option<Loose>,
    pub rating_text: Option<String>,
    pub rating_color: Option<String>,
    pub votes: Option<Loose>,
}

#[derive(Debug, Deserialize)]
pub struct Photo {
    pub url: Option<String>,
    pub thumb_url: Option<String>,
    pub order: Option<i64>,
    pub md5sum: Option<String>,
    pub photo_id: Option<i64>,
    pub uuid: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<Loose>,
    pub user: Option<User>,
    pub res_id: Option<Loose>,
    pub caption: Option<String>,
    pub timestamp: Option<Loose>,
    pub friendly_time: Option<String>,
    pub width: Option<Loose>,
    pub height: Option<Loose>,
    pub comments_count: Option<Loose>,
    pub likes_count: Option<Loose>,
}

#[derive(Debug, Deserialize)]
pub struct Event {
    pub event_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub date_added: Option<String>,
    pub is_active: Option<u8>,
    pub is_valid: Option<u8>,
    pub show_share_url: Option<u8>,
    pub is_end_time_set: Option<u8>,
    pub photos: Option<Vec<PhotoEntry>>,
    pub restaurants: Option<Vec<Restaurant>>,
    pub share_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_time: Option<String>,
    pub display_date: Option<String>,
    pub disclaimer: Option<String>,
    pub event_category: Option<i64>,
    pub event_category_name: Option<String>,
    pub book_link: Option<String>,
    pub friendly_start_date: Option<String>,
    pub friendly_end_date: Option<String>,
    pub friendly_timing_str: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewsResponse {
    pub reviews_count: Option<i64>,
    pub reviews_start: Option<i64>,
    pub reviews_shown: Option<i64>,
    pub user_reviews: Option<Vec<ReviewEntry>>,
    #[serde(rename = "Respond to reviews via Zomato Dashboard")]
    pub dashboard_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Review {
    pub id: Option<Loose>,
    pub rating: Option<Loose>,
    pub review_text: Option<String>,
    pub rating_color: Option<String>,
    pub review_time_friendly: Option<String>,
    pub rating_text: Option<String>,
    pub timestamp: Option<Loose>,
    pub likes: Option<Loose>,
    pub user: Option<User>,
    pub comments_count: Option<Loose>,
}
