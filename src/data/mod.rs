//! Core data models for GameStore
//!
//! This module contains the product and user types returned by the catalog
//! and random-user APIs, plus the clients that fetch them through the gateway.

pub mod catalog;
pub mod games;
pub mod users;

pub use catalog::CatalogClient;
pub use games::{search_games, GAMES};
pub use users::UsersClient;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::gateway::FetchError;

/// A product from the catalog API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier
    pub id: u32,
    /// Display title
    pub title: String,
    /// Price in US dollars
    pub price: f64,
    /// Long description, shown in the detail panel
    #[serde(default)]
    pub description: String,
    /// Category name, e.g. "electronics"
    pub category: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Customer rating, if the API sent one
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Average rating and number of votes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

impl Product {
    /// Price formatted for display
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Rating as five stars (rounded), or an empty string when unrated
    pub fn stars(&self) -> String {
        match self.rating {
            Some(rating) => {
                let filled = (rating.rate.round().clamp(0.0, 5.0)) as usize;
                format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
            }
            None => String::new(),
        }
    }
}

/// A user from the random-user API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: UserName,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub location: UserLocation,
    #[serde(default)]
    pub picture: Option<UserPicture>,
    #[serde(default)]
    pub login: Option<UserLogin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserName {
    #[serde(default)]
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPicture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLogin {
    pub uuid: String,
}

impl User {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// "City, Country"
    pub fn place(&self) -> String {
        format!("{}, {}", self.location.city, self.location.country)
    }
}

/// Unwraps a fetch result, logging the failure and falling back to an empty value
///
/// Page sections use this so a failed request shows up as "nothing to show"
/// instead of taking the page down.
pub(crate) fn or_empty<V: Default>(result: Result<V, FetchError>, what: &str) -> V {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "failed to fetch {}", what);
            V::default()
        }
    }
}

/// Builds a product for tests
#[cfg(test)]
pub(crate) fn sample_product(id: u32, category: &str) -> Product {
    Product {
        id,
        title: format!("Product {}", id),
        price: 19.5,
        description: "A thing you can buy".to_string(),
        category: category.to_string(),
        image: String::new(),
        rating: Some(Rating {
            rate: 3.6,
            count: 120,
        }),
    }
}

/// Builds a user for tests
#[cfg(test)]
pub(crate) fn sample_user(first: &str, last: &str) -> User {
    User {
        name: UserName {
            title: "Mx".to_string(),
            first: first.to_string(),
            last: last.to_string(),
        },
        email: format!("{}@example.com", first.to_lowercase()),
        phone: String::new(),
        location: UserLocation {
            city: "Oslo".to_string(),
            country: "Norway".to_string(),
        },
        picture: None,
        login: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_catalog_shape() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).expect("Should parse product");

        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert!((product.price - 109.95).abs() < 0.001);
        assert_eq!(product.rating.map(|r| r.count), Some(120));
    }

    #[test]
    fn test_product_without_optional_fields() {
        let json = r#"{"id": 2, "title": "Bare", "price": 1, "category": "misc"}"#;
        let product: Product = serde_json::from_str(json).expect("Should parse product");

        assert!(product.description.is_empty());
        assert!(product.rating.is_none());
        assert_eq!(product.stars(), "");
    }

    #[test]
    fn test_price_label_has_two_decimals() {
        let product = sample_product(1, "misc");
        assert_eq!(product.price_label(), "$19.50");
    }

    #[test]
    fn test_stars_rounds_rating() {
        let product = sample_product(1, "misc");
        assert_eq!(product.stars(), "★★★★☆");
    }

    #[test]
    fn test_user_deserializes_random_user_shape() {
        let json = r#"{
            "gender": "female",
            "name": { "title": "Ms", "first": "Ada", "last": "Byron" },
            "location": { "city": "London", "country": "United Kingdom", "postcode": "N1" },
            "email": "ada@example.com",
            "phone": "020 7946 0000",
            "login": { "uuid": "5b7a-11", "username": "ada" },
            "picture": { "large": "l.jpg", "medium": "m.jpg", "thumbnail": "t.jpg" }
        }"#;

        let user: User = serde_json::from_str(json).expect("Should parse user");

        assert_eq!(user.full_name(), "Ada Byron");
        assert_eq!(user.place(), "London, United Kingdom");
        assert_eq!(user.login.map(|l| l.uuid).as_deref(), Some("5b7a-11"));
    }
}
