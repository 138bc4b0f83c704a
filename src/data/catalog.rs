//! Product catalog API client
//!
//! Fetches products and categories from the Fake Store API through the shared
//! gateway. Each accessor comes in two flavours: `try_*` returns the fetch
//! error, the plain one logs it and degrades to an empty result.

use std::sync::Arc;

use super::{or_empty, Product};
use crate::gateway::{FetchError, Gateway, HttpTransport, Transport};

/// Base URL for the Fake Store API
pub const FAKE_STORE_BASE_URL: &str = "https://fakestoreapi.com";

/// Client for the product catalog
#[derive(Debug)]
pub struct CatalogClient<T: Transport = HttpTransport> {
    gateway: Arc<Gateway<T>>,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl<T: Transport> CatalogClient<T> {
    /// Creates a client that fetches through the given gateway
    pub fn new(gateway: Arc<Gateway<T>>) -> Self {
        Self::with_base_url(gateway, FAKE_STORE_BASE_URL)
    }

    /// Creates a client against a different catalog host
    pub fn with_base_url(gateway: Arc<Gateway<T>>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { gateway, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for the product list, optionally limited to the first `limit` items
    fn products_url(&self, limit: Option<u32>) -> String {
        match limit {
            Some(limit) => format!("{}/products?limit={}", self.base_url, limit),
            None => format!("{}/products", self.base_url),
        }
    }

    /// Fetches the product list
    pub async fn try_products(&self, limit: Option<u32>) -> Result<Vec<Product>, FetchError> {
        self.gateway.get_json(&self.products_url(limit)).await
    }

    /// Fetches the product list, or an empty list on failure
    pub async fn products(&self, limit: Option<u32>) -> Vec<Product> {
        or_empty(self.try_products(limit).await, "products")
    }

    /// Fetches the products of one category
    pub async fn try_products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, FetchError> {
        let url = format!(
            "{}/products/category/{}",
            self.base_url,
            encode_segment(category)
        );
        self.gateway.get_json(&url).await
    }

    /// Fetches the products of one category, or an empty list on failure
    pub async fn products_in_category(&self, category: &str) -> Vec<Product> {
        or_empty(
            self.try_products_in_category(category).await,
            "category products",
        )
    }

    /// Fetches a single product by id
    pub async fn try_product(&self, id: u32) -> Result<Product, FetchError> {
        let url = format!("{}/products/{}", self.base_url, id);
        self.gateway.get_json(&url).await
    }

    /// Fetches a single product by id, or `None` on failure
    pub async fn product(&self, id: u32) -> Option<Product> {
        or_empty(self.try_product(id).await.map(Some), "product")
    }

    /// Fetches the list of category names
    pub async fn try_categories(&self) -> Result<Vec<String>, FetchError> {
        let url = format!("{}/products/categories", self.base_url);
        self.gateway.get_json(&url).await
    }

    /// Fetches the list of category names, or an empty list on failure
    pub async fn categories(&self) -> Vec<String> {
        or_empty(self.try_categories().await, "categories")
    }
}

/// Percent-encodes the characters that show up in catalog category names
fn encode_segment(s: &str) -> String {
    s.replace('%', "%25")
        .replace(' ', "%20")
        .replace('\'', "%27")
        .replace('/', "%2F")
}
