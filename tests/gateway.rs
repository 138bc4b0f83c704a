//! Integration tests for the fetch gateway through its public API
//!
//! Uses a counting transport in place of HTTP.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use gamestore::data::CatalogClient;
use gamestore::gateway::{
    FetchError, Gateway, GatewayConfig, RawResponse, RequestOptions, Transport,
};

/// Answers every request with the same response and counts calls
struct CountingTransport {
    status: u16,
    body: &'static str,
    calls: AtomicUsize,
}

impl CountingTransport {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for CountingTransport {
    async fn send(&self, _url: &str, _options: &RequestOptions) -> Result<RawResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RawResponse::new(self.status, self.body))
    }
}

const PRODUCTS: &str = r#"[
    {"id": 1, "title": "Arcade Stick", "price": 129.0, "category": "electronics"},
    {"id": 2, "title": "Racing Wheel", "price": 249.5, "category": "electronics"},
    {"id": 3, "title": "Gaming Chair", "price": 199.99, "category": "furniture"}
]"#;

#[tokio::test(start_paused = true)]
async fn test_freshness_window_controls_network_access() {
    let gateway = Gateway::with_transport(
        CountingTransport::new(200, PRODUCTS),
        GatewayConfig::default(),
    );
    let options = RequestOptions::get();

    gateway.fetch_json("https://shop.test/products", &options).await.unwrap();
    gateway.fetch_json("https://shop.test/products", &options).await.unwrap();
    assert_eq!(gateway.transport().calls(), 1);

    tokio::time::advance(Duration::from_secs(5 * 60)).await;

    gateway.fetch_json("https://shop.test/products", &options).await.unwrap();
    assert_eq!(gateway.transport().calls(), 2);
    assert_eq!(gateway.len(), 1);
}

#[tokio::test]
async fn test_catalog_returns_n_products_through_gateway() {
    let gateway = Arc::new(Gateway::with_transport(
        CountingTransport::new(200, PRODUCTS),
        GatewayConfig::default(),
    ));
    let catalog = CatalogClient::with_base_url(Arc::clone(&gateway), "https://shop.test");

    let products = catalog.products(None).await;

    assert_eq!(products.len(), 3);
    assert_eq!(products[2].title, "Gaming Chair");
}

#[tokio::test]
async fn test_catalog_failure_degrades_and_is_not_cached() {
    let gateway = Arc::new(Gateway::with_transport(
        CountingTransport::new(502, "Bad Gateway"),
        GatewayConfig::default(),
    ));
    let catalog = CatalogClient::with_base_url(Arc::clone(&gateway), "https://shop.test");

    assert!(catalog.products(None).await.is_empty());
    assert!(catalog.categories().await.is_empty());
    assert!(gateway.is_empty());

    let err = catalog.try_products(None).await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(gateway.transport().calls(), 3);
}

#[tokio::test]
async fn test_clear_then_fetch_hits_network() {
    let gateway = Gateway::with_transport(
        CountingTransport::new(200, "[]"),
        GatewayConfig::default(),
    );
    let options = RequestOptions::get();

    gateway.fetch_json("https://shop.test/a", &options).await.unwrap();
    gateway.fetch_json("https://shop.test/b", &options).await.unwrap();
    gateway.clear();
    assert!(gateway.is_empty());

    gateway.fetch_json("https://shop.test/a", &options).await.unwrap();
    assert_eq!(gateway.transport().calls(), 3);
}
