//! Integration tests for `StorefrontClient` using wiremock HTTP mocks.

use rust_decimal::Decimal;
use vitrine_commerce::{CommerceError, ProductField, RequestContext, StorefrontClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> StorefrontClient {
    StorefrontClient::new(base_url, "test-token", 30, "vitrine-test/0.1", 0, 0)
        .expect("client construction should not fail")
}

fn product_json(entity_id: i64, path: &str, price: &str) -> serde_json::Value {
    serde_json::json!({
        "entity_id": entity_id,
        "path": path,
        "name": format!("Product {entity_id}"),
        "description_html": null,
        "prices": {
            "price": { "value": price, "currency_code": "USD" },
            "retail_price": null
        },
        "images": [
            { "url": format!("https://cdn.example.com{path}.jpg"), "alt": null }
        ]
    })
}

#[tokio::test]
async fn get_all_products_returns_normalized_products() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "products": [
            product_json(1, "/hi-boy", "24.99"),
            product_json(2, "/low-boy", "4.50")
        ]
    });

    Mock::given(method("GET"))
        .and(path("/catalog/products"))
        .and(query_param("field", "featured"))
        .and(query_param("first", "6"))
        .and(query_param("locale", "en-US"))
        .and(header("x-storefront-token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ctx = RequestContext::published("en-US");
    let products = client
        .get_all_products(ProductField::Featured, 6, &ctx)
        .await
        .expect("should parse products");

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].path, "/hi-boy");
    assert_eq!(products[0].price.value, Decimal::new(2499, 2));
    assert_eq!(
        products[1].image.as_ref().map(|i| i.url.as_str()),
        Some("https://cdn.example.com/low-boy.jpg")
    );
}

#[tokio::test]
async fn get_all_products_skips_entries_with_unparsable_prices() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "products": [
            product_json(1, "/good", "10.00"),
            product_json(2, "/bad", "not-a-price"),
            product_json(3, "/also-good", "5.00")
        ]
    });

    Mock::given(method("GET"))
        .and(path("/catalog/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ctx = RequestContext::published("en-US");
    let products = client
        .get_all_products(ProductField::Newest, 12, &ctx)
        .await
        .expect("bad entry must not fail the list");

    let paths: Vec<&str> = products.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(paths, vec!["/good", "/also-good"]);
}

#[tokio::test]
async fn get_all_products_caps_result_at_first() {
    let server = MockServer::start().await;

    let products: Vec<serde_json::Value> = (1..=10)
        .map(|i| product_json(i, &format!("/p{i}"), "1.00"))
        .collect();
    let body = serde_json::json!({ "products": products });

    Mock::given(method("GET"))
        .and(path("/catalog/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ctx = RequestContext::published("en-US");
    let products = client
        .get_all_products(ProductField::BestSelling, 6, &ctx)
        .await
        .expect("should parse products");

    assert_eq!(products.len(), 6, "result must be capped at `first`");
}

#[tokio::test]
async fn get_site_info_returns_categories_and_brands() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "categories": [
            { "entity_id": 10, "name": "Beverages", "path": "/beverages" }
        ],
        "brands": [
            { "entity_id": 20, "name": "Cann", "path": "/brands/cann" },
            { "entity_id": 21, "name": "Brez", "path": "/brands/brez" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/site"))
        .and(query_param("locale", "es-ES"))
        .and(query_param("preview", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ctx = RequestContext {
        locale: "es-ES".to_string(),
        preview: true,
        channel_id: None,
    };
    let site = client.get_site_info(&ctx).await.expect("should parse site info");

    assert_eq!(site.categories.len(), 1);
    assert_eq!(site.categories[0].name, "Beverages");
    assert_eq!(site.brands.len(), 2);
    assert_eq!(site.brands[1].path, "/brands/brez");
}

#[tokio::test]
async fn get_all_pages_returns_pages() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "pages": [
            { "id": 1, "name": "About", "url": "/about", "body": "<p>hi</p>" },
            { "id": 2, "name": "Shipping" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/content/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ctx = RequestContext::published("en-US");
    let pages = client.get_all_pages(&ctx).await.expect("should parse pages");

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].url.as_deref(), Some("/about"));
    assert!(pages[1].body.is_none());
}

#[tokio::test]
async fn not_found_maps_to_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ctx = RequestContext::published("en-US");
    let err = client.get_site_info(&ctx).await.expect_err("must fail");
    assert!(matches!(err, CommerceError::NotFound { .. }), "got: {err:?}");
}

#[tokio::test]
async fn server_error_is_retried_then_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/pages"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3) // 1 try + 2 retries
        .mount(&server)
        .await;

    let client = StorefrontClient::new(&server.uri(), "t", 30, "ua", 2, 0)
        .expect("client construction should not fail");
    let ctx = RequestContext::published("en-US");
    let err = client.get_all_pages(&ctx).await.expect_err("must fail");
    assert!(
        matches!(err, CommerceError::UnexpectedStatus { status: 503, .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_maps_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ctx = RequestContext::published("en-US");
    let err = client
        .get_all_products(ProductField::Featured, 6, &ctx)
        .await
        .expect_err("must fail");
    assert!(matches!(err, CommerceError::Deserialize { .. }), "got: {err:?}");
}
