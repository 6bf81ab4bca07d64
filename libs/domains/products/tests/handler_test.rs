//! Handler tests for the Products domain
//!
//! These tests drive the domain router over the in-memory repository and
//! verify:
//! - Request deserialization (JSON bodies, query parameters)
//! - Response serialization and HTTP status codes
//! - Error responses
//!
//! Unlike full-application tests, these exercise ONLY the products
//! handlers, not routing middleware or the MongoDB adapter.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn test_app() -> (ProductService<InMemoryProductRepository>, Router) {
    let service = ProductService::new(InMemoryProductRepository::new());
    let app = handlers::router(service.clone());
    (service, app)
}

// Helper to parse a JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn text_body(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_product_returns_200_with_assigned_id() {
    let (_, app) = test_app();

    let response = app
        .oneshot(post_json("/", json!({"title": "Lamp", "price": 1200})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert!(!product.id.is_empty());
    assert_eq!(product.title, "Lamp");
    assert_eq!(product.price, 1200);
}

#[tokio::test]
async fn test_create_then_get_returns_same_product() {
    let (service, app) = test_app();

    let created = service
        .add_product(NewProduct {
            title: "Lamp".to_string(),
            price: 1200,
        })
        .await
        .unwrap();

    let response = app
        .oneshot(request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_list_products_returns_all() {
    let (service, app) = test_app();

    for i in 0..3 {
        service
            .add_product(NewProduct {
                title: format!("Product {}", i),
                price: i * 10,
            })
            .await
            .unwrap();
    }

    let response = app.oneshot(request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_get_unknown_id_returns_404() {
    let (_, app) = test_app();

    let response = app
        .oneshot(request("GET", "/nonexistent-id"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_title_only_retains_price() {
    let (service, app) = test_app();
    let created = service
        .add_product(NewProduct {
            title: "Old".to_string(),
            price: 50,
        })
        .await
        .unwrap();

    let response = app
        .oneshot(request("PUT", &format!("/{}?title=NewTitle", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "NewTitle");
    assert_eq!(updated.price, 50);
}

#[tokio::test]
async fn test_update_price_only_retains_title() {
    let (service, app) = test_app();
    let created = service
        .add_product(NewProduct {
            title: "Old".to_string(),
            price: 50,
        })
        .await
        .unwrap();

    let response = app
        .oneshot(request("PUT", &format!("/{}?price=99", created.id)))
        .await
        .unwrap();

    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.title, "Old");
    assert_eq!(updated.price, 99);
}

#[tokio::test]
async fn test_update_both_fields() {
    let (service, app) = test_app();
    let created = service
        .add_product(NewProduct {
            title: "Old".to_string(),
            price: 50,
        })
        .await
        .unwrap();

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/{}?title=NewTitle&price=99", created.id),
        ))
        .await
        .unwrap();

    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.title, "NewTitle");
    assert_eq!(updated.price, 99);
}

#[tokio::test]
async fn test_update_without_params_returns_product_unchanged() {
    let (service, app) = test_app();
    let created = service
        .add_product(NewProduct {
            title: "Old".to_string(),
            price: 50,
        })
        .await
        .unwrap();

    let response = app
        .oneshot(request("PUT", &format!("/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_update_unknown_id_returns_404() {
    let (_, app) = test_app();

    let response = app
        .oneshot(request("PUT", "/missing-id?title=x&price=1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_ok_and_is_idempotent() {
    let (service, app) = test_app();
    let created = service
        .add_product(NewProduct {
            title: "Lamp".to_string(),
            price: 1200,
        })
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text_body(response.into_body()).await, "OK");

    // Deleting the same id again still succeeds
    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text_body(response.into_body()).await, "OK");

    // And the product is gone
    let response = app
        .oneshot(request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_returns_ok() {
    let (_, app) = test_app();

    let response = app
        .oneshot(request("DELETE", "/never-existed"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text_body(response.into_body()).await, "OK");
}

#[tokio::test]
async fn test_no_validation_is_enforced() {
    let (_, app) = test_app();

    // Empty title and negative price are accepted as-is
    let response = app
        .oneshot(post_json("/", json!({"title": "", "price": -5})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.title, "");
    assert_eq!(product.price, -5);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (_, app) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_unparseable_price_param_is_rejected() {
    let (service, app) = test_app();
    let created = service
        .add_product(NewProduct {
            title: "Old".to_string(),
            price: 50,
        })
        .await
        .unwrap();

    let response = app
        .oneshot(request("PUT", &format!("/{}?price=lots", created.id)))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let (_, app) = test_app();

    // Add a product
    let response = app
        .clone()
        .oneshot(post_json("/", json!({"title": "Title 1", "price": 101})))
        .await
        .unwrap();
    let created: Product = json_body(response.into_body()).await;

    // The catalog lists exactly that product
    let response = app.clone().oneshot(request("GET", "/")).await.unwrap();
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products, vec![created.clone()]);

    // Lower the price, title untouched
    let response = app
        .clone()
        .oneshot(request("PUT", &format!("/{}?price=25", created.id)))
        .await
        .unwrap();
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Title 1");
    assert_eq!(updated.price, 25);

    // Remove it
    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The catalog is empty again
    let response = app.oneshot(request("GET", "/")).await.unwrap();
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}
