//! Handler tests for Products domain

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use entity_crud::{BoundaryOptions, CrudError, CrudResult, EntityService, InMemoryRepository, Repository};
use http_body_util::BodyExt;
use mockall::mock;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

mock! {
    pub Store {}

    #[async_trait]
    impl Repository<Product> for Store {
        async fn find_all(&self) -> CrudResult<Vec<Product>>;
        async fn find_by_id(&self, id: &str) -> CrudResult<Option<Product>>;
        async fn save(&self, entity: Product) -> CrudResult<Product>;
    }
}

fn app_with<R: Repository<Product> + 'static>(repo: R, options: BoundaryOptions) -> Router {
    let service = EntityService::new(repo, rules(DEFAULT_MIN_STOCK));
    Router::new().nest("/api/v1/products", handlers::router(service, options))
}

fn app(repo: InMemoryRepository<Product>) -> Router {
    app_with(repo, BoundaryOptions::default())
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/products")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let app = app(InMemoryRepository::new());

    let response = app
        .clone()
        .oneshot(post(
            json!({
                "name": "Widget",
                "description": "A widget",
                "price": 2.5,
                "categoryId": "cat-1",
                "stock": 10
            })
            .to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response.into_body()).await;
    assert_eq!(created["price"], json!(2.5));
    assert_eq!(created["categoryId"], "cat-1");
    assert_eq!(created["stock"], 10);

    let id = created["id"].as_str().unwrap();
    let response = app
        .oneshot(get(&format!("/api/v1/products/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, created);
}

#[tokio::test]
async fn test_create_product_handler_reports_every_violation() {
    let repo = InMemoryRepository::new();
    let app = app(repo.clone());

    let response = app
        .oneshot(post(
            json!({
                "name": "Widget",
                "description": "A widget",
                "price": null,
                "categoryId": "",
                "stock": 0
            })
            .to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["statusCode"], "INVALID_REQUEST");
    assert_eq!(body["path"], "uri=/api/v1/products");
    assert_eq!(
        body["errors"],
        json!({
            "price": "must not be null",
            "categoryId": "must not be blank",
            "stock": "must be greater than or equal to 1"
        })
    );
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = app(InMemoryRepository::new());

    let response = app.oneshot(post("{\"name\": ")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["statusCode"], "INVALID_JSON");
    assert_eq!(body["path"], "uri=/api/v1/products");
}

#[tokio::test]
async fn test_get_product_handler_unknown_id() {
    let app = app(InMemoryRepository::new());

    let response = app
        .oneshot(get("/api/v1/products/nonexistent"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product not found with this id: nonexistent");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let mut store = MockStore::new();
    store
        .expect_find_all()
        .returning(|| Err(CrudError::Database("connection refused".to_string())));

    let app = app_with(
        store,
        BoundaryOptions {
            include_timestamp: false,
        },
    );

    let response = app.oneshot(get("/api/v1/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["statusCode"], "DATABASE_ERROR");
    assert_eq!(body["path"], "uri=/api/v1/products");
    assert!(body.get("timestamp").is_none());
    assert!(!body["message"].as_str().unwrap().contains("connection refused"));
}
