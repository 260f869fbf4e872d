//! Handler tests for the generic CRUD boundary
//!
//! These mount the engine's handlers for a small test resource and verify:
//! - Status codes for list, lookup and creation
//! - `ApiError` and `ValidationFailure` bodies
//! - Request paths rendered as `uri=<path>`

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use entity_crud::handlers::{create, find_all, find_by_id};
use entity_crud::*;
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Gadget {
    id: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct CreateGadget {
    label: Option<String>,
}

impl Entity for Gadget {
    type Request = CreateGadget;

    const RESOURCE: &'static str = "Gadget";
    const COLLECTION: &'static str = "gadgets";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_request(id: String, request: CreateGadget) -> Self {
        Self {
            id,
            label: request.label.unwrap_or_default(),
        }
    }
}

type GadgetRepo = InMemoryRepository<Gadget>;

fn app(repo: GadgetRepo, options: BoundaryOptions) -> Router {
    let rules = RuleSet::new().rule(Rule::not_blank("label", |r: &CreateGadget| r.label.as_deref()));
    let service = EntityService::new(repo, rules);

    let gadgets = Router::new()
        .route(
            "/",
            get(find_all::<Gadget, GadgetRepo>).post(create::<Gadget, GadgetRepo>),
        )
        .route("/{id}", get(find_by_id::<Gadget, GadgetRepo>))
        .with_state(CrudState::shared(service, options));

    Router::new().nest("/api/v1/gadgets", gadgets)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_create_returns_201_with_generated_id() {
    let app = app(GadgetRepo::new(), BoundaryOptions::default());

    let response = app
        .oneshot(post_json(
            "/api/v1/gadgets",
            json!({ "label": "lamp", "id": "client-chosen" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let gadget: Gadget = json_body(response.into_body()).await;
    assert_eq!(gadget.label, "lamp");
    assert!(!gadget.id.is_empty());
    assert_ne!(gadget.id, "client-chosen");
}

#[tokio::test]
async fn test_create_invalid_returns_validation_failure() {
    let repo = GadgetRepo::new();
    let app = app(repo.clone(), BoundaryOptions::default());

    let response = app
        .oneshot(post_json("/api/v1/gadgets", json!({ "label": "  " }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["statusCode"], "INVALID_REQUEST");
    assert_eq!(body["path"], "uri=/api/v1/gadgets");
    assert_eq!(body["errors"], json!({ "label": "must not be blank" }));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_malformed_json_returns_invalid_json() {
    let app = app(GadgetRepo::new(), BoundaryOptions::default());

    let response = app
        .oneshot(post_json("/api/v1/gadgets", "{\"label\": ".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["statusCode"], "INVALID_JSON");
    assert_eq!(body["path"], "uri=/api/v1/gadgets");
}

#[tokio::test]
async fn test_get_unknown_id_returns_invalid_request() {
    let app = app(GadgetRepo::new(), BoundaryOptions::default());

    let response = app
        .oneshot(get_request("/api/v1/gadgets/nonexistent"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["statusCode"], "INVALID_REQUEST");
    assert_eq!(body["message"], "Gadget not found with this id: nonexistent");
    assert_eq!(body["path"], "uri=/api/v1/gadgets/nonexistent");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_timestamps_can_be_disabled() {
    let app = app(
        GadgetRepo::new(),
        BoundaryOptions {
            include_timestamp: false,
        },
    );

    let response = app
        .oneshot(get_request("/api/v1/gadgets/missing"))
        .await
        .unwrap();

    let body: Value = json_body(response.into_body()).await;
    assert!(body.get("timestamp").is_none());
}

#[tokio::test]
async fn test_list_and_get_saved_entities() {
    let repo = GadgetRepo::new();
    let app = app(repo.clone(), BoundaryOptions::default());

    let created = app
        .clone()
        .oneshot(post_json("/api/v1/gadgets", json!({ "label": "lamp" }).to_string()))
        .await
        .unwrap();
    let created: Gadget = json_body(created.into_body()).await;

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/gadgets/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Gadget = json_body(response.into_body()).await;
    assert_eq!(fetched, created);

    let response = app.oneshot(get_request("/api/v1/gadgets")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let all: Vec<Gadget> = json_body(response.into_body()).await;
    assert_eq!(all, vec![created]);
}
