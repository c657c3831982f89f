use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use folio_api::{build_router, config::Config, state::AppState};
use folio_persist::{DocumentStore, Fields, MemoryStore, PersistError, Result};

/// Store whose server can never be selected
struct UnreachableStore;

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn insert_document(&self, _collection: &str, _fields: Fields) -> Result<String> {
        Err(PersistError::Unavailable(
            "Server selection timeout: No available servers".to_string(),
        ))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        Err(PersistError::Unavailable(
            "Server selection timeout: No available servers. Topology: { Type: Unknown }"
                .to_string(),
        ))
    }

    fn database_name(&self) -> &str {
        "portfolio"
    }
}

fn app(store: Option<Arc<dyn DocumentStore>>) -> Router {
    build_router(Arc::new(AppState::new(Config::default(), store)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn valid_contact() -> Value {
    json!({
        "name": "A",
        "email": "a@b.com",
        "subject": "Hi",
        "message": "Hello"
    })
}

#[tokio::test]
async fn test_root_message() {
    let app = app(None);

    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Portfolio API running" }));
}

#[tokio::test]
async fn test_contact_submission_is_stored() {
    let store = Arc::new(MemoryStore::new("portfolio"));
    let app = app(Some(store.clone()));

    let (status, body) = send(&app, post_json("/api/contact", &valid_contact())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let docs = store.documents("contactmessage").await;
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, id);
    assert_eq!(docs[0].get_str("name"), Some("A"));
    assert_eq!(docs[0].get_str("source"), Some("portfolio"));
    assert!(docs[0].get_str("created_at").is_some());
    assert!(docs[0].get_str("updated_at").is_some());
}

#[tokio::test]
async fn test_contact_keeps_custom_source() {
    let store = Arc::new(MemoryStore::default());
    let app = app(Some(store.clone()));

    let mut body = valid_contact();
    body["source"] = json!("resume-pdf");
    let (status, _) = send(&app, post_json("/api/contact", &body)).await;

    assert_eq!(status, StatusCode::OK);
    let docs = store.documents("contactmessage").await;
    assert_eq!(docs[0].get_str("source"), Some("resume-pdf"));
}

#[tokio::test]
async fn test_contact_missing_field_rejected_without_insert() {
    let store = Arc::new(MemoryStore::default());
    let app = app(Some(store.clone()));

    for field in ["name", "email", "subject", "message"] {
        let mut body = valid_contact();
        body.as_object_mut().unwrap().remove(field);

        let (status, response) = send(&app, post_json("/api/contact", &body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "field {}", field);
        assert!(response["detail"].as_str().unwrap().contains(field));
    }

    assert!(store.list_collection_names().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_contact_mistyped_field_rejected() {
    let store = Arc::new(MemoryStore::default());
    let app = app(Some(store.clone()));

    let mut body = valid_contact();
    body["message"] = json!(["not", "a", "string"]);
    let (status, _) = send(&app, post_json("/api/contact", &body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.documents("contactmessage").await.is_empty());
}

#[tokio::test]
async fn test_contact_malformed_json_rejected() {
    let app = app(Some(Arc::new(MemoryStore::default())));

    let req = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_contact_without_content_type_rejected() {
    let app = app(Some(Arc::new(MemoryStore::default())));

    let req = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .body(Body::from(valid_contact().to_string()))
        .unwrap();
    let (status, _) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_unreachable_store_fails_contact_but_not_diagnostics() {
    let app = app(Some(Arc::new(UnreachableStore)));

    let (status, body) = send(&app, post_json("/api/contact", &valid_contact())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Store unavailable"));

    let (status, body) = send(&app, get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "running");
    assert_eq!(body["database"]["state"], "error");
    assert!(body["database"]["detail"].as_str().unwrap().chars().count() <= 50);
    assert_eq!(body["database_url"], "not_set");
    assert_eq!(body["database_name"], "portfolio");
    assert_eq!(body["connection_status"], "connected");
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn test_missing_store_fails_contact_but_not_diagnostics() {
    let app = app(None);

    let (status, body) = send(&app, post_json("/api/contact", &valid_contact())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Database not available");

    let (status, body) = send(&app, get("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "backend": "running",
            "database": { "state": "not_initialized" },
            "database_url": "not_set",
            "database_name": null,
            "connection_status": "not_connected",
            "collections": []
        })
    );
}

#[tokio::test]
async fn test_diagnostics_lists_collections() {
    let store = Arc::new(MemoryStore::new("portfolio"));
    let app = app(Some(store));

    send(&app, post_json("/api/contact", &valid_contact())).await;
    let (status, body) = send(&app, get("/test")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], json!({ "state": "connected" }));
    assert_eq!(body["collections"], json!(["contactmessage"]));
}

#[tokio::test]
async fn test_diagnostics_reports_configured_url() {
    let mut config = Config::default();
    config.database_url = Some("mongodb://localhost:27017".to_string());
    let app = build_router(Arc::new(AppState::new(config, None)));

    let (_, body) = send(&app, get("/test")).await;

    assert_eq!(body["database_url"], "set");
    assert_eq!(body["database"]["state"], "not_initialized");
}

#[tokio::test]
async fn test_static_lists_are_stable() {
    let app = app(Some(Arc::new(UnreachableStore)));

    let (status, first) = send(&app, get("/api/testimonials")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(&app, get("/api/testimonials")).await;
    assert_eq!(first, second);
    assert_eq!(first.as_array().unwrap().len(), 2);
    assert_eq!(first[0]["name"], "Dr. A. N. Mentor");
    assert_eq!(first[1]["name"], "Priya S.");
    assert_eq!(first[0]["avatar_url"], Value::Null);

    let (status, first) = send(&app, get("/api/experience")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(&app, get("/api/experience")).await;
    assert_eq!(first, second);
    assert_eq!(first[0]["company"], "InnovateX");
    assert_eq!(first[1]["company"], "AeroWorks");
    assert_eq!(first[0]["highlights"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_schema_endpoint() {
    let app = app(None);
    let expected = json!({
        "contactmessage": ["name", "email", "subject", "message", "source", "created_at", "updated_at"],
        "testimonial": ["name", "role", "quote", "avatar_url"],
        "experience": ["company", "title", "start", "end", "highlights", "logo_url"]
    });

    for _ in 0..2 {
        let (status, body) = send(&app, get("/schema")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);
    }
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = app(None);

    let (status, body) = send(&app, get("/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    for path in ["/", "/test", "/schema", "/api/contact", "/api/testimonials", "/api/experience"] {
        assert!(body["paths"].get(path).is_some(), "missing path {}", path);
    }
}

#[tokio::test]
async fn test_cors_is_open_by_default() {
    let app = app(None);

    let req = Request::builder()
        .uri("/api/testimonials")
        .header(header::ORIGIN, "https://portfolio.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

fn cors_request(origin: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/testimonials")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_cors_restricts_to_configured_origins() {
    let mut config = Config::default();
    config.cors.enabled = true;
    config.cors.origins = vec!["http://localhost:5173".to_string()];
    let app = build_router(Arc::new(AppState::new(config, None)));

    let allowed = app
        .clone()
        .oneshot(cors_request("http://localhost:5173"))
        .await
        .unwrap();
    assert_eq!(allowed.status(), StatusCode::OK);
    assert_eq!(
        allowed
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );

    let other = app
        .oneshot(cors_request("https://elsewhere.example"))
        .await
        .unwrap();
    assert_eq!(other.status(), StatusCode::OK);
    assert!(other
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = app(None);

    let response = app.oneshot(get("/api/projects")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
