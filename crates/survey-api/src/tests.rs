//! Router tests driven with `tower::ServiceExt::oneshot` against an in-memory
//! SQLite store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use serde_json::{Value, json};
use survey_core::{
  store::SurveyStore,
  survey::{Question, SurveyForm, SurveyId},
};
use survey_store_sqlite::SqliteStore;
use tower::ServiceExt as _;

use crate::api_router;

const LIMIT: usize = 64 * 1024;

async fn seeded() -> (Arc<SqliteStore>, SurveyForm) {
  let store = SqliteStore::open_in_memory().await.unwrap();
  let form = store
    .insert(SurveyForm {
      id:          SurveyId::NIL,
      title:       "Original".into(),
      description: "Before".into(),
      questions:   vec![Question {
        id:       "q1".into(),
        text:     "Rate us".into(),
        kind:     "single_choice".into(),
        options:  vec!["1".into(), "2".into(), "3".into()],
        required: true,
      }],
      created_by:  "author-7".into(),
      created_at:  None,
      is_active:   true,
    })
    .await
    .unwrap();
  (Arc::new(store), form)
}

fn body_for(id: &str) -> String {
  json!({
    "id": id,
    "title": "Updated",
    "description": "After",
    "questions": [
      { "id": "q9", "text": "Comments", "type": "text", "required": false },
      { "id": "q1", "text": "Rate us again", "type": "single_choice",
        "options": ["1", "2", "3", "4"], "required": true },
    ],
    "created_by": "someone-else",
    "is_active": false,
  })
  .to_string()
}

async fn send(
  store: Arc<SqliteStore>,
  method: &str,
  role: Option<&str>,
  body: String,
) -> Response {
  let mut builder = Request::builder()
    .method(method)
    .uri("/update-survey")
    .header(header::CONTENT_TYPE, "application/json");
  if let Some(role) = role {
    builder = builder.header("X-User-Role", role);
  }
  let req = builder.body(Body::from(body)).unwrap();
  api_router(store, LIMIT).oneshot(req).await.unwrap()
}

async fn json_body(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

// ── Scenarios ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_id_returns_400() {
  let (store, _) = seeded().await;
  let resp = send(store, "PUT", Some("admin"), body_for("")).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(json_body(resp).await, json!({ "error": "Survey ID is required" }));
}

#[tokio::test]
async fn viewer_role_returns_403_and_leaves_record() {
  let (store, form) = seeded().await;
  let resp = send(store.clone(), "PUT", Some("viewer"), body_for(&form.id.to_hex())).await;
  assert_eq!(resp.status(), StatusCode::FORBIDDEN);
  assert_eq!(json_body(resp).await, json!({ "error": "Forbidden" }));
  assert_eq!(store.get_by_id(form.id).await.unwrap(), Some(form));
}

#[tokio::test]
async fn missing_role_header_returns_403() {
  let (store, form) = seeded().await;
  let resp = send(store, "PUT", None, body_for(&form.id.to_hex())).await;
  assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_id_returns_404() {
  let (store, _) = seeded().await;
  let other = SurveyId::generate().to_hex();
  let resp = send(store, "PUT", Some("admin"), body_for(&other)).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(json_body(resp).await, json!({ "error": "Survey not found" }));
}

#[tokio::test]
async fn admin_update_returns_confirmation_and_persists() {
  let (store, form) = seeded().await;
  let hex = form.id.to_hex();

  let resp = send(store.clone(), "PUT", Some("admin"), body_for(&hex)).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
  assert!(ct.starts_with("application/json"), "Content-Type: {ct}");
  assert_eq!(
    json_body(resp).await,
    json!({ "id": hex, "message": "Survey updated successfully" })
  );

  let after = store.get_by_id(form.id).await.unwrap().unwrap();
  assert_eq!(after.title, "Updated");
  assert_eq!(after.description, "After");
  assert!(!after.is_active);
  assert_eq!(after.questions.len(), 2);
  assert_eq!(after.questions[0].id, "q9");
  assert_eq!(after.questions[1].options.len(), 4);
  assert_eq!(after.created_by, "author-7");
  assert_eq!(after.created_at, form.created_at);
}

// ── Decoding ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn echoed_nulls_are_accepted() {
  let (store, form) = seeded().await;
  let body = json!({
    "id": form.id,
    "title": "Echo",
    "description": "",
    "questions": null,
    "created_by": null,
    "created_at": null,
    "is_active": true,
  })
  .to_string();
  let resp = send(store.clone(), "PUT", Some("admin"), body).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let after = store.get_by_id(form.id).await.unwrap().unwrap();
  assert!(after.questions.is_empty());
  assert_eq!(after.created_by, "author-7");
}

#[tokio::test]
async fn invalid_json_returns_400() {
  let (store, _) = seeded().await;
  let resp = send(store, "PUT", Some("admin"), "{\"id\":".into()).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(json_body(resp).await, json!({ "error": "Invalid JSON" }));
}

#[tokio::test]
async fn malformed_id_returns_invalid_json() {
  let (store, _) = seeded().await;
  let resp = send(store, "PUT", Some("admin"), body_for("xyz")).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(json_body(resp).await, json!({ "error": "Invalid JSON" }));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
  let (store, form) = seeded().await;
  let mut body: Value = serde_json::from_str(&body_for(&form.id.to_hex())).unwrap();
  body["description"] = Value::String("x".repeat(LIMIT * 2));
  let resp = send(store.clone(), "PUT", Some("admin"), body.to_string()).await;
  assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
  assert_eq!(store.get_by_id(form.id).await.unwrap(), Some(form));
}

// ── Transport ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn options_returns_204_with_cors_headers() {
  let (store, _) = seeded().await;
  let resp = send(store, "OPTIONS", None, String::new()).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  let headers = resp.headers();
  assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
  assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "PUT, OPTIONS");
  assert_eq!(
    headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
    "Content-Type, X-User-Role, X-User-ID"
  );
}

#[tokio::test]
async fn other_methods_return_405_with_cors_headers() {
  let (store, _) = seeded().await;
  for method in ["GET", "POST", "DELETE"] {
    let resp = send(store.clone(), method, Some("admin"), String::new()).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
    assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert_eq!(json_body(resp).await, json!({ "error": "Method not allowed" }));
  }
}

#[tokio::test]
async fn error_responses_carry_cors_headers() {
  let (store, _) = seeded().await;
  let resp = send(store, "PUT", Some("viewer"), body_for("")).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
