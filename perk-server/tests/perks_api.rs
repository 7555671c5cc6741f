//! Perks API integration tests
//!
//! Runs the real router against an in-memory database.
//! Run: cargo test -p perk-server --test perks_api

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use perk_server::core::{Config, ServerState};
use perk_server::db::repository::PerkRepository;
use shared::models::{PerkCategory, PerkCreate};
use shared::response::{ErrorResponse, PerkListResponse, PerkResponse};

async fn test_app() -> (Router, ServerState) {
    let config = Config::with_overrides("memory", 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("memory database should connect");
    let app = perk_server::api::router().with_state(state.clone());
    (app, state)
}

fn perk_create(title: &str, merchant: &str, category: PerkCategory, discount: f64) -> PerkCreate {
    PerkCreate {
        title: title.to_string(),
        description: format!("{title} description"),
        category,
        discount_percent: discount,
        merchant: merchant.to_string(),
        is_public: None,
    }
}

async fn seed(state: &ServerState, data: PerkCreate) -> shared::Perk {
    PerkRepository::new(state.db.clone())
        .create(data)
        .await
        .expect("seed perk")
        .into()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn list_returns_seeded_public_perks() {
    let (app, state) = test_app().await;
    let seeded = seed(
        &state,
        perk_create("Free Coffee", "Acme", PerkCategory::Food, 10.0),
    )
    .await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/perks/all")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let list: PerkListResponse = body_json(response).await;
    assert_eq!(list.perks.len(), 1);
    assert_eq!(list.perks[0], seeded);
}

#[tokio::test]
async fn list_excludes_non_public_perks() {
    let (app, state) = test_app().await;
    seed(
        &state,
        perk_create("Visible", "Acme", PerkCategory::Tech, 5.0),
    )
    .await;
    let mut hidden = perk_create("Hidden", "Acme", PerkCategory::Tech, 5.0);
    hidden.is_public = Some(false);
    seed(&state, hidden).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/perks/all")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let list: PerkListResponse = body_json(response).await;
    assert_eq!(list.perks.len(), 1);
    assert_eq!(list.perks[0].title, "Visible");
}

#[tokio::test]
async fn get_by_id_round_trips_with_listing() {
    let (app, state) = test_app().await;
    let seeded = seed(
        &state,
        perk_create("Gym Pass", "FitCo", PerkCategory::Fitness, 25.0),
    )
    .await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/perks/{}", seeded.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let detail: PerkResponse = body_json(response).await;
    assert_eq!(detail.perk, seeded);
}

#[tokio::test]
async fn get_by_id_accepts_table_prefixed_ids() {
    let (app, state) = test_app().await;
    let seeded = seed(
        &state,
        perk_create("City Tour", "Wanderly", PerkCategory::Travel, 15.0),
    )
    .await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/perks/perk:{}", seeded.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let detail: PerkResponse = body_json(response).await;
    assert_eq!(detail.perk.id, seeded.id);
}

#[tokio::test]
async fn unknown_perk_returns_not_found_envelope() {
    let (app, _state) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/perks/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.code, "E0003");
    assert!(error.message.contains("does-not-exist"));
}

#[tokio::test]
async fn create_persists_and_assigns_an_id() {
    let (app, _state) = test_app().await;
    let payload = perk_create("Laptop Deal", "ByteMart", PerkCategory::Tech, 12.5);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/perks")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let created: PerkResponse = body_json(response).await;
    assert!(!created.perk.id.is_empty());
    assert_eq!(created.perk.discount_percent, 12.5);

    // The created perk must show up in the public listing
    let response = app
        .oneshot(
            Request::builder()
                .uri("/perks/all")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let list: PerkListResponse = body_json(response).await;
    assert!(list.perks.iter().any(|p| p.id == created.perk.id));
}

#[tokio::test]
async fn create_rejects_empty_title() {
    let (app, _state) = test_app().await;
    let payload = perk_create("   ", "Acme", PerkCategory::Other, 0.0);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/perks")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.code, "E0002");
}

#[tokio::test]
async fn health_reports_database_status() {
    let (app, _state) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}
