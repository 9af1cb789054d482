//! HTTP surface for the intake session.
//!
//! Thin handlers over [`WizardSession`]; every mutation returns the full
//! session snapshot so clients can re-render without a second round trip.
//! Registry updates and removes answer 200 with an outcome flag even for
//! unknown ids, so a stale client cannot wedge itself on a 404.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use crate::error::WizardError;
use crate::record::{EntityUpdate, RecordUpdate};

use super::session::{SessionStatus, WizardSession};

/// Build the portal router.
pub fn portal_routes(session: WizardSession) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/session", get(get_session))
        .route("/api/session/record", post(update_record))
        .route("/api/session/entities", post(add_entity))
        .route(
            "/api/session/entities/{id}",
            post(update_entity).delete(remove_entity),
        )
        .route("/api/session/advance", post(advance))
        .route("/api/session/retreat", post(retreat))
        .route("/api/session/submit", post(submit))
        .route("/api/session/restart", post(restart))
        .layer(CorsLayer::permissive())
        .with_state(session)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "intake-portal" }))
}

async fn get_session(State(session): State<WizardSession>) -> Json<SessionStatus> {
    Json(session.status().await)
}

async fn update_record(
    State(session): State<WizardSession>,
    Json(update): Json<RecordUpdate>,
) -> Json<SessionStatus> {
    session.apply_update(update).await;
    Json(session.status().await)
}

async fn add_entity(State(session): State<WizardSession>) -> Response {
    match session.add_entity().await {
        Some(entity) => (StatusCode::CREATED, Json(entity)).into_response(),
        None => conflict(&WizardError::AlreadySubmitted),
    }
}

async fn update_entity(
    State(session): State<WizardSession>,
    Path(id): Path<Uuid>,
    Json(update): Json<EntityUpdate>,
) -> Json<Value> {
    let updated = session.update_entity(id, update).await;
    Json(json!({ "updated": updated }))
}

async fn remove_entity(
    State(session): State<WizardSession>,
    Path(id): Path<Uuid>,
) -> Json<Value> {
    let removed = session.remove_entity(id).await;
    Json(json!({ "removed": removed }))
}

async fn advance(State(session): State<WizardSession>) -> Json<SessionStatus> {
    session.advance().await;
    Json(session.status().await)
}

async fn retreat(State(session): State<WizardSession>) -> Json<SessionStatus> {
    session.retreat().await;
    Json(session.status().await)
}

async fn submit(State(session): State<WizardSession>) -> Response {
    match session.submit().await {
        Ok(_) => Json(session.status().await).into_response(),
        Err(e) => conflict(&e),
    }
}

async fn restart(State(session): State<WizardSession>) -> Response {
    match session.restart().await {
        Ok(()) => Json(session.status().await).into_response(),
        Err(e) => conflict(&e),
    }
}

fn conflict(error: &WizardError) -> Response {
    (StatusCode::CONFLICT, Json(json!({ "error": error.to_string() }))).into_response()
}
