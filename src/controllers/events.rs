//! events.rs
//!
//! Маршруты чтения для админки и формы регистрации:
//! - вместимость события;
//! - статистика регистраций по статусам оплаты;
//! - проверка, зарегистрирован ли email на событие.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events/{event_id}/capacity", get(get_event_capacity))
        .route("/events/{event_id}/registrations/stats", get(get_registration_stats))
        .route("/events/{event_id}/registrations/check", get(check_email))
}

/// GET /api/events/{event_id}/capacity
///
/// Всегда 200: ошибки чтения приходят в поле `error` с нулевыми местами.
async fn get_event_capacity(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<Uuid>,
) -> impl IntoResponse {
    Json(state.registrations.get_event_capacity(event_id).await)
}

/// GET /api/events/{event_id}/registrations/stats
async fn get_registration_stats(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<Uuid>,
) -> impl IntoResponse {
    Json(state.registrations.get_registration_stats(event_id).await)
}

#[derive(Debug, Deserialize)]
struct CheckEmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckEmailResponse {
    pub event_id: Uuid,
    pub email: String,
    pub registered: bool,
}

/// GET /api/events/{event_id}/registrations/check?email=
async fn check_email(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<Uuid>,
    Query(params): Query<CheckEmailQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let email = params
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or((StatusCode::BAD_REQUEST, "email is required".to_string()))?;

    let registered = state.registrations.is_email_registered(event_id, &email).await;

    Ok(Json(CheckEmailResponse { event_id, email, registered }))
}
