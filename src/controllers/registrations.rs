use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use crate::{error::AdmissionError, models::NewRegistration, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/registrations", post(create_registration))
}

fn admission_status(err: &AdmissionError) -> StatusCode {
    match err {
        AdmissionError::Invalid(_) => StatusCode::BAD_REQUEST,
        AdmissionError::EventNotFound => StatusCode::NOT_FOUND,
        AdmissionError::AlreadyRegistered | AdmissionError::EventFull => StatusCode::CONFLICT,
        AdmissionError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

// POST /api/registrations
async fn create_registration(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewRegistration>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    match state.registrations.submit_registration(req).await {
        Ok(registration) => Ok((StatusCode::CREATED, Json(registration))),
        Err(e) => Err((admission_status(&e), e.to_string())),
    }
}
