pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use store::{PgRegistrationStore, RegistrationStore};

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub registrations: services::RegistrationService,
}

impl AppState {
    /// Подключается к базе и собирает состояние поверх PostgreSQL.
    pub async fn connect(config: &config::DatabaseConfig) -> Result<Arc<Self>, sqlx::Error> {
        let db = database::Database::new(config).await?;
        db.ping().await?;
        let store = Arc::new(PgRegistrationStore::new(&db));
        Ok(Self::with_store(store))
    }

    pub fn with_store(store: Arc<dyn RegistrationStore>) -> Arc<Self> {
        Arc::new(Self {
            registrations: services::RegistrationService::new(store),
        })
    }
}

/// Корневой роутер: служебные маршруты и `/api`.
pub fn app(state: Arc<AppState>) -> Router {
    // Форма регистрации живёт на другом домене
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(|| async { "Games & Connect API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
