//! Доступ к таблицам `events` и `registrations`.
//!
//! Сервисы не знают, откуда приходят строки: хранилище передаётся явно
//! через трейт `RegistrationStore`. В рабочем режиме это PostgreSQL
//! (`PgRegistrationStore`), в тестах и локальных прогонах
//! `InMemoryRegistrationStore`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Event, NewRegistration, Registration, RegistrationRow};

pub use memory::InMemoryRegistrationStore;
pub use postgres::PgRegistrationStore;

/// Ошибка чтения или записи в хранилище.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("database query failed: {0}")]
    Query(String),
    #[error("database unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Query(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// `SELECT id, total_spots, spots FROM events WHERE id = $1`
    async fn find_event(&self, event_id: Uuid) -> StoreResult<Option<Event>>;

    /// Все регистрации события, без фильтра по статусу.
    async fn registrations_for_event(&self, event_id: Uuid) -> StoreResult<Vec<RegistrationRow>>;

    /// Регистрации события с точным совпадением email.
    async fn registrations_for_email(
        &self,
        event_id: Uuid,
        email: &str,
    ) -> StoreResult<Vec<RegistrationRow>>;

    /// Новая регистрация всегда создаётся в статусе `pending`.
    async fn insert_registration(&self, new: &NewRegistration) -> StoreResult<Registration>;
}
