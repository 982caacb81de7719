use thiserror::Error;

use crate::store::StoreError;

/// Причина, по которой не удалось посчитать вместимость события.
///
/// Наружу не пробрасывается: сервис превращает её в поле `error`
/// результата с нулевыми значениями.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    #[error("Event not found")]
    NotFound,
    #[error("Failed to read registrations: {0}")]
    BackendRead(#[from] StoreError),
    #[error("Unexpected error: {0}")]
    Unknown(String),
}

/// Ошибки приёма новой регистрации.
#[derive(Debug, Error)]
pub enum AdmissionError {
    #[error("Invalid registration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
    #[error("Event not found")]
    EventNotFound,
    #[error("Email is already registered for this event")]
    AlreadyRegistered,
    #[error("Event is full")]
    EventFull,
    #[error("Registration is temporarily unavailable: {0}")]
    Unavailable(String),
}
