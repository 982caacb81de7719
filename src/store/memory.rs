use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use uuid::Uuid;

use super::{RegistrationStore, StoreError, StoreResult};
use crate::models::{Event, NewRegistration, PaymentStatus, Registration, RegistrationRow};

/// Хранилище в памяти с тем же поведением, что и PostgreSQL:
/// email сравнивается точно, с учётом регистра.
///
/// `set_unavailable(true)` заставляет все операции возвращать ошибку,
/// так проверяется поведение сервисов при сбое базы.
#[derive(Debug, Default)]
pub struct InMemoryRegistrationStore {
    events: RwLock<HashMap<Uuid, Event>>,
    registrations: RwLock<Vec<Registration>>,
    unavailable: AtomicBool,
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    pub fn add_event(&self, event: Event) -> StoreResult<()> {
        self.events.write().map_err(poisoned)?.insert(event.id, event);
        Ok(())
    }

    /// Добавляет регистрацию с произвольным статусом, минуя проверки.
    pub fn add_registration(
        &self,
        event_id: Uuid,
        email: &str,
        status: PaymentStatus,
        number_of_participants: Option<i32>,
    ) -> StoreResult<Registration> {
        self.add_registration_with_status(event_id, email, Some(status), number_of_participants)
    }

    /// Как `add_registration`, но статус может отсутствовать (NULL в базе).
    pub fn add_registration_with_status(
        &self,
        event_id: Uuid,
        email: &str,
        status: Option<PaymentStatus>,
        number_of_participants: Option<i32>,
    ) -> StoreResult<Registration> {
        let registration = Registration {
            id: Uuid::new_v4(),
            event_id,
            email: email.to_string(),
            name: email.split('@').next().unwrap_or_default().to_string(),
            phone: None,
            number_of_participants,
            payment_status: status.map(|s| s.to_string()),
            created_at: Utc::now(),
        };
        self.registrations.write().map_err(poisoned)?.push(registration.clone());
        Ok(registration)
    }

    pub fn registrations(&self) -> StoreResult<Vec<Registration>> {
        Ok(self.registrations.read().map_err(poisoned)?.clone())
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }

    fn select_rows<F>(&self, filter: F) -> StoreResult<Vec<RegistrationRow>>
    where
        F: Fn(&Registration) -> bool,
    {
        self.check_available()?;
        let rows = self
            .registrations
            .read()
            .map_err(poisoned)?
            .iter()
            .filter(|r| filter(*r))
            .map(Registration::row)
            .collect();
        Ok(rows)
    }
}

#[async_trait]
impl RegistrationStore for InMemoryRegistrationStore {
    async fn find_event(&self, event_id: Uuid) -> StoreResult<Option<Event>> {
        self.check_available()?;
        Ok(self.events.read().map_err(poisoned)?.get(&event_id).cloned())
    }

    async fn registrations_for_event(&self, event_id: Uuid) -> StoreResult<Vec<RegistrationRow>> {
        self.select_rows(|r| r.event_id == event_id)
    }

    async fn registrations_for_email(
        &self,
        event_id: Uuid,
        email: &str,
    ) -> StoreResult<Vec<RegistrationRow>> {
        self.select_rows(|r| r.event_id == event_id && r.email == email)
    }

    async fn insert_registration(&self, new: &NewRegistration) -> StoreResult<Registration> {
        self.check_available()?;
        let registration = Registration {
            id: Uuid::new_v4(),
            event_id: new.event_id,
            email: new.email.clone(),
            name: new.name.clone(),
            phone: new.phone.clone(),
            number_of_participants: Some(new.number_of_participants),
            payment_status: Some(PaymentStatus::Pending.to_string()),
            created_at: Utc::now(),
        };
        self.registrations.write().map_err(poisoned)?.push(registration.clone());
        Ok(registration)
    }
}
