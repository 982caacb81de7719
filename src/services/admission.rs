use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use super::RegistrationService;
use crate::error::{AdmissionError, CapacityError};
use crate::models::{NewRegistration, Registration};
use crate::store::StoreError;

impl RegistrationService {
    /// Есть ли у email действующая регистрация (pending/paid/confirmed) на событие.
    ///
    /// Email сравнивается точно, с учётом регистра. Ошибка чтения
    /// возвращается вызывающему коду.
    pub async fn check_email_registration(
        &self,
        event_id: Uuid,
        email: &str,
    ) -> Result<bool, StoreError> {
        let rows = self.store.registrations_for_email(event_id, email).await?;
        Ok(rows.iter().any(|r| r.status().is_admission_eligible()))
    }

    /// То же, что `check_email_registration`, но при сбое базы возвращает `false`.
    ///
    /// Подходит только для подсказок в интерфейсе: запись регистрации
    /// идёт через `submit_registration`, который при сбое отказывает.
    pub async fn is_email_registered(&self, event_id: Uuid, email: &str) -> bool {
        match self.check_email_registration(event_id, email).await {
            Ok(registered) => registered,
            Err(e) => {
                error!("is_email_registered: lookup failed for event {}: {}", event_id, e);
                false
            }
        }
    }

    /// Принимает регистрацию из формы.
    ///
    /// Порядок: валидация, проверка дубликата, проверка мест, вставка.
    /// Между проверками и вставкой места не резервируются, гонки
    /// остаются на стороне базы.
    pub async fn submit_registration(
        &self,
        new: NewRegistration,
    ) -> Result<Registration, AdmissionError> {
        new.validate()?;

        let already = self
            .check_email_registration(new.event_id, &new.email)
            .await
            .map_err(|e| {
                error!("submit_registration: duplicate check failed for event {}: {}", new.event_id, e);
                AdmissionError::Unavailable(e.to_string())
            })?;
        if already {
            warn!("submit_registration: duplicate registration for event {}", new.event_id);
            return Err(AdmissionError::AlreadyRegistered);
        }

        let capacity = self.get_event_capacity(new.event_id).await;
        match capacity.error {
            None => {}
            Some(CapacityError::NotFound) => return Err(AdmissionError::EventNotFound),
            Some(e) => return Err(AdmissionError::Unavailable(e.to_string())),
        }
        // total = 0 означает, что лимит не задан
        if capacity.is_full {
            warn!("submit_registration: event {} is full ({} spots)", new.event_id, capacity.total);
            return Err(AdmissionError::EventFull);
        }

        let registration = self.store.insert_registration(&new).await.map_err(|e| {
            error!("submit_registration: insert failed for event {}: {}", new.event_id, e);
            AdmissionError::Unavailable(e.to_string())
        })?;

        info!(
            "Registration {} created for event {} ({} participants)",
            registration.id, registration.event_id, new.number_of_participants
        );
        Ok(registration)
    }
}
