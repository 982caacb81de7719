use serde::{Serialize, Serializer};
use tracing::{debug, error, warn};
use uuid::Uuid;

use super::RegistrationService;
use crate::error::CapacityError;
use crate::models::RegistrationRow;

/// Вместимость события на момент запроса.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCapacity {
    pub available: u32,
    pub total: u32,
    pub registered: u32,
    pub is_full: bool,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "error_message")]
    pub error: Option<CapacityError>,
}

fn error_message<S: Serializer>(error: &Option<CapacityError>, s: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => s.serialize_str(&e.to_string()),
        None => s.serialize_none(),
    }
}

/// Свободные места: никогда не меньше нуля, даже при перебронировании.
pub fn available_seats(total: u32, registered: u32) -> u32 {
    total.saturating_sub(registered)
}

/// Событие с нулевой вместимостью полным не считается.
pub fn is_full(total: u32, available: u32) -> bool {
    available == 0 && total > 0
}

/// Количество регистраций в статусах pending/paid/confirmed.
pub fn count_eligible(rows: &[RegistrationRow]) -> u32 {
    let count = rows
        .iter()
        .filter(|r| r.status().is_admission_eligible())
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

impl EventCapacity {
    pub fn from_counts(total: u32, registered: u32) -> Self {
        let available = available_seats(total, registered);
        Self {
            available,
            total,
            registered,
            is_full: is_full(total, available),
            error: None,
        }
    }

    /// Результат с ошибкой: мест нет, `total` - лучшее известное значение.
    pub fn failed(total: u32, error: CapacityError) -> Self {
        Self {
            available: 0,
            total,
            registered: 0,
            is_full: false,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl RegistrationService {
    /// Считает свободные места события.
    ///
    /// Ошибки не пробрасываются: отсутствующее событие, сбой чтения и
    /// некорректные данные возвращаются в поле `error` с `available = 0`.
    pub async fn get_event_capacity(&self, event_id: Uuid) -> EventCapacity {
        let event = match self.store.find_event(event_id).await {
            Ok(Some(event)) => event,
            Ok(None) => {
                warn!("get_event_capacity: event {} not found", event_id);
                return EventCapacity::failed(0, CapacityError::NotFound);
            }
            Err(e) => {
                error!("get_event_capacity: failed to load event {}: {}", event_id, e);
                return EventCapacity::failed(0, e.into());
            }
        };

        let declared = event.declared_capacity();
        let total = match u32::try_from(declared) {
            Ok(total) => total,
            Err(_) => {
                error!("get_event_capacity: event {} has negative capacity {}", event_id, declared);
                return EventCapacity::failed(
                    0,
                    CapacityError::Unknown(format!("invalid capacity {}", declared)),
                );
            }
        };

        let rows = match self.store.registrations_for_event(event_id).await {
            Ok(rows) => rows,
            Err(e) => {
                error!("get_event_capacity: failed to load registrations for {}: {}", event_id, e);
                return EventCapacity::failed(total, e.into());
            }
        };

        let capacity = EventCapacity::from_counts(total, count_eligible(&rows));
        debug!(
            "Capacity for event {}: {}/{} taken, {} available",
            event_id, capacity.registered, capacity.total, capacity.available
        );
        capacity
    }
}
