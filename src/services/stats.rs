use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use super::RegistrationService;
use crate::models::{PaymentStatus, RegistrationRow};

/// Статистика регистраций события для админки.
///
/// `confirmed` и `paid` считаются раздельно, в отличие от учёта мест,
/// где оба статуса занимают место одинаково.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationStats {
    pub pending: u32,
    pub confirmed: u32,
    pub paid: u32,
    pub total_participants: i64,
}

impl RegistrationStats {
    pub fn from_rows(rows: &[RegistrationRow]) -> Self {
        rows.iter().fold(Self::default(), |mut stats, row| {
            match row.status() {
                PaymentStatus::Pending => stats.pending += 1,
                PaymentStatus::Confirmed => stats.confirmed += 1,
                PaymentStatus::Paid => stats.paid += 1,
                _ => {}
            }
            // Участники суммируются по всем строкам, независимо от статуса
            stats.total_participants += row.participants();
            stats
        })
    }
}

impl RegistrationService {
    /// Статистика по статусам оплаты. При сбое чтения возвращает нули.
    pub async fn get_registration_stats(&self, event_id: Uuid) -> RegistrationStats {
        match self.store.registrations_for_event(event_id).await {
            Ok(rows) => RegistrationStats::from_rows(&rows),
            Err(e) => {
                error!("get_registration_stats: failed to load registrations for {}: {}", event_id, e);
                RegistrationStats::default()
            }
        }
    }
}
