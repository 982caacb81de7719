use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{RegistrationStore, StoreResult};
use crate::database::Database;
use crate::models::{Event, NewRegistration, Registration, RegistrationRow};

#[derive(Clone)]
pub struct PgRegistrationStore {
    pool: PgPool,
}

impl PgRegistrationStore {
    pub fn new(db: &Database) -> Self {
        Self { pool: db.pool.clone() }
    }
}

#[async_trait]
impl RegistrationStore for PgRegistrationStore {
    async fn find_event(&self, event_id: Uuid) -> StoreResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, total_spots, spots FROM events WHERE id = $1"
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn registrations_for_event(&self, event_id: Uuid) -> StoreResult<Vec<RegistrationRow>> {
        let rows = sqlx::query_as::<_, RegistrationRow>(
            "SELECT payment_status, number_of_participants
             FROM registrations
             WHERE event_id = $1"
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn registrations_for_email(
        &self,
        event_id: Uuid,
        email: &str,
    ) -> StoreResult<Vec<RegistrationRow>> {
        // Сравнение через `=` на text: регистр учитывается
        let rows = sqlx::query_as::<_, RegistrationRow>(
            "SELECT payment_status, number_of_participants
             FROM registrations
             WHERE event_id = $1 AND email = $2"
        )
        .bind(event_id)
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert_registration(&self, new: &NewRegistration) -> StoreResult<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations
                (event_id, email, name, phone, number_of_participants, payment_status)
            VALUES ($1, $2, $3, $4, $5, 'pending')
            RETURNING id, event_id, email, name, phone, number_of_participants,
                      payment_status, created_at
            "#
        )
        .bind(new.event_id)
        .bind(&new.email)
        .bind(&new.name)
        .bind(&new.phone)
        .bind(new.number_of_participants)
        .fetch_one(&self.pool)
        .await?;

        Ok(registration)
    }
}
