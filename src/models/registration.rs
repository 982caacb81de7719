use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// Статус оплаты регистрации.
///
/// Неизвестные значения из базы сохраняются как есть в `Other`, чтобы
/// их можно было показать, но в учёте мест они не участвуют.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Confirmed,
    Cancelled,
    Failed,
    Other(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Confirmed => "confirmed",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Other(s) => s,
        }
    }

    /// Занимает ли регистрация с этим статусом место на событии.
    pub fn is_admission_eligible(&self) -> bool {
        matches!(
            self,
            PaymentStatus::Pending | PaymentStatus::Paid | PaymentStatus::Confirmed
        )
    }
}

impl From<&str> for PaymentStatus {
    fn from(value: &str) -> Self {
        match value {
            "pending" => PaymentStatus::Pending,
            "paid" => PaymentStatus::Paid,
            "confirmed" => PaymentStatus::Confirmed,
            "cancelled" => PaymentStatus::Cancelled,
            "failed" => PaymentStatus::Failed,
            other => PaymentStatus::Other(other.to_string()),
        }
    }
}

impl From<Option<&str>> for PaymentStatus {
    // NULL в колонке статуса - не занимает место и не попадает в статистику
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(status) => PaymentStatus::from(status),
            None => PaymentStatus::Other(String::new()),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Минимальная проекция регистрации для подсчёта мест и статистики.
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationRow {
    pub payment_status: Option<String>,
    pub number_of_participants: Option<i32>,
}

impl RegistrationRow {
    pub fn status(&self) -> PaymentStatus {
        PaymentStatus::from(self.payment_status.as_deref())
    }

    // NULL в базе означает одного участника
    pub fn participants(&self) -> i64 {
        self.number_of_participants.map(i64::from).unwrap_or(1)
    }
}

/// Полная запись регистрации.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub number_of_participants: Option<i32>,
    pub payment_status: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn status(&self) -> PaymentStatus {
        PaymentStatus::from(self.payment_status.as_deref())
    }

    pub fn row(&self) -> RegistrationRow {
        RegistrationRow {
            payment_status: self.payment_status.clone(),
            number_of_participants: self.number_of_participants,
        }
    }
}

fn default_participants() -> i32 {
    1
}

/// Данные формы регистрации.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewRegistration {
    pub event_id: Uuid,
    #[validate(email(message = "Некорректный email"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "Имя должно быть от 1 до 200 символов"))]
    pub name: String,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[serde(default = "default_participants")]
    #[validate(range(min = 1, max = 20, message = "Количество участников от 1 до 20"))]
    pub number_of_participants: i32,
}
