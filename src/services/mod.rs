//! Сервисный слой учёта мест и приёма регистраций.
//!
//! `RegistrationService` собран из нескольких файлов, каждый добавляет
//! свой `impl`:
//! - `capacity`: свободные места события;
//! - `admission`: проверка повторной регистрации и приём новой;
//! - `stats`: статистика по статусам оплаты.
//!
//! Все операции чтения не бросают ошибок наружу, а возвращают значения
//! с заполненным полем ошибки, чтобы интерфейс всегда мог что-то показать.

pub mod admission;
pub mod capacity;
pub mod stats;

use std::sync::Arc;

use crate::store::RegistrationStore;

pub use capacity::EventCapacity;
pub use stats::RegistrationStats;

#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn RegistrationStore>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn RegistrationStore>) -> Self {
        Self { store }
    }
}
