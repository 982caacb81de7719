#![allow(dead_code)]

use fake::{faker::internet::en::SafeEmail, Fake};
use std::sync::Arc;
use uuid::Uuid;

use games_connect::{
    models::{Event, PaymentStatus},
    services::RegistrationService,
    store::InMemoryRegistrationStore,
    AppState,
};

pub struct Fixture {
    pub store: Arc<InMemoryRegistrationStore>,
    pub service: RegistrationService,
}

pub fn fixture() -> Fixture {
    let store = Arc::new(InMemoryRegistrationStore::new());
    let service = RegistrationService::new(store.clone());
    Fixture { store, service }
}

impl Fixture {
    pub fn event(&self, total_spots: i32) -> Uuid {
        let event = Event::new(Uuid::new_v4(), total_spots);
        let id = event.id;
        self.store.add_event(event).unwrap();
        id
    }

    /// Добавляет `count` регистраций со случайными email.
    pub fn register_many(&self, event_id: Uuid, count: usize, status: PaymentStatus) {
        for _ in 0..count {
            self.store
                .add_registration(event_id, &email(), status.clone(), None)
                .unwrap();
        }
    }
}

pub fn email() -> String {
    SafeEmail().fake()
}

pub fn app_state(store: Arc<InMemoryRegistrationStore>) -> Arc<AppState> {
    AppState::with_store(store)
}
