mod common;

use games_connect::{models::PaymentStatus, services::RegistrationStats};
use uuid::Uuid;

use common::{email, fixture};

#[tokio::test]
async fn stats_count_each_status_separately() {
    let f = fixture();
    let event_id = f.event(50);
    f.register_many(event_id, 4, PaymentStatus::Pending);
    f.register_many(event_id, 2, PaymentStatus::Confirmed);
    f.register_many(event_id, 3, PaymentStatus::Paid);
    f.register_many(event_id, 5, PaymentStatus::Cancelled);

    let stats = f.service.get_registration_stats(event_id).await;

    assert_eq!(stats.pending, 4);
    assert_eq!(stats.confirmed, 2);
    assert_eq!(stats.paid, 3);
    // Каждая строка без количества участников считается за одного
    assert_eq!(stats.total_participants, 14);
}

#[tokio::test]
async fn participants_are_summed_across_all_statuses() {
    let f = fixture();
    let event_id = f.event(50);
    f.store.add_registration(event_id, &email(), PaymentStatus::Paid, Some(3)).unwrap();
    f.store.add_registration(event_id, &email(), PaymentStatus::Pending, None).unwrap();
    f.store.add_registration(event_id, &email(), PaymentStatus::Cancelled, Some(4)).unwrap();
    f.store.add_registration(event_id, &email(), PaymentStatus::Failed, Some(2)).unwrap();

    let stats = f.service.get_registration_stats(event_id).await;

    assert_eq!(stats.paid, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.confirmed, 0);
    assert_eq!(stats.total_participants, 10);
}

#[tokio::test]
async fn unknown_event_has_empty_stats() {
    let f = fixture();

    let stats = f.service.get_registration_stats(Uuid::new_v4()).await;

    assert_eq!(stats, RegistrationStats::default());
}

#[tokio::test]
async fn backend_failure_returns_zeroed_stats() {
    let f = fixture();
    let event_id = f.event(50);
    f.register_many(event_id, 3, PaymentStatus::Paid);
    f.store.set_unavailable(true);

    let stats = f.service.get_registration_stats(event_id).await;

    assert_eq!(
        stats,
        RegistrationStats { pending: 0, confirmed: 0, paid: 0, total_participants: 0 }
    );
}
