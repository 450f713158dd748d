//! Deletion consumers driven by fixture events

use std::sync::Arc;

use core_kernel::{EventType, PageRequest};
use domain_composite::{ConsumeOutcome, DeleteEventConsumer, DeletionTarget};
use test_utils::*;

#[tokio::test]
async fn test_delete_payload_removes_seeded_reviews() {
    let backends = MockBackends::seeded(IdFixtures::product_id()).await;
    let consumer = DeleteEventConsumer::new(DeletionTarget::Reviews(backends.reviews.clone()));

    let outcome = consumer
        .handle_payload(&EventFixtures::delete_payload(IdFixtures::product_id()))
        .await
        .unwrap();

    assert_eq!(outcome, ConsumeOutcome::Deleted(IdFixtures::product_id()));
    assert_eq!(backends.reviews.count_for_product(IdFixtures::product_id()).await, 0);
}

#[tokio::test]
async fn test_create_event_leaves_data_alone() {
    let backends = MockBackends::seeded(IdFixtures::product_id()).await;
    let products: Arc<_> = backends.products.clone();
    let consumer = DeleteEventConsumer::new(DeletionTarget::Product(products));

    let outcome = consumer
        .handle(Some(EventFixtures::create(IdFixtures::product_id())))
        .await
        .unwrap();

    assert_eq!(outcome, ConsumeOutcome::Ignored(EventType::Create));
    assert!(backends.products.contains(IdFixtures::product_id()).await);
    assert_eq!(backends.products.delete_calls(), 0);
}

#[tokio::test]
async fn test_fixture_event_date_is_fixed() {
    let event = EventFixtures::delete(IdFixtures::missing_product_id());
    assert_eq!(event.creation_date(), EventFixtures::creation_date());
    assert_eq!(event.event_type(), EventType::Delete);
}

#[tokio::test]
async fn test_missing_product_is_not_found() {
    let backends = MockBackends::seeded(IdFixtures::product_id()).await;
    let (service, _channels) = backends.service_with_channels(4);

    let err = service
        .get_composite_product(IdFixtures::missing_product_id(), PageRequest::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}
