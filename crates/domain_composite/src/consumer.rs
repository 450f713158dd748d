//! Deletion event consumer
//!
//! Each owning service gets its own consumer. A consumer reacts to `DELETE`
//! events by deleting everything its service holds for the event's product.
//! Delivery is at-least-once, so handling relies on idempotent deletes:
//! a redelivered event deletes nothing and still succeeds.

use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use core_kernel::{Event, EventType, PortError, ProductId};
use domain_product::ProductPort;
use domain_recommendation::RecommendationPort;
use domain_review::ReviewPort;

/// Service whose data a consumer deletes
#[derive(Clone)]
pub enum DeletionTarget {
    Product(Arc<dyn ProductPort>),
    Recommendations(Arc<dyn RecommendationPort>),
    Reviews(Arc<dyn ReviewPort>),
}

impl DeletionTarget {
    pub fn name(&self) -> &'static str {
        match self {
            DeletionTarget::Product(_) => "product",
            DeletionTarget::Recommendations(_) => "recommendations",
            DeletionTarget::Reviews(_) => "reviews",
        }
    }

    async fn delete(&self, product_id: ProductId) -> Result<(), PortError> {
        match self {
            DeletionTarget::Product(port) => port.delete_product(product_id).await,
            DeletionTarget::Recommendations(port) => {
                port.delete_recommendations_by_product(product_id).await
            }
            DeletionTarget::Reviews(port) => port.delete_reviews_by_product(product_id).await,
        }
    }
}

impl fmt::Debug for DeletionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DeletionTarget").field(&self.name()).finish()
    }
}

/// What happened to one delivered event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeOutcome {
    /// The payload was absent or unreadable
    Dropped,
    /// The event type has no handler
    Ignored(EventType),
    /// The product's data was deleted
    Deleted(ProductId),
}

/// Applies deletion events to one owning service
#[derive(Debug, Clone)]
pub struct DeleteEventConsumer {
    target: DeletionTarget,
}

impl DeleteEventConsumer {
    pub fn new(target: DeletionTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &DeletionTarget {
        &self.target
    }

    /// Handles one delivered event
    ///
    /// An absent event is dropped without any downstream call. Only `DELETE`
    /// is acted upon; other types are ignored.
    #[instrument(skip(self, event), fields(service = self.target.name()))]
    pub async fn handle(
        &self,
        event: Option<Event<ProductId>>,
    ) -> Result<ConsumeOutcome, PortError> {
        let Some(event) = event else {
            debug!("Dropping empty event");
            return Ok(ConsumeOutcome::Dropped);
        };

        info!(
            event_type = %event.event_type(),
            creation_date = %event.creation_date(),
            "Received an event"
        );

        match event.event_type() {
            EventType::Delete => {
                let product_id = *event.key();
                self.target.delete(product_id).await?;
                info!(
                    %product_id,
                    deleted_at = %Utc::now(),
                    "Deleted {} data of product",
                    self.target.name()
                );
                Ok(ConsumeOutcome::Deleted(product_id))
            }
            other => {
                debug!(event_type = %other, "No handler for event type");
                Ok(ConsumeOutcome::Ignored(other))
            }
        }
    }

    /// Decodes a raw payload and handles it
    pub async fn handle_payload(&self, payload: &[u8]) -> Result<ConsumeOutcome, PortError> {
        self.handle(decode(payload)).await
    }
}

/// Reads an event from a JSON payload; `null`, empty or malformed input is `None`
pub fn decode(payload: &[u8]) -> Option<Event<ProductId>> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice::<Option<Event<ProductId>>>(payload) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Discarding unreadable event payload");
            None
        }
    }
}

/// Feeds every payload received on `receiver` to `consumer`
///
/// Failures are logged and the loop moves on to the next payload. Returns
/// once every sender is gone.
pub async fn run_consumer(mut receiver: mpsc::Receiver<Vec<u8>>, consumer: DeleteEventConsumer) {
    let service = consumer.target().name();
    info!(service, "Event consumer started");

    while let Some(payload) = receiver.recv().await {
        match consumer.handle_payload(&payload).await {
            Ok(outcome) => debug!(service, ?outcome, "Event processed"),
            Err(e) => error!(service, error = %e, "Failed to process event"),
        }
    }

    info!(service, "Event channel closed, consumer stopped");
}
