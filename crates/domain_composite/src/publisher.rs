//! Event publishing
//!
//! Deletion of a composite is announced with one event per owning service.
//! [`EventPublisher`] is the seam to a message broker; [`ChannelPublisher`]
//! binds it to bounded in-process channels so the whole flow runs locally.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

use core_kernel::{Event, ProductId};

/// Destination of an event, one per owning service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Products,
    Recommendations,
    Reviews,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Products, Topic::Recommendations, Topic::Reviews];

    pub fn name(&self) -> &'static str {
        match self {
            Topic::Products => "products",
            Topic::Recommendations => "recommendations",
            Topic::Reviews => "reviews",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while publishing an event
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Nobody listens on the topic anymore
    #[error("Topic '{0}' is closed")]
    Closed(Topic),
}

/// Publishes product events to a topic
#[async_trait]
pub trait EventPublisher: Send + Sync + 'static {
    async fn publish(&self, topic: Topic, event: &Event<ProductId>) -> Result<(), PublishError>;
}

/// Publisher writing JSON payloads to bounded in-process channels
///
/// `publish` waits for capacity when a channel is full.
#[derive(Debug, Clone)]
pub struct ChannelPublisher {
    products: mpsc::Sender<Vec<u8>>,
    recommendations: mpsc::Sender<Vec<u8>>,
    reviews: mpsc::Sender<Vec<u8>>,
}

impl ChannelPublisher {
    fn sender(&self, topic: Topic) -> &mpsc::Sender<Vec<u8>> {
        match topic {
            Topic::Products => &self.products,
            Topic::Recommendations => &self.recommendations,
            Topic::Reviews => &self.reviews,
        }
    }
}

#[async_trait]
impl EventPublisher for ChannelPublisher {
    async fn publish(&self, topic: Topic, event: &Event<ProductId>) -> Result<(), PublishError> {
        let payload = serde_json::to_vec(event)?;
        self.sender(topic)
            .send(payload)
            .await
            .map_err(|_| PublishError::Closed(topic))?;
        debug!(%topic, event_type = %event.event_type(), key = %event.key(), "Event published");
        Ok(())
    }
}

/// Receiving ends of the in-process topics
#[derive(Debug)]
pub struct EventChannels {
    pub products: mpsc::Receiver<Vec<u8>>,
    pub recommendations: mpsc::Receiver<Vec<u8>>,
    pub reviews: mpsc::Receiver<Vec<u8>>,
}

/// Creates the three topics, each buffering up to `buffer` events
pub fn channel(buffer: usize) -> (ChannelPublisher, EventChannels) {
    let buffer = buffer.max(1);
    let (products_tx, products_rx) = mpsc::channel(buffer);
    let (recommendations_tx, recommendations_rx) = mpsc::channel(buffer);
    let (reviews_tx, reviews_rx) = mpsc::channel(buffer);

    (
        ChannelPublisher {
            products: products_tx,
            recommendations: recommendations_tx,
            reviews: reviews_tx,
        },
        EventChannels {
            products: products_rx,
            recommendations: recommendations_rx,
            reviews: reviews_rx,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::EventType;

    #[tokio::test]
    async fn test_publish_routes_to_topic() {
        let (publisher, mut channels) = channel(4);
        publisher
            .publish(Topic::Reviews, &Event::delete(ProductId::new(42)))
            .await
            .unwrap();

        let payload = channels.reviews.try_recv().unwrap();
        let event: Event<ProductId> = serde_json::from_slice(&payload).unwrap();
        assert_eq!(event.event_type(), EventType::Delete);
        assert_eq!(*event.key(), ProductId::new(42));

        assert!(channels.products.try_recv().is_err());
        assert!(channels.recommendations.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_publish_to_closed_topic_fails() {
        let (publisher, channels) = channel(1);
        drop(channels);

        let error = publisher
            .publish(Topic::Products, &Event::delete(ProductId::new(1)))
            .await
            .unwrap_err();
        assert!(matches!(error, PublishError::Closed(Topic::Products)));
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = serde_json::to_value(Event::delete(ProductId::new(7))).unwrap();
        assert_eq!(payload["type"], "DELETE");
        assert_eq!(payload["key"], 7);
        assert!(payload["creationDate"].is_string());
    }
}
