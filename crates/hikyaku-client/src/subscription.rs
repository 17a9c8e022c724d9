//! The streaming-subscription collaborator boundary.

use async_trait::async_trait;
use serde_json::Value;

/// Receives streamed query results, one decoded item at a time.
pub type ItemCallback = Box<dyn FnMut(Value) + Send>;

/// Registers interest in a location of the streaming result store.
///
/// Delivery is lazy, unbounded and non-restartable: zero or more items are
/// pushed to the callback for as long as the store keeps the location
/// alive. Once registered, the subscription's lifecycle — including
/// teardown — belongs to the implementation, not to the dispatcher that
/// created it.
#[async_trait]
pub trait SubscriptionClient: Send + Sync {
    async fn subscribe(&self, path: &str, on_item: ItemCallback);
}
