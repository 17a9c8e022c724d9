//! Drives one request to completion, routing replies onto caller callbacks.
//!
//! ```text
//!   caller ──▶ ActorRequestFactory ──▶ BackendClient ──▶ Transport ──▶ backend
//!                                          │
//!               query: reply body is a subscription path, handed to the
//!               SubscriptionClient, which pushes items to the caller
//!                                          │
//!               command: reply body is an Ack, classified into exactly one
//!               of success / error / rejection
//! ```

use std::sync::Arc;

use hikyaku_types::{Ack, Outcome, Query, TypeUrl, TypedJson, TypedMessage};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::DispatchError;
use crate::factory::ActorRequestFactory;
use crate::subscription::{ItemCallback, SubscriptionClient};
use crate::transport::Transport;

/// Query submission endpoint.
pub const QUERY_PATH: &str = "/query";
/// Command submission endpoint.
pub const COMMAND_PATH: &str = "/command";

/// Receives a dispatch failure. Fires at most once per call.
pub type ErrorCallback = Box<dyn FnOnce(DispatchError) + Send>;

/// The client of the application backend.
///
/// Orchestrates the transport, the streaming-subscription client and the
/// [`ActorRequestFactory`]. Calls never block the caller beyond the
/// transport round-trip, and concurrent calls share no mutable state —
/// each builds its own envelope and context.
pub struct BackendClient {
    transport: Arc<dyn Transport>,
    subscriptions: Arc<dyn SubscriptionClient>,
    factory: ActorRequestFactory,
}

impl BackendClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        subscriptions: Arc<dyn SubscriptionClient>,
        factory: ActorRequestFactory,
    ) -> Self {
        Self { transport, subscriptions, factory }
    }

    /// Fetch every instance of `target_type`.
    ///
    /// Items arrive through `on_data` asynchronously, zero or more of them,
    /// for as long as the subscription lives — this call only arranges the
    /// subscription and returns. With `on_error` set to `None`, failures
    /// are logged at debug level and dropped; that no-op default is the
    /// documented contract, not an omission.
    pub async fn fetch_all(
        &self,
        target_type: &TypeUrl,
        on_data: ItemCallback,
        on_error: Option<ErrorCallback>,
    ) {
        let query = self.factory.query_all(target_type);
        self.fetch(query, on_data, on_error).await;
    }

    /// Fetch the single instance of `target_type` identified by `id`.
    ///
    /// Same delivery and error contract as [`BackendClient::fetch_all`].
    pub async fn fetch_by_id(
        &self,
        target_type: &TypeUrl,
        id: &TypedJson,
        on_data: ItemCallback,
        on_error: Option<ErrorCallback>,
    ) {
        let query = self.factory.query_by_id(target_type, id);
        self.fetch(query, on_data, on_error).await;
    }

    /// Send a command and classify its single acknowledgment.
    ///
    /// Exactly one callback fires per call, and only after the reply is
    /// fully received and parsed:
    ///
    /// - `on_success` — the backend acknowledged with `ok`; no payload.
    /// - `on_error` — transport failure, an undecodable or
    ///   contract-violating acknowledgment, or a well-formed `error`
    ///   outcome (as [`DispatchError::Remote`] with the detail payload).
    /// - `on_rejection` — a business rule refused the command; receives
    ///   the rejection detail payload.
    ///
    /// An acknowledgment with zero or several outcome fields is a protocol
    /// violation and is surfaced as an error, never matched to a branch.
    pub async fn send_command(
        &self,
        message: TypedJson,
        on_success: impl FnOnce() + Send,
        on_error: impl FnOnce(DispatchError) + Send,
        on_rejection: impl FnOnce(Value) + Send,
    ) {
        let command = self.factory.command(message);
        let id = command.value().id().clone();
        debug!(command = %id, "sending command");

        let envelope = match command.into_json() {
            Ok(envelope) => envelope,
            Err(e) => return on_error(DispatchError::Encode(e)),
        };
        let reply = match self.transport.post(COMMAND_PATH, &envelope).await {
            Ok(reply) => reply,
            Err(e) => return on_error(e.into()),
        };
        if !reply.is_success() {
            return on_error(DispatchError::Status(reply.status));
        }

        let ack: Ack = match serde_json::from_str(&reply.body) {
            Ok(ack) => ack,
            Err(e) => return on_error(DispatchError::MalformedAck(e)),
        };
        match ack.outcome() {
            Ok(Outcome::Ok) => on_success(),
            Ok(Outcome::Error(detail)) => on_error(DispatchError::Remote(detail)),
            Ok(Outcome::Rejection(detail)) => {
                debug!(command = %id, "command rejected");
                on_rejection(detail)
            }
            Err(violation) => {
                warn!(command = %id, %violation, "acknowledgment violated outcome contract");
                on_error(violation.into())
            }
        }
    }

    async fn fetch(
        &self,
        query: TypedMessage<Query>,
        on_data: ItemCallback,
        on_error: Option<ErrorCallback>,
    ) {
        let id = query.value().id().clone();
        debug!(query = %id, "sending query");

        if let Err(e) = self.try_fetch(query, on_data).await {
            match on_error {
                Some(callback) => callback(e),
                None => debug!(query = %id, error = %e, "query failed, no error callback"),
            }
        }
    }

    async fn try_fetch(
        &self,
        query: TypedMessage<Query>,
        on_data: ItemCallback,
    ) -> Result<(), DispatchError> {
        let envelope = query.into_json().map_err(DispatchError::Encode)?;
        let reply = self.transport.post(QUERY_PATH, &envelope).await?;
        if !reply.is_success() {
            return Err(DispatchError::Status(reply.status));
        }

        // The reply body is a location in the streaming result store.
        let path = reply.body.trim();
        if path.is_empty() {
            return Err(DispatchError::EmptySubscription);
        }

        // Lifecycle ownership passes to the subscription client here; the
        // stream may deliver items indefinitely after this call returns.
        self.subscriptions.subscribe(path, on_data).await;
        Ok(())
    }
}
