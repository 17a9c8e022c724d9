//! Dispatch-level failures surfaced through caller error callbacks.

use hikyaku_types::AckError;

use crate::transport::TransportError;

/// Everything that can go wrong between building an envelope and routing
/// its reply.
///
/// A command rejection is deliberately absent: it is a well-formed domain
/// refusal, not a failure, and goes to its own callback.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Network-level failure from the transport collaborator.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The backend answered with a non-success HTTP status.
    #[error("backend replied with status {0}")]
    Status(u16),

    /// The envelope could not be serialized for the wire.
    #[error("envelope could not be encoded: {0}")]
    Encode(serde_json::Error),

    /// A query reply carried no subscription path.
    #[error("query reply carried no subscription path")]
    EmptySubscription,

    /// A command reply was not a decodable acknowledgment.
    #[error("acknowledgment could not be decoded: {0}")]
    MalformedAck(#[from] serde_json::Error),

    /// An acknowledgment broke the exactly-one-outcome contract.
    #[error(transparent)]
    ProtocolViolation(#[from] AckError),

    /// A well-formed negative acknowledgment; carries the backend's error
    /// detail payload.
    #[error("command failed at the backend: {0}")]
    Remote(serde_json::Value),
}
