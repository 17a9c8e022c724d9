//! Wire-level message types for the hikyaku backend protocol.
//!
//! Everything here is a plain record that serializes to the backend's
//! protobuf-JSON shape (camelCase field names, `Any`-style typed envelopes).
//! Construction enforces the structural invariants — non-empty actors and
//! type URLs, mutually exclusive query targeting modes, exactly-one-outcome
//! acknowledgments — so the client crate never has to re-validate.

pub mod ack;
pub mod actor;
pub mod command;
pub mod ids;
pub mod query;
pub mod time;
pub mod typed;

pub use ack::{Ack, AckError, AckStatus, Outcome};
pub use actor::{ActorContext, CommandContext, EmptyActor, UserId};
pub use command::Command;
pub use ids::{CommandId, QueryId};
pub use query::{EntityFilters, EntityId, EntityIdFilter, Query, Target};
pub use time::{Timestamp, ZoneId, ZoneOffset};
pub use typed::{KnownMessage, TypeError, TypeUrl, TypedJson, TypedMessage};
