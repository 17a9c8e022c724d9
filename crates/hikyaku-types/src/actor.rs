//! Actor identity and the per-request context records carrying it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, ZoneOffset};

/// Opaque identifier of the entity issuing requests.
///
/// Never empty — construction rejects blank values so every downstream
/// envelope is guaranteed an attributable actor.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// An actor identifier was empty or all-whitespace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("actor identifier must not be empty")]
pub struct EmptyActor;

impl UserId {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyActor> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EmptyActor);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who issued a request, when, and from which zone.
///
/// Built fresh for every request and never mutated afterwards — two
/// requests from the same factory carry independent snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorContext {
    actor: UserId,
    timestamp: Timestamp,
    zone_offset: ZoneOffset,
}

impl ActorContext {
    pub fn new(actor: UserId, timestamp: Timestamp, zone_offset: ZoneOffset) -> Self {
        Self { actor, timestamp, zone_offset }
    }

    pub fn actor(&self) -> &UserId {
        &self.actor
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn zone_offset(&self) -> &ZoneOffset {
        &self.zone_offset
    }
}

/// The command-side wrapper around [`ActorContext`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandContext {
    actor_context: ActorContext,
}

impl CommandContext {
    pub fn new(actor_context: ActorContext) -> Self {
        Self { actor_context }
    }

    pub fn actor_context(&self) -> &ActorContext {
        &self.actor_context
    }
}

// ============================================================================
// Tests
// ============================================================================
