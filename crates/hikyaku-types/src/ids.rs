//! Request identifiers, minted fresh for every outgoing envelope.
//!
//! `QueryId` is a `q-`-prefixed UUIDv4 in text form; `CommandId` is a bare
//! UUIDv4. Both are opaque to the backend — uniqueness across mints is
//! delegated to the UUID source and holds with overwhelming probability.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single query, in `q-<uuid-v4>` text form.
#[derive(Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(String);

/// Identifier of a single command, a bare UUIDv4 in text form.
#[derive(Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandId(String);

impl QueryId {
    /// Mint a fresh identifier, distinct from all prior mints.
    pub fn mint() -> Self {
        Self(format!("q-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CommandId {
    /// Mint a fresh identifier, distinct from all prior mints.
    pub fn mint() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QueryId({})", self.0)
    }
}

impl fmt::Debug for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandId({})", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
