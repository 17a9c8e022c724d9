//! Typed envelopes — the `(payload, type URL)` pairs exchanged with the
//! backend.
//!
//! A [`TypedMessage`] pairs a payload with the type URL of its schema, the
//! same role protobuf's `Any` plays. For messages whose schema this crate
//! owns ([`KnownMessage`]) the tag comes from the type itself and cannot
//! mismatch; for raw JSON payloads the caller declares the tag and
//! construction rejects empty or contradictory declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A schema type identifier, e.g. `type.hikyaku.io/hikyaku.client.Query`.
#[derive(Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeUrl(String);

/// A message whose canonical type URL is fixed by its schema.
pub trait KnownMessage: Serialize {
    /// Canonical type URL of this message's schema.
    const TYPE_URL: &'static str;

    fn type_url() -> TypeUrl {
        TypeUrl(Self::TYPE_URL.to_string())
    }
}

/// Envelope construction failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("type URL must not be empty")]
    EmptyTypeUrl,
    #[error("declared type `{declared}` does not match payload type `{actual}`")]
    Mismatch { declared: String, actual: String },
}

impl TypeUrl {
    pub fn new(value: impl Into<String>) -> Result<Self, TypeError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TypeError::EmptyTypeUrl);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for TypeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeUrl({})", self.0)
    }
}

/// A payload tagged with its declared schema type.
///
/// Serializes `Any`-style: `{ "typeUrl": ..., "value": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedMessage<T> {
    type_url: TypeUrl,
    value: T,
}

/// The dynamically-typed envelope form the transport consumes.
pub type TypedJson = TypedMessage<serde_json::Value>;

impl<T: KnownMessage> TypedMessage<T> {
    /// Wrap a schema-bearing message under its canonical type URL.
    pub fn of(value: T) -> Self {
        Self { type_url: T::type_url(), value }
    }

    /// Wrap under an explicitly declared type URL, rejecting mismatches.
    pub fn new(value: T, declared: TypeUrl) -> Result<Self, TypeError> {
        if declared.as_str() != T::TYPE_URL {
            return Err(TypeError::Mismatch {
                declared: declared.as_str().to_string(),
                actual: T::TYPE_URL.to_string(),
            });
        }
        Ok(Self { type_url: declared, value })
    }
}

impl TypedJson {
    /// Wrap a raw JSON payload under a caller-declared type URL.
    pub fn from_value(value: serde_json::Value, type_url: TypeUrl) -> Self {
        Self { type_url, value }
    }
}

impl<T> TypedMessage<T> {
    pub fn type_url(&self) -> &TypeUrl {
        &self.type_url
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Serialize> TypedMessage<T> {
    /// Lower the payload to its JSON form, keeping the tag.
    pub fn into_json(self) -> Result<TypedJson, serde_json::Error> {
        Ok(TypedMessage {
            type_url: self.type_url,
            value: serde_json::to_value(self.value)?,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::actor::{ActorContext, UserId};
    use crate::ids::QueryId;
    use crate::query::{Query, Target};
    use crate::time::{Timestamp, ZoneOffset};

    use super::*;

    fn query() -> Query {
        Query::new(
            QueryId::mint(),
            Target::all(TypeUrl::new("type.hikyaku.io/hikyaku.test.Task").unwrap()),
            ActorContext::new(
                UserId::new("amy").unwrap(),
                Timestamp::from_epoch_seconds(1),
                ZoneOffset::utc(),
            ),
        )
    }

    #[test]
    fn test_empty_type_url_rejected() {
        assert_eq!(TypeUrl::new(""), Err(TypeError::EmptyTypeUrl));
        assert_eq!(TypeUrl::new("  "), Err(TypeError::EmptyTypeUrl));
    }

    #[test]
    fn test_of_uses_canonical_tag() {
        let envelope = TypedMessage::of(query());
        assert_eq!(envelope.type_url().as_str(), Query::TYPE_URL);
    }

    #[test]
    fn test_mismatched_declaration_rejected() {
        let declared = TypeUrl::new("type.hikyaku.io/hikyaku.test.Task").unwrap();
        let result = TypedMessage::new(query(), declared);
        assert!(matches!(result, Err(TypeError::Mismatch { .. })));
    }

    #[test]
    fn test_matching_declaration_accepted() {
        let declared = TypeUrl::new(Query::TYPE_URL).unwrap();
        assert!(TypedMessage::new(query(), declared).is_ok());
    }

    #[test]
    fn test_any_style_wire_shape() {
        let envelope = TypedJson::from_value(
            json!({ "id": 7 }),
            TypeUrl::new("type.hikyaku.io/hikyaku.test.TaskId").unwrap(),
        );
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            json!({
                "typeUrl": "type.hikyaku.io/hikyaku.test.TaskId",
                "value": { "id": 7 },
            })
        );
    }

    #[test]
    fn test_into_json_keeps_tag() {
        let envelope = TypedMessage::of(query());
        let tag = envelope.type_url().clone();
        let lowered = envelope.into_json().unwrap();
        assert_eq!(lowered.type_url(), &tag);
        assert!(lowered.value().get("id").is_some());
    }
}
