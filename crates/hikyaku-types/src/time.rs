//! Time and zone records stamped onto request contexts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An instant in time at whole-second resolution.
///
/// Sub-second precision is deliberately discarded: the backend keys nothing
/// off it and dropping it keeps contexts byte-stable within a second.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Timestamp {
    /// Seconds since the Unix epoch.
    pub seconds: i64,
}

impl Timestamp {
    pub fn from_epoch_seconds(seconds: i64) -> Self {
        Self { seconds }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.seconds)
    }
}

/// An IANA zone name, e.g. `Europe/Helsinki`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A zone's displacement from UTC.
///
/// Sign convention: positive offsets lie EAST of UTC, so
/// `local = UTC + amount_seconds`. `Europe/Helsinki` in winter is `+7200`,
/// `America/New_York` is `-18000`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneOffset {
    pub id: ZoneId,
    pub amount_seconds: i32,
}

impl ZoneOffset {
    pub fn new(id: ZoneId, amount_seconds: i32) -> Self {
        Self { id, amount_seconds }
    }

    /// The zero offset under the canonical `UTC` zone name.
    pub fn utc() -> Self {
        Self::new(ZoneId::new("UTC"), 0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_wire_shape() {
        let ts = Timestamp::from_epoch_seconds(1_700_000_000);
        let json = serde_json::to_value(ts).unwrap();
        assert_eq!(json, serde_json::json!({ "seconds": 1_700_000_000_i64 }));
    }

    #[test]
    fn test_zone_offset_wire_shape() {
        let offset = ZoneOffset::new(ZoneId::new("Asia/Tokyo"), 9 * 3600);
        let json = serde_json::to_value(&offset).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "Asia/Tokyo", "amountSeconds": 32_400 })
        );
    }

    #[test]
    fn test_utc_offset_is_zero() {
        let offset = ZoneOffset::utc();
        assert_eq!(offset.amount_seconds, 0);
        assert_eq!(offset.id.as_str(), "UTC");
    }
}
