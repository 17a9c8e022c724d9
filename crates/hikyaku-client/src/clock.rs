//! The clock/locale capability behind context building.
//!
//! "Now" and the local zone are injected rather than read ambiently, so a
//! [`FixedClock`] can pin them in tests.

use hikyaku_types::{Timestamp, ZoneId, ZoneOffset};

/// Source of the current instant and the local zone.
pub trait Clock: Send + Sync {
    /// Current instant, whole seconds since the Unix epoch.
    fn now(&self) -> Timestamp;

    /// The local zone's name and displacement from UTC.
    ///
    /// Positive offsets lie east of UTC (`local = UTC + amount_seconds`).
    fn zone(&self) -> ZoneOffset;
}

/// The host environment's clock and zone.
///
/// Falls back to `UTC` / zero offset when the platform cannot report a
/// local zone (containers without tzdata, multi-threaded offset lookup
/// restrictions).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let seconds = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Timestamp::from_epoch_seconds(seconds)
    }

    fn zone(&self) -> ZoneOffset {
        let id = iana_time_zone::get_timezone()
            .map(ZoneId::new)
            .unwrap_or_else(|_| ZoneId::new("UTC"));
        let amount_seconds = time::UtcOffset::current_local_offset()
            .map(|offset| offset.whole_seconds())
            .unwrap_or(0);
        ZoneOffset::new(id, amount_seconds)
    }
}

/// A clock pinned to one instant and zone — for deterministic tests.
#[derive(Clone, Debug)]
pub struct FixedClock {
    pub timestamp: Timestamp,
    pub zone_offset: ZoneOffset,
}

impl FixedClock {
    pub fn at(epoch_seconds: i64, zone_offset: ZoneOffset) -> Self {
        Self {
            timestamp: Timestamp::from_epoch_seconds(epoch_seconds),
            zone_offset,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn zone(&self) -> ZoneOffset {
        self.zone_offset.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================
