//! Builds the actor/time/zone context stamped onto every request.

use std::sync::Arc;

use hikyaku_types::{ActorContext, CommandContext, UserId};

use crate::clock::Clock;

/// Assembles fresh [`ActorContext`] snapshots from an injected [`Clock`].
///
/// Every call reads the clock again — contexts are never cached, so two
/// requests built in different seconds carry different timestamps.
#[derive(Clone)]
pub struct ContextBuilder {
    clock: Arc<dyn Clock>,
}

impl ContextBuilder {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// A fresh context for `actor` at the clock's current instant.
    pub fn actor_context(&self, actor: &UserId) -> ActorContext {
        ActorContext::new(actor.clone(), self.clock.now(), self.clock.zone())
    }

    /// The command-side wrapper around a fresh actor context.
    pub fn command_context(&self, actor: &UserId) -> CommandContext {
        CommandContext::new(self.actor_context(actor))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use hikyaku_types::{ZoneId, ZoneOffset};

    use crate::clock::FixedClock;

    use super::*;

    fn helsinki() -> ZoneOffset {
        ZoneOffset::new(ZoneId::new("Europe/Helsinki"), 7200)
    }

    #[test]
    fn test_context_carries_clock_snapshot() {
        let builder = ContextBuilder::new(Arc::new(FixedClock::at(1_700_000_000, helsinki())));
        let actor = UserId::new("amy").unwrap();

        let context = builder.actor_context(&actor);
        assert_eq!(context.actor(), &actor);
        assert_eq!(context.timestamp().seconds, 1_700_000_000);
        assert_eq!(context.zone_offset(), &helsinki());
    }

    #[test]
    fn test_command_context_wraps_actor_context() {
        let builder = ContextBuilder::new(Arc::new(FixedClock::at(7, ZoneOffset::utc())));
        let actor = UserId::new("amy").unwrap();

        let context = builder.command_context(&actor);
        assert_eq!(context.actor_context().actor(), &actor);
        assert_eq!(context.actor_context().timestamp().seconds, 7);
    }
}
