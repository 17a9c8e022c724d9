//! Builds identified, contextualized request envelopes for one actor.

use std::sync::Arc;

use hikyaku_types::{
    Command, CommandId, EmptyActor, Query, QueryId, Target, TypeUrl, TypedJson, TypedMessage,
    UserId,
};

use crate::clock::{Clock, SystemClock};
use crate::context::ContextBuilder;

/// A factory for the requests fired from the client side by one actor.
///
/// Bound to exactly one actor for its lifetime and long-lived — construct
/// it once per actor session. Every builder is pure and synchronous: a
/// fresh id and a fresh context per call, no retries, no shared mutable
/// state, so concurrent calls are independent.
#[derive(Clone)]
pub struct ActorRequestFactory {
    actor: UserId,
    context: ContextBuilder,
}

impl ActorRequestFactory {
    /// A factory for `actor` on the system clock.
    ///
    /// Fails fast on an empty actor identifier.
    pub fn new(actor: impl Into<String>) -> Result<Self, EmptyActor> {
        Self::with_clock(actor, Arc::new(SystemClock))
    }

    /// A factory for `actor` on an injected clock.
    pub fn with_clock(actor: impl Into<String>, clock: Arc<dyn Clock>) -> Result<Self, EmptyActor> {
        Ok(Self {
            actor: UserId::new(actor)?,
            context: ContextBuilder::new(clock),
        })
    }

    pub fn actor(&self) -> &UserId {
        &self.actor
    }

    /// A query targeting all instances of `target_type`.
    pub fn query_all(&self, target_type: &TypeUrl) -> TypedMessage<Query> {
        self.query(Target::all(target_type.clone()))
    }

    /// A query targeting the single instance of `target_type` named by `id`.
    pub fn query_by_id(&self, target_type: &TypeUrl, id: &TypedJson) -> TypedMessage<Query> {
        self.query(Target::by_id(target_type.clone(), id.clone()))
    }

    /// A command carrying `message` as its payload.
    pub fn command(&self, message: TypedJson) -> TypedMessage<Command> {
        let command = Command::new(
            CommandId::mint(),
            message,
            self.context.command_context(&self.actor),
        );
        TypedMessage::of(command)
    }

    fn query(&self, target: Target) -> TypedMessage<Query> {
        let query = Query::new(
            QueryId::mint(),
            target,
            self.context.actor_context(&self.actor),
        );
        TypedMessage::of(query)
    }
}

// ============================================================================
// Tests
// ============================================================================
