//! Command envelopes — actor-originated writes.

use serde::{Deserialize, Serialize};

use crate::actor::CommandContext;
use crate::ids::CommandId;
use crate::typed::{KnownMessage, TypedJson};

/// A write request carrying its payload message as a typed foreign record.
///
/// Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    id: CommandId,
    message: TypedJson,
    context: CommandContext,
}

impl Command {
    pub fn new(id: CommandId, message: TypedJson, context: CommandContext) -> Self {
        Self { id, message, context }
    }

    pub fn id(&self) -> &CommandId {
        &self.id
    }

    pub fn message(&self) -> &TypedJson {
        &self.message
    }

    pub fn context(&self) -> &CommandContext {
        &self.context
    }
}

impl KnownMessage for Command {
    const TYPE_URL: &'static str = "type.hikyaku.io/hikyaku.core.Command";
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::actor::{ActorContext, UserId};
    use crate::time::{Timestamp, ZoneOffset};
    use crate::typed::TypeUrl;

    use super::*;

    #[test]
    fn test_command_wire_shape() {
        let message = TypedJson::from_value(
            json!({ "name": "deploy" }),
            TypeUrl::new("type.hikyaku.io/hikyaku.test.CreateTask").unwrap(),
        );
        let context = CommandContext::new(ActorContext::new(
            UserId::new("amy").unwrap(),
            Timestamp::from_epoch_seconds(11),
            ZoneOffset::utc(),
        ));
        let command = Command::new(CommandId::mint(), message, context);

        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["message"]["value"], json!({ "name": "deploy" }));
        assert_eq!(json["context"]["actorContext"]["actor"], "amy");
        assert!(json["id"].as_str().is_some());
    }
}
