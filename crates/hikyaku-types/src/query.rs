//! Query envelopes and the targets they address.

use serde::{Deserialize, Serialize};

use crate::actor::ActorContext;
use crate::ids::QueryId;
use crate::typed::{KnownMessage, TypeUrl, TypedJson};

/// The id of one targeted entity, carried as a typed foreign payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityId {
    id: TypedJson,
}

/// Restricts a target to an explicit set of entity ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityIdFilter {
    ids: Vec<EntityId>,
}

/// The filter block of a single-instance target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityFilters {
    id_filter: EntityIdFilter,
}

impl EntityFilters {
    pub fn id_filter(&self) -> &EntityIdFilter {
        &self.id_filter
    }
}

impl EntityIdFilter {
    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }
}

impl EntityId {
    pub fn id(&self) -> &TypedJson {
        &self.id
    }
}

/// What a query addresses: all instances of a type, or one instance by id.
///
/// The two modes are mutually exclusive and only reachable through
/// [`Target::all`] and [`Target::by_id`], so an envelope can never carry
/// both an include-all flag and an id filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(rename = "type")]
    type_url: TypeUrl,
    include_all: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<EntityFilters>,
}

impl Target {
    /// Target every instance of `type_url`.
    pub fn all(type_url: TypeUrl) -> Self {
        Self { type_url, include_all: true, filters: None }
    }

    /// Target the single instance of `type_url` identified by `id`.
    pub fn by_id(type_url: TypeUrl, id: TypedJson) -> Self {
        Self {
            type_url,
            include_all: false,
            filters: Some(EntityFilters {
                id_filter: EntityIdFilter { ids: vec![EntityId { id }] },
            }),
        }
    }

    pub fn type_url(&self) -> &TypeUrl {
        &self.type_url
    }

    pub fn include_all(&self) -> bool {
        self.include_all
    }

    pub fn filters(&self) -> Option<&EntityFilters> {
        self.filters.as_ref()
    }
}

/// A read request: identified, targeted, and attributed to an actor.
///
/// Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Query {
    id: QueryId,
    target: Target,
    context: ActorContext,
}

impl Query {
    pub fn new(id: QueryId, target: Target, context: ActorContext) -> Self {
        Self { id, target, context }
    }

    pub fn id(&self) -> &QueryId {
        &self.id
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn context(&self) -> &ActorContext {
        &self.context
    }
}

impl KnownMessage for Query {
    const TYPE_URL: &'static str = "type.hikyaku.io/hikyaku.client.Query";
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::actor::UserId;
    use crate::time::{Timestamp, ZoneOffset};

    use super::*;

    fn task_type() -> TypeUrl {
        TypeUrl::new("type.hikyaku.io/hikyaku.test.Task").unwrap()
    }

    fn task_id() -> TypedJson {
        TypedJson::from_value(
            json!({ "id": 42 }),
            TypeUrl::new("type.hikyaku.io/hikyaku.test.TaskId").unwrap(),
        )
    }

    #[test]
    fn test_all_mode_has_no_filter() {
        let target = Target::all(task_type());
        assert!(target.include_all());
        assert!(target.filters().is_none());
    }

    #[test]
    fn test_by_id_mode_has_exactly_one_id() {
        let target = Target::by_id(task_type(), task_id());
        assert!(!target.include_all());
        let ids = target.filters().unwrap().id_filter().ids();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].id(), &task_id());
    }

    #[test]
    fn test_all_mode_wire_shape() {
        let target = Target::all(task_type());
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "type.hikyaku.io/hikyaku.test.Task",
                "includeAll": true,
            })
        );
    }

    #[test]
    fn test_by_id_mode_wire_shape() {
        let target = Target::by_id(task_type(), task_id());
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["includeAll"], json!(false));
        assert_eq!(
            json["filters"]["idFilter"]["ids"][0]["id"]["value"],
            json!({ "id": 42 })
        );
    }

    #[test]
    fn test_query_preserves_parts() {
        let id = QueryId::mint();
        let context = ActorContext::new(
            UserId::new("amy").unwrap(),
            Timestamp::from_epoch_seconds(9),
            ZoneOffset::utc(),
        );
        let query = Query::new(id.clone(), Target::all(task_type()), context.clone());
        assert_eq!(query.id(), &id);
        assert_eq!(query.context(), &context);
        assert!(query.target().include_all());
    }
}
