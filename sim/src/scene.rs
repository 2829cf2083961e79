//! Caller-owned entity registry.
//!
//! Components never insert into an implicit scene graph: they receive a
//! `&mut Scene`, and every created entity is handed back to the caller as an
//! explicit [`EntityId`]. Ids are allocated monotonically and never reused,
//! and the backing map is ordered so iteration (and therefore any logging or
//! summary built from it) is deterministic.

use crate::transform::{Quat, Transform, Vec3};
use std::collections::BTreeMap;
use thiserror::Error;

/// Opaque handle to an entity in a [`Scene`].
///
/// Handles are only meaningful for the scene that issued them. A handle is
/// never reused, so a stale handle fails lookup instead of aliasing a newer
/// entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

/// Lookup failures against a [`Scene`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("no entity with id {0:?} in the scene")]
    UnknownEntity(EntityId),
}

/// A placeable object instance in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub name: String,
    pub transform: Transform,
}

impl Entity {
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
        }
    }
}

/// Ordered registry of live entities.
///
/// Instantiation is synchronous: the clone is visible to any lookup made
/// later in the same tick. Nothing here destroys entities; a scene only
/// grows, and callers that spawn per input event accept unbounded growth.
#[derive(Debug, Default)]
pub struct Scene {
    entities: BTreeMap<EntityId, Entity>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity and returns its freshly-allocated handle.
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Clones `template` at the template's own current transform.
    pub fn instantiate(&mut self, template: EntityId) -> Result<EntityId, SceneError> {
        let proto = self
            .entities
            .get(&template)
            .ok_or(SceneError::UnknownEntity(template))?;
        let transform = proto.transform;
        let name = clone_name(&proto.name);

        log::debug!("instantiating `{name}` from template {template:?}");
        Ok(self.insert(Entity { name, transform }))
    }

    /// Clones `template` with the given translation and rotation instead of
    /// the template's own transform.
    pub fn instantiate_at(
        &mut self,
        template: EntityId,
        translation: Vec3,
        rotation: Quat,
    ) -> Result<EntityId, SceneError> {
        let proto = self
            .entities
            .get(&template)
            .ok_or(SceneError::UnknownEntity(template))?;
        let name = clone_name(&proto.name);

        log::debug!("instantiating `{name}` from template {template:?} at {translation:?}");
        Ok(self.insert(Entity {
            name,
            transform: Transform {
                translation,
                rotation,
            },
        }))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in handle-allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(id, entity)| (*id, entity))
    }
}

fn clone_name(template_name: &str) -> String {
    format!("{template_name} (clone)")
}
