use std::collections::HashMap;

use bevy::prelude::*;

use crate::build_tool::build_gun::SampleHit;

/// Handle to a single instance inside a batched mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceHandle(pub u32);

/// Maps instanced-mesh hits back to the buildable entity that owns them.
/// Placed buildables rendered through instancing register here so a sample
/// hit on the batch can be attributed to an actual buildable.
#[derive(Resource, Default)]
pub struct InstanceManager {
    owners: HashMap<InstanceHandle, Entity>,
}

impl InstanceManager {
    pub fn new() -> Self {
        InstanceManager {
            owners: HashMap::new(),
        }
    }

    pub fn register(&mut self, handle: InstanceHandle, owner: Entity) {
        self.owners.insert(handle, owner);
    }

    pub fn owner_of(&self, handle: InstanceHandle) -> Option<Entity> {
        self.owners.get(&handle).copied()
    }

    /// The buildable a sample hit refers to. Instanced hits resolve through
    /// the registry; unresolved or plain hits fall back to the hit entity.
    pub fn resolve_hit(&self, hit: &SampleHit) -> Entity {
        match hit.instance.and_then(|handle| self.owner_of(handle)) {
            Some(owner) => owner,
            None => hit.entity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instanced_hits_resolve_to_their_owner() {
        let batch = Entity::from_raw(1);
        let owner = Entity::from_raw(2);

        let mut manager = InstanceManager::new();
        manager.register(InstanceHandle(7), owner);

        let hit = SampleHit::instanced(batch, InstanceHandle(7));
        assert_eq!(manager.resolve_hit(&hit), owner);
    }

    #[test]
    fn unregistered_instances_fall_back_to_the_hit_entity() {
        let batch = Entity::from_raw(1);
        let manager = InstanceManager::new();

        let hit = SampleHit::instanced(batch, InstanceHandle(9));
        assert_eq!(manager.resolve_hit(&hit), batch);

        let plain = SampleHit::actor(batch);
        assert_eq!(manager.resolve_hit(&plain), batch);
    }
}
