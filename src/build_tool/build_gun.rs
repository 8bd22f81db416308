use bevy::prelude::*;

use crate::management::instance_manager::InstanceHandle;

/// What the construction tool is currently doing. Sampling outside `Build`
/// only seeds the rotation the next hologram spawns with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildGunMode {
    #[default]
    Idle,
    Build,
    Dismantle,
}

/// The world hit under the crosshair when sampling. Hits on batched instanced
/// meshes carry the instance handle so the owning buildable can be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleHit {
    pub entity: Entity,
    pub instance: Option<InstanceHandle>,
}

impl SampleHit {
    pub fn actor(entity: Entity) -> Self {
        Self {
            entity,
            instance: None,
        }
    }

    pub fn instanced(entity: Entity, instance: InstanceHandle) -> Self {
        Self {
            entity,
            instance: Some(instance),
        }
    }
}

/// The construction tool itself: current mode, the active hologram, and the
/// scroll rotation remembered between holograms. A freshly equipped hologram
/// starts at `previous_scroll_rotation`.
#[derive(Resource, Debug, Default)]
pub struct BuildGun {
    pub mode: BuildGunMode,
    pub hologram: Option<Entity>,
    pub hit: Option<SampleHit>,
    pub previous_scroll_rotation: i32,
}

impl BuildGun {
    pub fn enter_build_mode(&mut self, hologram: Entity) {
        self.mode = BuildGunMode::Build;
        self.hologram = Some(hologram);
    }

    pub fn exit_build_mode(&mut self) {
        self.mode = BuildGunMode::Idle;
        self.hologram = None;
    }

    pub fn aim_at(&mut self, hit: SampleHit) {
        self.hit = Some(hit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_mode_tracks_hologram() {
        let mut gun = BuildGun::default();
        assert_eq!(gun.mode, BuildGunMode::Idle);

        let hologram = Entity::from_raw(1);
        gun.enter_build_mode(hologram);
        assert_eq!(gun.mode, BuildGunMode::Build);
        assert_eq!(gun.hologram, Some(hologram));

        gun.exit_build_mode();
        assert_eq!(gun.mode, BuildGunMode::Idle);
        assert_eq!(gun.hologram, None);
    }
}
