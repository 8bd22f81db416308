use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Category of a placed buildable, used to decide whether sampling it should
/// steer the build hologram's rotation.
#[derive(Component, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum BuildableCategory {
    Factory,
    Foundation,
    Wall,
    ConveyorBelt,
    Pipeline,
    Railroad,
}

impl BuildableCategory {
    // Lightweight buildables snap on their own terms (foundations flip
    // between straight and diagonal, walls snap to whatever they attach to)
    // and splines have no single orientation, so sampling those keeps the
    // tool's default behavior.
    pub fn aligns_with_sample(&self) -> bool {
        !(self.is_lightweight() || self.is_spline())
    }

    pub fn is_lightweight(&self) -> bool {
        matches!(self, BuildableCategory::Foundation | BuildableCategory::Wall)
    }

    pub fn is_spline(&self) -> bool {
        matches!(
            self,
            BuildableCategory::ConveyorBelt | BuildableCategory::Pipeline | BuildableCategory::Railroad
        )
    }
}

/// Yaw to copy from a sampled buildable: its rotation about the vertical
/// axis, rounded to whole degrees.
pub fn sampled_yaw(transform: &Transform) -> i32 {
    let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
    yaw.to_degrees().round() as i32
}
