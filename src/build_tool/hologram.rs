use bevy::prelude::*;

use crate::core::snap::ScrollRotate;
use crate::management::recipe_library::RecipeSpec;

/// The translucent preview shown while placing a buildable. Carries the build
/// tool's discrete scroll rotation; the rendered transform is assembled from
/// it by [`apply_hologram_rotation`].
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Hologram {
    scroll_yaw: i32,
    degrees_per_scroll: i32,
    reports_rotation_step: bool,
}

impl Hologram {
    pub fn new(scroll_yaw: i32, degrees_per_scroll: i32) -> Self {
        Self {
            scroll_yaw: scroll_yaw.rem_euclid(360),
            degrees_per_scroll,
            reports_rotation_step: true,
        }
    }

    /// Hologram whose scroll step is real but not exposed through
    /// [`Hologram::rotation_step`]; alignment has to measure it with a probe
    /// scroll.
    pub fn with_unreported_step(scroll_yaw: i32, degrees_per_scroll: i32) -> Self {
        Self {
            scroll_yaw: scroll_yaw.rem_euclid(360),
            degrees_per_scroll,
            reports_rotation_step: false,
        }
    }

    pub fn from_spec(spec: &RecipeSpec, scroll_yaw: i32) -> Self {
        Self {
            scroll_yaw: scroll_yaw.rem_euclid(360),
            degrees_per_scroll: spec.degrees_per_scroll,
            reports_rotation_step: spec.reports_rotation_step,
        }
    }

    /// Degrees applied per scroll, or 0 when the hologram does not report it.
    pub fn rotation_step(&self) -> i32 {
        if self.reports_rotation_step {
            self.degrees_per_scroll
        } else {
            0
        }
    }
}

impl ScrollRotate for Hologram {
    fn scroll_rotate_value(&self) -> i32 {
        self.scroll_yaw
    }

    fn scroll(&mut self, count: i32) {
        // The accumulated yaw wraps into [0, 360); step measurement relies on
        // seeing the wrapped value.
        self.scroll_yaw = (self.scroll_yaw + count * self.degrees_per_scroll).rem_euclid(360);
    }
}

/// Assemble hologram transforms from their scroll rotation.
pub fn apply_hologram_rotation(
    mut holograms: Query<(&Hologram, &mut Transform), Changed<Hologram>>,
) {
    for (hologram, mut transform) in holograms.iter_mut() {
        transform.rotation = Quat::from_rotation_y((hologram.scroll_rotate_value() as f32).to_radians());
    }
}
