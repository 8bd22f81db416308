use bevy::prelude::*;

/// Runtime toggles for the sampling behavior.
#[derive(Resource, Debug, Clone)]
pub struct AlignmentSettings {
    /// Steer the hologram toward the sampled buildable's yaw on every sample.
    /// When off, sampling keeps the tool's default behavior untouched.
    pub align_on_sample: bool,
}

impl Default for AlignmentSettings {
    fn default() -> Self {
        Self {
            align_on_sample: true,
        }
    }
}
