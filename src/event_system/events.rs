use bevy::prelude::*;

/// Sent by game code when the player samples a placed buildable. The hit
/// being sampled is read off the [`BuildGun`](crate::build_tool::build_gun::BuildGun)
/// resource, which owns the crosshair state.
#[derive(Debug, Clone, Event)]
pub struct RecipeSampledEvent {
    pub recipe: String,
}

/// Sent after a hologram was scrolled to match a sampled buildable. Carries
/// the signed scroll count that was applied; never sent for a zero count.
#[derive(Debug, Clone, Event)]
pub struct OrientationAlignedEvent {
    pub hologram: Entity,
    pub scroll_count: i32,
}
