use bevy::prelude::*;

use crate::build_tool::hologram::apply_hologram_rotation;
use crate::event_system::event_listeners::recipe_sampled_listener;
use crate::event_system::events::{OrientationAlignedEvent, RecipeSampledEvent};

pub struct EventSystemPlugin;

impl Plugin for EventSystemPlugin {
    fn build(&self, app: &mut App) {
        // Registering all events
        app.add_event::<RecipeSampledEvent>()
            .add_event::<OrientationAlignedEvent>();

        // Alignment first, then transform assembly, so a sampled rotation is
        // visible on the hologram's transform within the same frame.
        app.add_systems(
            Update,
            (recipe_sampled_listener, apply_hologram_rotation).chain(),
        );
    }
}
