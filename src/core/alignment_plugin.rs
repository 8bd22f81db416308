use bevy::app::{App, Plugin};

use crate::build_tool::build_gun::BuildGun;
use crate::build_tool::hologram::Hologram;
use crate::core::components::BuildableCategory;
use crate::management::instance_manager::InstanceManager;
use crate::management::recipe_library::RecipeLibrary;
use crate::management::settings::AlignmentSettings;

pub struct SampledOrientationPlugin;

impl Plugin for SampledOrientationPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<BuildGun>()
            .init_resource::<InstanceManager>()
            .init_resource::<AlignmentSettings>()
            .init_resource::<RecipeLibrary>()
            .add_plugins(crate::event_system::event_system_plugin::EventSystemPlugin)
            .register_type::<Hologram>()
            .register_type::<BuildableCategory>();
    }
}
