use bevy::prelude::*;

use crate::build_tool::build_gun::{BuildGun, BuildGunMode};
use crate::build_tool::hologram::Hologram;
use crate::core::alignment_error::AlignmentError;
use crate::core::components::{sampled_yaw, BuildableCategory};
use crate::core::snap::{align_to_yaw, ScrollRotate};
use crate::event_system::events::{OrientationAlignedEvent, RecipeSampledEvent};
use crate::management::instance_manager::InstanceManager;
use crate::management::recipe_library::RecipeLibrary;
use crate::management::settings::AlignmentSettings;

/// Reacts to a recipe being sampled: the active hologram is retargeted to the
/// sampled recipe, then scrolled so its yaw matches the sampled buildable.
pub fn recipe_sampled_listener(
    mut sampled_reader: EventReader<RecipeSampledEvent>,
    mut aligned_writer: EventWriter<OrientationAlignedEvent>,
    mut build_gun: ResMut<BuildGun>,
    settings: Res<AlignmentSettings>,
    instances: Res<InstanceManager>,
    recipes: Res<RecipeLibrary>,
    buildables: Query<(&BuildableCategory, &Transform)>,
    mut holograms: Query<&mut Hologram>,
) {
    for event in sampled_reader.read() {
        // Default sampling behavior runs no matter what alignment decides.
        retarget_hologram(&build_gun, &recipes, &mut holograms, &event.recipe);

        if !settings.align_on_sample {
            debug!("sampling {:?}: alignment disabled", event.recipe);
            continue;
        }

        let Some(hit) = build_gun.hit else {
            debug!("sampling {:?}: nothing under the crosshair", event.recipe);
            continue;
        };

        let target = instances.resolve_hit(&hit);
        let Ok((category, transform)) = buildables.get(target) else {
            debug!(
                "sampling {:?}: {target:?} has no buildable category, keeping default behavior",
                event.recipe
            );
            continue;
        };

        if !category.aligns_with_sample() {
            debug!(
                "sampling {:?}: {category:?} keeps its default sampling behavior",
                event.recipe
            );
            continue;
        }

        let desired_yaw = sampled_yaw(transform);

        let Some(hologram_entity) = build_gun.hologram else {
            // Build mode starts after the sample; seed the rotation the next
            // hologram will spawn with and let the tool take it from there.
            debug!(
                "sampling {:?}: no hologram yet, seeding scroll rotation {desired_yaw}",
                event.recipe
            );
            build_gun.previous_scroll_rotation = desired_yaw;
            continue;
        };

        let Ok(mut hologram) = holograms.get_mut(hologram_entity) else {
            warn!("build gun points at hologram {hologram_entity:?} which no longer exists");
            continue;
        };

        let reported_step = hologram.rotation_step();
        match align_to_yaw(&mut *hologram, desired_yaw, reported_step) {
            Ok(0) => {
                debug!("sampling {:?}: already aligned at {desired_yaw}", event.recipe);
            }
            Ok(scroll_count) => {
                debug!(
                    "sampling {:?}: scrolled {scroll_count} times to yaw {}",
                    event.recipe,
                    hologram.scroll_rotate_value()
                );
                aligned_writer.send(OrientationAlignedEvent {
                    hologram: hologram_entity,
                    scroll_count,
                });
            }
            Err(AlignmentError::DegenerateStepSize) => {
                warn!(
                    "sampling {:?}: hologram does not rotate under scrolling, left untouched",
                    event.recipe
                );
            }
            Err(error) => {
                warn!("sampling {:?} failed: {error}", event.recipe);
            }
        }
    }
}

// Sampling swaps the active recipe; an existing hologram is rebuilt in place
// for the sampled recipe and carries its scroll rotation over, as the tool
// does when switching recipes mid-build.
fn retarget_hologram(
    build_gun: &BuildGun,
    recipes: &RecipeLibrary,
    holograms: &mut Query<&mut Hologram>,
    recipe: &str,
) {
    let Some(spec) = recipes.get(recipe) else {
        warn!("sampled recipe {recipe:?} is not in the library");
        return;
    };

    if build_gun.mode != BuildGunMode::Build {
        return;
    }
    let Some(entity) = build_gun.hologram else {
        return;
    };

    if let Ok(mut hologram) = holograms.get_mut(entity) {
        *hologram = Hologram::from_spec(spec, hologram.scroll_rotate_value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_tool::build_gun::SampleHit;
    use crate::core::alignment_plugin::SampledOrientationPlugin;
    use crate::management::instance_manager::InstanceHandle;
    use crate::management::recipe_library::RecipeSpec;

    const ASSEMBLER: RecipeSpec = RecipeSpec {
        category: BuildableCategory::Factory,
        degrees_per_scroll: 10,
        reports_rotation_step: true,
    };

    const SIGN: RecipeSpec = RecipeSpec {
        category: BuildableCategory::Factory,
        degrees_per_scroll: 20,
        reports_rotation_step: false,
    };

    const STUCK: RecipeSpec = RecipeSpec {
        category: BuildableCategory::Factory,
        degrees_per_scroll: 0,
        reports_rotation_step: false,
    };

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(SampledOrientationPlugin);

        let mut recipes = app.world_mut().resource_mut::<RecipeLibrary>();
        recipes.insert("assembler", ASSEMBLER);
        recipes.insert("sign", SIGN);
        recipes.insert("stuck_sign", STUCK);
        app
    }

    fn place_buildable(app: &mut App, category: BuildableCategory, yaw_degrees: f32) -> Entity {
        app.world_mut()
            .spawn((
                category,
                Transform::from_rotation(Quat::from_rotation_y(yaw_degrees.to_radians())),
            ))
            .id()
    }

    fn equip_hologram(app: &mut App, spec: &RecipeSpec, scroll_yaw: i32) -> Entity {
        let hologram = app
            .world_mut()
            .spawn((Hologram::from_spec(spec, scroll_yaw), Transform::default()))
            .id();
        app.world_mut()
            .resource_mut::<BuildGun>()
            .enter_build_mode(hologram);
        hologram
    }

    fn sample(app: &mut App, hit: SampleHit, recipe: &str) {
        app.world_mut().resource_mut::<BuildGun>().aim_at(hit);
        app.world_mut().send_event(RecipeSampledEvent {
            recipe: recipe.to_string(),
        });
        app.update();
    }

    fn hologram_yaw(app: &App, hologram: Entity) -> i32 {
        app.world()
            .entity(hologram)
            .get::<Hologram>()
            .unwrap()
            .scroll_rotate_value()
    }

    fn aligned_events(app: &App) -> usize {
        app.world()
            .resource::<Events<OrientationAlignedEvent>>()
            .len()
    }

    #[test]
    fn aligns_hologram_to_sampled_factory() {
        let mut app = test_app();
        let target = place_buildable(&mut app, BuildableCategory::Factory, 90.0);
        let hologram = equip_hologram(&mut app, &ASSEMBLER, 0);

        sample(&mut app, SampleHit::actor(target), "assembler");

        assert_eq!(hologram_yaw(&app, hologram), 90);
        assert_eq!(aligned_events(&app), 1);

        let transform = app.world().entity(hologram).get::<Transform>().unwrap();
        let expected = Quat::from_rotation_y(90.0_f32.to_radians());
        assert!(transform.rotation.angle_between(expected) < 1e-4);
    }

    #[test]
    fn instanced_hit_resolves_to_its_owner() {
        let mut app = test_app();
        let target = place_buildable(&mut app, BuildableCategory::Factory, 180.0);
        let batch = app.world_mut().spawn_empty().id();
        app.world_mut()
            .resource_mut::<InstanceManager>()
            .register(InstanceHandle(3), target);
        let hologram = equip_hologram(&mut app, &ASSEMBLER, 0);

        sample(&mut app, SampleHit::instanced(batch, InstanceHandle(3)), "assembler");

        assert_eq!(hologram_yaw(&app, hologram), 180);
    }

    #[test]
    fn sampling_a_foundation_keeps_the_rotation() {
        let mut app = test_app();
        let target = place_buildable(&mut app, BuildableCategory::Foundation, 90.0);
        let hologram = equip_hologram(&mut app, &ASSEMBLER, 30);

        sample(&mut app, SampleHit::actor(target), "assembler");

        assert_eq!(hologram_yaw(&app, hologram), 30);
        assert_eq!(aligned_events(&app), 0);
    }

    #[test]
    fn sampling_a_spline_keeps_the_rotation() {
        let mut app = test_app();
        let target = place_buildable(&mut app, BuildableCategory::ConveyorBelt, 45.0);
        let hologram = equip_hologram(&mut app, &ASSEMBLER, 30);

        sample(&mut app, SampleHit::actor(target), "assembler");

        assert_eq!(hologram_yaw(&app, hologram), 30);
    }

    #[test]
    fn sampling_outside_build_mode_seeds_the_next_hologram() {
        let mut app = test_app();
        let target = place_buildable(&mut app, BuildableCategory::Factory, 120.0);

        sample(&mut app, SampleHit::actor(target), "assembler");

        let build_gun = app.world().resource::<BuildGun>();
        assert_eq!(build_gun.previous_scroll_rotation, 120);
        assert_eq!(aligned_events(&app), 0);
    }

    #[test]
    fn unreported_step_is_measured_with_a_probe() {
        let mut app = test_app();
        let target = place_buildable(&mut app, BuildableCategory::Factory, 90.0);
        let hologram = equip_hologram(&mut app, &SIGN, 350);

        sample(&mut app, SampleHit::actor(target), "sign");

        // Probe wraps 350 -> 10, then four 20-degree scrolls reach 90.
        assert_eq!(hologram_yaw(&app, hologram), 90);
        assert_eq!(aligned_events(&app), 1);
    }

    #[test]
    fn degenerate_scroll_step_leaves_the_hologram_untouched() {
        let mut app = test_app();
        let target = place_buildable(&mut app, BuildableCategory::Factory, 90.0);
        let hologram = equip_hologram(&mut app, &STUCK, 140);

        sample(&mut app, SampleHit::actor(target), "stuck_sign");

        assert_eq!(hologram_yaw(&app, hologram), 140);
        assert_eq!(aligned_events(&app), 0);
    }

    #[test]
    fn disabled_settings_skip_alignment() {
        let mut app = test_app();
        app.world_mut()
            .resource_mut::<AlignmentSettings>()
            .align_on_sample = false;
        let target = place_buildable(&mut app, BuildableCategory::Factory, 90.0);
        let hologram = equip_hologram(&mut app, &ASSEMBLER, 0);

        sample(&mut app, SampleHit::actor(target), "assembler");

        assert_eq!(hologram_yaw(&app, hologram), 0);
        assert_eq!(aligned_events(&app), 0);
    }

    #[test]
    fn sampling_retargets_the_hologram_but_keeps_its_scroll_yaw() {
        let mut app = test_app();
        let target = place_buildable(&mut app, BuildableCategory::Foundation, 0.0);
        let hologram = equip_hologram(&mut app, &ASSEMBLER, 120);

        sample(&mut app, SampleHit::actor(target), "sign");

        let retargeted = app.world().entity(hologram).get::<Hologram>().unwrap();
        assert_eq!(retargeted.scroll_rotate_value(), 120);
        assert_eq!(retargeted.rotation_step(), 0);
    }

    #[test]
    fn sampling_twice_is_idempotent() {
        let mut app = test_app();
        let target = place_buildable(&mut app, BuildableCategory::Factory, 90.0);
        let hologram = equip_hologram(&mut app, &ASSEMBLER, 0);

        sample(&mut app, SampleHit::actor(target), "assembler");
        assert_eq!(aligned_events(&app), 1);

        sample(&mut app, SampleHit::actor(target), "assembler");
        assert_eq!(hologram_yaw(&app, hologram), 90);
        // The second pass resolves to a zero count and sends nothing new;
        // only the first event is still buffered.
        assert_eq!(aligned_events(&app), 1);
    }

    #[test]
    fn misaligned_hologram_lands_within_half_a_step() {
        let mut app = test_app();
        let target = place_buildable(&mut app, BuildableCategory::Factory, 87.0);
        let hologram = equip_hologram(&mut app, &ASSEMBLER, 0);

        sample(&mut app, SampleHit::actor(target), "assembler");

        // 87 is not reachable with a 10-degree step; 90 is the nearest stop.
        assert_eq!(hologram_yaw(&app, hologram), 90);
    }
}
