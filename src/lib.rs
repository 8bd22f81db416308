//! Matches an in-progress build hologram's rotation to a sampled buildable.
//!
//! Add [`core::alignment_plugin::SampledOrientationPlugin`] to an app, point
//! the [`build_tool::build_gun::BuildGun`] at a placed buildable, and send a
//! [`event_system::events::RecipeSampledEvent`]; the hologram is scrolled to
//! the nearest reachable match of the sampled yaw.

pub mod build_tool;
pub mod core;
pub mod event_system;
pub mod management;
