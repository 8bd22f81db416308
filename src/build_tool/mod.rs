pub mod build_gun;
pub mod hologram;
