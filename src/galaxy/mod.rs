use bevy::prelude::*;

mod galaxy_config;
mod star_cloud;

pub use galaxy_config::{GalaxyConfig, GalaxyConfigPlugin};
pub use star_cloud::StarCloudPlugin;

/// Summary of the star field currently on screen.
#[derive(Resource, Default)]
pub struct StarCount {
    pub count: usize,
    pub arm: usize,
    pub halo: usize,
    pub nebulae: usize,
    pub generation_ms: f32,
}
