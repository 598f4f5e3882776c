use bevy::prelude::*;
use galaxy_field::{GalaxyParameters, NebulaParameters};
use rand::Rng;

/// Everything the star cloud is generated from.
///
/// `generation` is bumped whenever any other field changes; consumers compare
/// it against the last generation they built.
#[derive(Resource, Clone, PartialEq)]
pub struct GalaxyConfig {
    pub generation: i32,
    pub seed: u64,
    pub params: GalaxyParameters,
    pub nebulae_enabled: bool,
    pub nebula_params: NebulaParameters,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            generation: 0,
            seed: rand::rng().random(),
            params: GalaxyParameters::default(),
            nebulae_enabled: true,
            nebula_params: NebulaParameters::default(),
        }
    }
}

#[derive(Resource)]
struct GalaxyConfigOld(GalaxyConfig);

impl Default for GalaxyConfigOld {
    fn default() -> Self {
        Self(GalaxyConfig {
            generation: -1,
            ..default()
        })
    }
}

pub struct GalaxyConfigPlugin;

impl Plugin for GalaxyConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GalaxyConfig>()
            .insert_resource(GalaxyConfigOld::default())
            .add_systems(Update, apply_ui_updates);
    }
}

fn apply_ui_updates(
    mut galaxy_config_old: ResMut<GalaxyConfigOld>,
    mut galaxy_config: ResMut<GalaxyConfig>,
) {
    if galaxy_config.is_changed() && *galaxy_config != galaxy_config_old.0 {
        galaxy_config.generation += 1;
        galaxy_config_old.0 = galaxy_config.clone();
    }
}
