use std::time::Instant;

use crate::prelude::*;
use bevy::{
    prelude::*,
    render::{mesh::PrimitiveTopology, render_asset::RenderAssetUsages},
};
use galaxy_field::{place_nebulae, FieldGenerator, Nebula};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct StarCloudPlugin;

impl Plugin for StarCloudPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(StarCount::default())
            .add_systems(Startup, init_resource)
            .add_systems(PostUpdate, manage_star_cloud);
    }
}

#[derive(Resource)]
struct StarCloudControl {
    generation: i32,
    star_material: Handle<StandardMaterial>,
    nebula_mesh: Handle<Mesh>,
}

/// The point-list entity holding every star.
#[derive(Component)]
pub struct StarCloud;

#[derive(Component)]
pub struct NebulaSprite;

fn init_resource(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // vertex colors carry the star tint, additive so dense regions glow
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    });

    commands.insert_resource(StarCloudControl {
        generation: -1,
        star_material,
        nebula_mesh: meshes.add(Circle::new(0.5)),
    });
}

/// Rebuilds the star cloud and nebulae whenever the galaxy config generation
/// changes. A config that fails validation leaves the previous galaxy up.
fn manage_star_cloud(
    mut commands: Commands,
    galaxy_config: Res<GalaxyConfig>,
    mut control: ResMut<StarCloudControl>,
    mut star_count: ResMut<StarCount>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<Entity, Or<(With<StarCloud>, With<NebulaSprite>)>>,
) {
    if control.generation == galaxy_config.generation {
        return;
    }
    control.generation = galaxy_config.generation;

    let generator = match FieldGenerator::new(&galaxy_config.params) {
        Ok(generator) => generator,
        Err(err) => {
            error!("Keeping previous galaxy: {err}");
            return;
        }
    };

    let start = Instant::now();
    let field = generator.generate_parallel(galaxy_config.seed);
    let generation_ms = start.elapsed().as_secs_f32() * 1000.0;

    let nebulae = if galaxy_config.nebulae_enabled {
        place_nebulae(
            &field,
            &galaxy_config.nebula_params,
            &mut nebula_rng(galaxy_config.seed),
        )
    } else {
        Vec::new()
    };

    info!(
        "Galaxy config updated, regenerated {} stars ({} arm, {} halo) and {} nebulae in {:.2} ms",
        field.len(),
        field.arm_star_count(),
        field.halo_star_count(),
        nebulae.len(),
        generation_ms
    );

    // cleanup existing galaxy
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    *star_count = StarCount {
        count: field.len(),
        arm: field.arm_star_count(),
        halo: field.halo_star_count(),
        nebulae: nebulae.len(),
        generation_ms,
    };

    if !field.is_empty() {
        commands.spawn((
            Mesh3d(meshes.add(star_cloud_mesh(&field))),
            MeshMaterial3d(control.star_material.clone()),
            Transform::default(),
            StarCloud,
        ));
    }

    for nebula in nebulae {
        commands.spawn((
            Mesh3d(control.nebula_mesh.clone()),
            MeshMaterial3d(materials.add(nebula_material(&nebula))),
            Transform::from_translation(Vec3::from_array(nebula.position))
                .with_scale(Vec3::splat(nebula.scale)),
            NebulaSprite,
        ));
    }
}

/// Star `i` of a parallel generation draws from stream `i`, and star counts
/// fit in `u32`, so the last stream is never shared with a star.
const NEBULA_STREAM: u64 = u64::MAX;

fn nebula_rng(seed: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(NEBULA_STREAM);
    rng
}

/// Converts the generator's flat buffers into a point-list mesh.
/// Star `i` becomes vertex `i`.
fn star_cloud_mesh(field: &StarField) -> Mesh {
    let positions: Vec<[f32; 3]> = field.iter().map(|(position, _)| position).collect();
    let colors: Vec<[f32; 4]> = field.iter().map(|(_, [r, g, b])| [r, g, b, 1.0]).collect();
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];

    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
}

fn nebula_material(nebula: &Nebula) -> StandardMaterial {
    let galaxy_field::Rgb { r, g, b } = nebula.color;
    StandardMaterial {
        base_color: Color::linear_rgba(r, g, b, nebula.opacity),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    }
}
