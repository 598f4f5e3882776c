use crate::prelude::*;
use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, spawn_camera)
            .add_systems(PostUpdate, frame_galaxy_system);
    }
}

#[derive(Component)]
pub struct CameraMain {
    /// Galaxy radius the current transform and far plane were built for.
    framed_radius: f32,
}

/// Distance and height of the camera per unit of galaxy radius.
const VIEW_DISTANCE: f32 = 6.5;
const VIEW_ELEVATION: f32 = 0.75;

fn camera_transform(galaxy_radius: f32) -> Transform {
    // the galactic plane is x/y, so the camera looks down -z at the disk
    Transform::from_xyz(
        0.0,
        galaxy_radius * VIEW_ELEVATION,
        galaxy_radius * VIEW_DISTANCE,
    )
    .looking_at(Vec3::ZERO, Vec3::Y)
}

fn spawn_camera(mut commands: Commands, galaxy_config: Res<GalaxyConfig>) {
    let radius = galaxy_config.params.galaxy_radius;
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 75f32.to_radians(),
            far: radius * VIEW_DISTANCE * 2.5,
            ..default()
        }),
        camera_transform(radius),
        CameraMain {
            framed_radius: radius,
        },
    ));
}

/// Keeps the whole galaxy in view when its radius changes.
fn frame_galaxy_system(
    galaxy_config: Res<GalaxyConfig>,
    mut query: Query<(&mut CameraMain, &mut Transform, &mut Projection)>,
) {
    if !galaxy_config.is_changed() {
        return;
    }
    let radius = galaxy_config.params.galaxy_radius;
    if !(radius > 0.0) {
        return;
    }

    // the side panel marks the config changed every frame, so compare radii
    for (mut camera_main, mut transform, mut projection) in &mut query {
        if camera_main.framed_radius == radius {
            continue;
        }
        camera_main.framed_radius = radius;
        *transform = camera_transform(radius);
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.far = radius * VIEW_DISTANCE * 2.5;
        }
    }
}
