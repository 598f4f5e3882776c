use bevy::prelude::*;
use bevy::window::{PresentMode, WindowTheme};
use bevy_egui::EguiPlugin;
use clap::Parser;

mod cli;
mod galaxy;
mod ui;

mod prelude;

fn main() {
    let cli = cli::Cli::parse();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Spiral Galaxy".into(),
                name: Some("bevy.app".into()),
                present_mode: PresentMode::AutoNoVsync,
                fit_canvas_to_parent: true,
                prevent_default_event_handling: false,
                window_theme: Some(WindowTheme::Dark),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
        })
        .insert_resource(cli.galaxy_config())
        .add_plugins((
            galaxy::GalaxyConfigPlugin,
            galaxy::StarCloudPlugin,
            ui::UiPlugin,
        ))
        .run();
}
