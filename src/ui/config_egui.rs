use crate::prelude::*;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use rand::Rng;

pub struct ConfigEguiPlugin;

impl Plugin for ConfigEguiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, configure_visuals_system)
            .add_systems(Update, ui_system);
    }
}

fn configure_visuals_system(mut contexts: EguiContexts) {
    contexts.ctx_mut().set_visuals(egui::Visuals {
        window_corner_radius: 0.0.into(),
        ..Default::default()
    });
}

fn parameters_ui(params: &mut GalaxyParameters, ui: &mut egui::Ui) {
    let minval = GalaxyParameters::MIN;
    let maxval = GalaxyParameters::MAX;

    egui::CollapsingHeader::new("Galaxy Parameters")
        .default_open(true)
        .show(ui, |ui| {
            ui.add(
                egui::Slider::new(&mut params.star_count, minval.star_count..=maxval.star_count)
                    .logarithmic(true)
                    .text("Stars"),
            );
            ui.add(
                egui::Slider::new(&mut params.arm_count, minval.arm_count..=maxval.arm_count)
                    .text("Arms"),
            );
            ui.add(
                egui::Slider::new(&mut params.arm_spread, minval.arm_spread..=maxval.arm_spread)
                    .text("Arm Spread"),
            );
            ui.add(
                egui::Slider::new(
                    &mut params.rotation_factor,
                    minval.rotation_factor..=maxval.rotation_factor,
                )
                .text("Rotation"),
            );
            ui.add(
                egui::Slider::new(
                    &mut params.core_concentration,
                    minval.core_concentration..=maxval.core_concentration,
                )
                .text("Core Concentration"),
            );
            ui.add(
                egui::Slider::new(&mut params.haze_factor, minval.haze_factor..=maxval.haze_factor)
                    .custom_formatter(|n, _| format!("{:.0}%", n * 100.0))
                    .text("Haze"),
            );
            ui.add(
                egui::Slider::new(
                    &mut params.galaxy_radius,
                    minval.galaxy_radius..=maxval.galaxy_radius,
                )
                .text("Radius"),
            );
            ui.add(
                egui::Slider::new(
                    &mut params.galaxy_thickness,
                    minval.galaxy_thickness..=maxval.galaxy_thickness,
                )
                .text("Thickness"),
            );
        });
}

fn nebula_ui(enabled: &mut bool, params: &mut NebulaParameters, ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("Nebulae").show(ui, |ui| {
        ui.checkbox(enabled, "Enabled");
        ui.add_enabled(*enabled, egui::Slider::new(&mut params.count, 0..=200).text("Count"));
        ui.add_enabled(
            *enabled,
            egui::Slider::new(&mut params.base_scale, 10.0..=300.0).text("Scale"),
        );
    });
}

fn ui_system(
    mut contexts: EguiContexts,
    mut galaxy_config: ResMut<GalaxyConfig>,
    star_count: Res<StarCount>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let ctx = contexts.ctx_mut();
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);

    egui::SidePanel::left("side_panel")
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Configuration");

            let config = &mut *galaxy_config;
            parameters_ui(&mut config.params, ui);
            nebula_ui(&mut config.nebulae_enabled, &mut config.nebula_params, ui);
            ui.separator();

            ui.horizontal(|ui| {
                // a new seed alone is enough to trigger regeneration
                if ui.button("Regenerate").clicked() {
                    config.seed = rand::rng().random();
                }
                ui.label(format!("Seed: {}", config.seed));
            });
            ui.separator();

            ui.label(format!("FPS: {fps:.1}"));
            ui.label(format!(
                "Stars: {} ({} arm / {} halo)",
                star_count.count, star_count.arm, star_count.halo
            ));
            ui.label(format!("Nebulae: {}", star_count.nebulae));
            ui.label(format!("Generated in {:.2} ms", star_count.generation_ms));
        });
}
