//! Per-star sampling models for the two star populations.
//!
//! Each sampler consumes a fixed sequence of draws from the supplied rng, so a
//! seeded stream reproduces the same star.

use std::f32::consts::{PI, TAU};

use rand::Rng;

use crate::{GalaxyParameters, Palette};

/// Exponent on the halo radial draw, gentler than a typical core concentration.
pub const HALO_RADIAL_EXPONENT: f32 = 1.5;
/// Halo stars may reach this multiple of the galaxy radius.
pub const HALO_RADIAL_OVERSHOOT: f32 = 1.2;
/// Halo vertical spread as a multiple of the disk thickness.
pub const HALO_THICKNESS_SCALE: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSample {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Samples the `index`-th star of the arm population.
///
/// The radial draw `u^core_concentration` is the only thing shaping core
/// density. Twist grows linearly with radius, arms widen toward the rim and
/// the disk thins to zero height at `galaxy_radius`.
pub fn sample_arm_star<R: Rng + ?Sized>(
    params: &GalaxyParameters,
    palette: &Palette,
    index: u32,
    rng: &mut R,
) -> StarSample {
    let radial_sample = rng.random::<f32>().powf(params.core_concentration);
    let distance = radial_sample * params.galaxy_radius;
    let radial_fraction = distance / params.galaxy_radius;

    let arm_index = index % params.arm_count;
    let base_angle = (arm_index as f32 / params.arm_count as f32) * TAU;
    let rotation = radial_fraction * params.rotation_factor * PI;
    let current_spread = params.arm_spread * (1.0 + radial_fraction * 2.0);
    let offset = (rng.random::<f32>() - 0.5) * current_spread * PI;
    let angle = base_angle + rotation + offset;

    let z = (rng.random::<f32>() - 0.5) * (1.0 - radial_fraction) * params.galaxy_thickness;

    // brighter toward the core, 0.6..=1.0
    let brightness = 0.6 + (1.0 - radial_fraction) * 0.4;
    let color = palette.choose(rng).scaled(brightness);

    StarSample {
        position: [angle.cos() * distance, angle.sin() * distance, z],
        color: color.to_array(),
    }
}

/// Samples one star of the diffuse halo. No radius dependence in height or
/// brightness.
pub fn sample_halo_star<R: Rng + ?Sized>(
    params: &GalaxyParameters,
    palette: &Palette,
    rng: &mut R,
) -> StarSample {
    let dist_xy = rng.random::<f32>().powf(HALO_RADIAL_EXPONENT)
        * params.galaxy_radius
        * HALO_RADIAL_OVERSHOOT;
    let angle = rng.random::<f32>() * TAU;
    let z = (rng.random::<f32>() - 0.5) * params.galaxy_thickness * HALO_THICKNESS_SCALE;

    // 0.4..0.7
    let brightness = 0.4 + rng.random::<f32>() * 0.3;
    let color = palette.choose(rng).scaled(brightness);

    StarSample {
        position: [angle.cos() * dist_xy, angle.sin() * dist_xy, z],
        color: color.to_array(),
    }
}
