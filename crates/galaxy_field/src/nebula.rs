//! Placement of nebula sprites around an existing star field.

use rand::Rng;

use crate::{Rgb, StarField};

/// Magenta, blue and red tints.
pub const NEBULA_COLORS: [Rgb; 3] = [
    Rgb::new(0.8, 0.2, 0.8),
    Rgb::new(0.2, 0.4, 1.0),
    Rgb::new(1.0, 0.3, 0.3),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NebulaParameters {
    pub count: u32,
    pub base_scale: f32,
    /// Full width of the in-plane offset from the anchor star.
    pub jitter_xy: f32,
    pub jitter_z: f32,
}

impl Default for NebulaParameters {
    fn default() -> Self {
        Self {
            count: 50,
            base_scale: 100.0,
            jitter_xy: 50.0,
            jitter_z: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nebula {
    pub position: [f32; 3],
    /// Sprite edge length, `base_scale * [0.5, 1.5)`.
    pub scale: f32,
    pub color: Rgb,
    /// In `[0.1, 0.25)`.
    pub opacity: f32,
}

/// Scatters nebulae near randomly chosen anchor stars.
///
/// Returns nothing for an empty field since there is no star to anchor to.
pub fn place_nebulae<R: Rng + ?Sized>(
    field: &StarField,
    params: &NebulaParameters,
    rng: &mut R,
) -> Vec<Nebula> {
    if field.is_empty() {
        return Vec::new();
    }

    (0..params.count)
        .filter_map(|_| {
            let [x, y, z] = field.position(rng.random_range(0..field.len()))?;
            let position = [
                x + (rng.random::<f32>() - 0.5) * params.jitter_xy,
                y + (rng.random::<f32>() - 0.5) * params.jitter_xy,
                z + (rng.random::<f32>() - 0.5) * params.jitter_z,
            ];
            let scale = params.base_scale * (0.5 + rng.random::<f32>());
            let color = NEBULA_COLORS[rng.random_range(0..NEBULA_COLORS.len())];
            let opacity = 0.1 + rng.random::<f32>() * 0.15;

            Some(Nebula {
                position,
                scale,
                color,
                opacity,
            })
        })
        .collect()
}
