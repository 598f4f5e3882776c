use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::sampling::{StarSample, sample_arm_star, sample_halo_star};
use crate::star_field::STRIDE;
use crate::{GalaxyError, GalaxyParameters, Palette, StarField};

/// Generates star fields for one validated parameter set.
///
/// Holds no state between calls; every `generate*` call is independent.
#[derive(Debug, Clone)]
pub struct FieldGenerator {
    params: GalaxyParameters,
    palette: Palette,
}

impl FieldGenerator {
    pub fn new(params: &GalaxyParameters) -> Result<Self, GalaxyError> {
        params.validate()?;
        Ok(Self {
            params: *params,
            palette: Palette::default(),
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn parameters(&self) -> &GalaxyParameters {
        &self.params
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Samples every star from a single sequential stream, arm stars first.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> StarField {
        let arm_stars = self.params.arm_star_count();
        let halo_stars = self.params.halo_star_count();
        let capacity = self.params.star_count as usize * STRIDE;

        let mut positions = Vec::with_capacity(capacity);
        let mut colors = Vec::with_capacity(capacity);
        let mut push = |sample: StarSample| {
            positions.extend_from_slice(&sample.position);
            colors.extend_from_slice(&sample.color);
        };

        for i in 0..arm_stars {
            push(sample_arm_star(&self.params, &self.palette, i, rng));
        }
        for _ in 0..halo_stars {
            push(sample_halo_star(&self.params, &self.palette, rng));
        }

        debug!("generated star field: {arm_stars} arm stars, {halo_stars} halo stars");
        StarField::from_buffers(positions, colors, arm_stars as usize)
    }

    /// Samples stars concurrently into disjoint buffer slices.
    ///
    /// Star `i` draws from its own ChaCha8 stream (`seed`, stream `i`), so the
    /// output depends only on `seed`, never on thread scheduling.
    pub fn generate_parallel(&self, seed: u64) -> StarField {
        let arm_stars = self.params.arm_star_count() as usize;
        let len = self.params.star_count as usize * STRIDE;

        let mut positions = vec![0.0f32; len];
        let mut colors = vec![0.0f32; len];

        positions
            .par_chunks_exact_mut(STRIDE)
            .zip(colors.par_chunks_exact_mut(STRIDE))
            .enumerate()
            .for_each(|(i, (position, color))| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(i as u64);

                let sample = if i < arm_stars {
                    sample_arm_star(&self.params, &self.palette, i as u32, &mut rng)
                } else {
                    sample_halo_star(&self.params, &self.palette, &mut rng)
                };
                position.copy_from_slice(&sample.position);
                color.copy_from_slice(&sample.color);
            });

        debug!(
            "generated star field in parallel: {} arm stars, {} halo stars",
            arm_stars,
            self.params.halo_star_count()
        );
        StarField::from_buffers(positions, colors, arm_stars)
    }
}

/// Generates a star field with the default palette.
///
/// Fails only when `params` does not validate; no buffers are produced then.
pub fn generate<R: Rng + ?Sized>(
    params: &GalaxyParameters,
    rng: &mut R,
) -> Result<StarField, GalaxyError> {
    Ok(FieldGenerator::new(params)?.generate(rng))
}
