use crate::GalaxyError;

/// Scalar inputs for one generation call.
///
/// Distances are in scene units, with the galactic plane spanning x/y and
/// `galaxy_thickness` measured along z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyParameters {
    /// Total number of points produced.
    pub star_count: u32,
    pub arm_count: u32,
    /// Angular jitter scale for arm stars, in half turns.
    pub arm_spread: f32,
    /// Total twist across the radius, in half turns.
    pub rotation_factor: f32,
    /// Exponent applied to the radial draw. Higher packs more stars into the core.
    pub core_concentration: f32,
    /// Fraction of stars assigned to the halo.
    pub haze_factor: f32,
    pub galaxy_radius: f32,
    pub galaxy_thickness: f32,
}

impl Default for GalaxyParameters {
    fn default() -> Self {
        Self {
            star_count: 2000,
            arm_count: 3,
            arm_spread: 0.1,
            rotation_factor: 3.0,
            core_concentration: 3.0,
            haze_factor: 0.1,
            galaxy_radius: 200.0,
            galaxy_thickness: 15.0,
        }
    }
}

impl GalaxyParameters {
    pub const MIN: Self = Self {
        star_count: 0,
        arm_count: 1,
        arm_spread: 0.0,
        rotation_factor: -10.0,
        core_concentration: 0.5,
        haze_factor: 0.0,
        galaxy_radius: 10.0,
        galaxy_thickness: 0.0,
    };
    pub const MAX: Self = Self {
        star_count: 200_000,
        arm_count: 12,
        arm_spread: 1.0,
        rotation_factor: 10.0,
        core_concentration: 8.0,
        haze_factor: 1.0,
        galaxy_radius: 1000.0,
        galaxy_thickness: 100.0,
    };

    /// Rejects the inputs that would make the sampling formulas undefined.
    ///
    /// Everything else, including a `haze_factor` outside `[0, 1]` or a zero
    /// thickness, is accepted and yields a degenerate but consistent field.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        if self.arm_count == 0 {
            return Err(GalaxyError::invalid("arm_count", "must be at least 1"));
        }
        // also catches NaN
        if !(self.galaxy_radius > 0.0) {
            return Err(GalaxyError::invalid(
                "galaxy_radius",
                format!("must be positive, got {}", self.galaxy_radius),
            ));
        }
        // 0^-k is infinite and pushes arm stars past the rim
        if !(self.core_concentration > 0.0) {
            return Err(GalaxyError::invalid(
                "core_concentration",
                format!("must be positive, got {}", self.core_concentration),
            ));
        }
        Ok(())
    }

    /// `floor(star_count * haze_factor)`, clamped so the two populations
    /// always add up to `star_count`.
    pub fn halo_star_count(&self) -> u32 {
        let halo = (self.star_count as f32 * self.haze_factor).floor();
        // float to int casts saturate, NaN becomes 0
        (halo as u32).min(self.star_count)
    }

    pub fn arm_star_count(&self) -> u32 {
        self.star_count - self.halo_star_count()
    }
}
