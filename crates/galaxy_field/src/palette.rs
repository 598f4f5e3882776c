use rand::Rng;

use crate::GalaxyError;

/// A linear RGB triple with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Decodes a `0xRRGGBB` sRGB code into linear intensities.
    pub fn from_srgb_hex(hex: u32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xFF) as f32 / 255.0);
        Self::new(channel(16), channel(8), channel(0))
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Reference colors stars are tinted from. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Default for Palette {
    /// White, lavender blush, misty rose, light blue and lavender.
    fn default() -> Self {
        Self {
            colors: [0xFFFFFF, 0xFFF0F5, 0xFFE4E1, 0xADD8E6, 0xE6E6FA]
                .into_iter()
                .map(Rgb::from_srgb_hex)
                .collect(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self, GalaxyError> {
        if colors.is_empty() {
            return Err(GalaxyError::invalid("palette", "needs at least one color"));
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        self.colors[rng.random_range(0..self.colors.len())]
    }
}
