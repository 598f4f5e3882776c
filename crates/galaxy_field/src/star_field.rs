/// Floats per star in both buffers.
pub const STRIDE: usize = 3;

/// Which sampling model produced a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    Arm,
    Halo,
}

/// Generated point cloud as two flat, index-aligned buffers.
///
/// Star `i` owns `positions[3 * i..3 * i + 3]` as `(x, y, z)` and
/// `colors[3 * i..3 * i + 3]` as linear `(r, g, b)`. That pairing is the only
/// ordering a consumer may rely on. Arm stars occupy the first
/// `arm_star_count` slots and halo stars the rest.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StarField {
    positions: Vec<f32>,
    colors: Vec<f32>,
    arm_star_count: usize,
}

impl StarField {
    pub(crate) fn from_buffers(positions: Vec<f32>, colors: Vec<f32>, arm_star_count: usize) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        debug_assert_eq!(positions.len() % STRIDE, 0);
        debug_assert!(arm_star_count * STRIDE <= positions.len());
        Self {
            positions,
            colors,
            arm_star_count,
        }
    }

    /// Number of stars.
    pub fn len(&self) -> usize {
        self.positions.len() / STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        triple(&self.positions, index)
    }

    pub fn color(&self, index: usize) -> Option<[f32; 3]> {
        triple(&self.colors, index)
    }

    pub fn population(&self, index: usize) -> Option<Population> {
        if index >= self.len() {
            None
        } else if index < self.arm_star_count {
            Some(Population::Arm)
        } else {
            Some(Population::Halo)
        }
    }

    pub fn arm_star_count(&self) -> usize {
        self.arm_star_count
    }

    pub fn halo_star_count(&self) -> usize {
        self.len() - self.arm_star_count
    }

    /// Position/color pairs in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = ([f32; 3], [f32; 3])> + '_ {
        self.positions
            .chunks_exact(STRIDE)
            .zip(self.colors.chunks_exact(STRIDE))
            .map(|(p, c)| ([p[0], p[1], p[2]], [c[0], c[1], c[2]]))
    }

    /// Hands the raw `(positions, colors)` buffers to a renderer.
    pub fn into_buffers(self) -> (Vec<f32>, Vec<f32>) {
        (self.positions, self.colors)
    }
}

fn triple(buffer: &[f32], index: usize) -> Option<[f32; 3]> {
    let start = index.checked_mul(STRIDE)?;
    buffer.get(start..start.checked_add(STRIDE)?)?.try_into().ok()
}
