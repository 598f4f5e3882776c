//! Procedural spiral galaxy point clouds.
//!
//! [`generate`] turns a [`GalaxyParameters`] set and a random source into a
//! [`StarField`]: flat position and color buffers ready for a point-cloud
//! renderer. Nothing here depends on a rendering library.

mod error;
mod generator;
pub mod nebula;
mod palette;
mod parameters;
pub mod sampling;
mod star_field;

#[cfg(test)]
mod nebula_test;

pub use error::GalaxyError;
pub use generator::{FieldGenerator, generate};
pub use nebula::{Nebula, NebulaParameters, place_nebulae};
pub use palette::{Palette, Rgb};
pub use parameters::GalaxyParameters;
pub use star_field::{Population, STRIDE, StarField};
