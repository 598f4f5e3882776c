pub use crate::galaxy::{GalaxyConfig, StarCount};
pub use galaxy_field::{GalaxyParameters, NebulaParameters, StarField};
