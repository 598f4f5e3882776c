use crate::prelude::*;
use clap::Parser;

/// Spiral Galaxy: a procedural star-field viewer.
///
/// Every option only seeds the first galaxy; the side panel edits it afterwards.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the first galaxy. A random one is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Total number of stars.
    #[arg(long)]
    pub stars: Option<u32>,

    /// Number of spiral arms.
    #[arg(long)]
    pub arms: Option<u32>,

    /// Fraction of stars placed in the halo, 0.0 to 1.0.
    #[arg(long)]
    pub haze: Option<f32>,

    /// Do not scatter nebulae around the stars.
    #[arg(long, default_value_t = false)]
    pub no_nebulae: bool,
}

impl Cli {
    pub fn galaxy_config(&self) -> GalaxyConfig {
        let mut config = GalaxyConfig::default();
        let params = &mut config.params;

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(stars) = self.stars {
            params.star_count = stars;
        }
        if let Some(arms) = self.arms {
            params.arm_count = arms;
        }
        if let Some(haze) = self.haze {
            params.haze_factor = haze;
        }
        config.nebulae_enabled = !self.no_nebulae;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "spiral_galaxy",
            "--seed",
            "7",
            "--stars",
            "500",
            "--arms",
            "5",
            "--haze",
            "0.3",
            "--no-nebulae",
        ])
        .unwrap();
        let config = cli.galaxy_config();

        assert_eq!(config.seed, 7);
        assert_eq!(config.params.star_count, 500);
        assert_eq!(config.params.arm_count, 5);
        assert_eq!(config.params.haze_factor, 0.3);
        assert!(!config.nebulae_enabled);
    }

    #[test]
    fn no_flags_keeps_defaults() {
        let config = Cli::try_parse_from(["spiral_galaxy"]).unwrap().galaxy_config();

        assert_eq!(config.params, GalaxyParameters::default());
        assert!(config.nebulae_enabled);
    }
}
