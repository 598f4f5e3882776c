use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::nebula::NEBULA_COLORS;
use crate::{GalaxyParameters, NebulaParameters, StarField, generate, place_nebulae};

#[test]
fn empty_field_has_no_nebulae() {
    let nebulae = place_nebulae(
        &StarField::default(),
        &NebulaParameters::default(),
        &mut ChaCha8Rng::seed_from_u64(1),
    );
    assert!(nebulae.is_empty());
}

#[test]
fn nebulae_sit_near_an_anchor_star() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let field = generate(&GalaxyParameters::default(), &mut rng).unwrap();
    let params = NebulaParameters::default();
    let nebulae = place_nebulae(&field, &params, &mut rng);

    assert_eq!(nebulae.len(), 50);
    for nebula in &nebulae {
        let [nx, ny, nz] = nebula.position;
        let anchored = field.iter().any(|([x, y, z], _)| {
            (nx - x).abs() <= params.jitter_xy / 2.0 + 1e-3
                && (ny - y).abs() <= params.jitter_xy / 2.0 + 1e-3
                && (nz - z).abs() <= params.jitter_z / 2.0 + 1e-3
        });
        assert!(anchored, "{nebula:?} is not near any star");

        assert!((50.0..=150.0).contains(&nebula.scale));
        assert!((0.1..=0.25).contains(&nebula.opacity));
        assert!(NEBULA_COLORS.contains(&nebula.color));
    }
}

#[test]
fn count_is_configurable() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let field = generate(&GalaxyParameters::default(), &mut rng).unwrap();
    let params = NebulaParameters {
        count: 7,
        ..Default::default()
    };

    assert_eq!(place_nebulae(&field, &params, &mut rng).len(), 7);
}
