use chronoscape::scene::weights::{compute_weights, WeightVector, SCENE_COUNT};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn draws_stay_in_catalog_range() {
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
    for temp in [-5.0, 0.0, 22.0, 35.0, 45.0] {
        let w = compute_weights(temp, &[0.6, 0.1, 0.1, 0.2]);
        for _ in 0..500 {
            assert!(w.sample_index(&mut rng) < SCENE_COUNT);
        }
    }
}

#[test]
fn degenerate_vector_still_draws_in_range() {
    let mut rng = SmallRng::seed_from_u64(42);
    let w = WeightVector::normalized([0.0; SCENE_COUNT]);
    for _ in 0..500 {
        assert!(w.sample_index(&mut rng) < SCENE_COUNT);
    }
}
