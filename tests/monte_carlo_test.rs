use bankruptcy_shapley::{
    Algorithm, BankruptcyGame, ComputeConfig, ExactEnumeration, MonteCarlo, ShapleyAlgorithm,
};

fn exact(estate: f64, claims: &[f64]) -> Vec<f64> {
    let game = BankruptcyGame::new(estate, claims.to_vec()).unwrap();
    ExactEnumeration::new().compute_raw(&game)
}

/// Mean absolute error against the exact value, averaged over several seeds
fn mean_error(samples: usize, estate: f64, claims: &[f64], reference: &[f64]) -> f64 {
    let game = BankruptcyGame::new(estate, claims.to_vec()).unwrap();
    let seeds = 8;
    let total: f64 = (0..seeds)
        .map(|seed| {
            let estimate = MonteCarlo::new(samples).with_seed(seed).compute_raw(&game);
            estimate
                .iter()
                .zip(reference)
                .map(|(e, r)| (e - r).abs())
                .sum::<f64>()
                / claims.len() as f64
        })
        .sum();
    total / seeds as f64
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let claims = [10.0, 60.0, 90.0, 120.0, 45.0];
    let first = MonteCarlo::new(5_000)
        .with_seed(1234)
        .compute(150.0, &claims)
        .unwrap();
    let second = MonteCarlo::new(5_000)
        .with_seed(1234)
        .compute(150.0, &claims)
        .unwrap();
    assert_eq!(first.value, second.value);

    let other = MonteCarlo::new(5_000)
        .with_seed(4321)
        .compute(150.0, &claims)
        .unwrap();
    assert_ne!(first.value, other.value);
}

#[test]
fn test_config_seed_reaches_instance() {
    let config = ComputeConfig {
        samples: 2_000,
        seed: Some(77),
        ..ComputeConfig::default()
    };
    let claims = [3.0, 5.0, 8.0];
    let a = Algorithm::MonteCarlo
        .instantiate(&config)
        .compute(10.0, &claims)
        .unwrap();
    let b = Algorithm::MonteCarlo
        .instantiate(&config)
        .compute(10.0, &claims)
        .unwrap();
    assert_eq!(a.value, b.value);
}

#[test]
fn test_reseed_between_calls() {
    let claims = [10.0, 60.0, 90.0, 120.0];
    let mut mc = MonteCarlo::new(1_000).with_seed(5);
    let first = mc.compute(150.0, &claims).unwrap();
    mc.reseed(5);
    let again = mc.compute(150.0, &claims).unwrap();
    assert_eq!(first.value, again.value);
    assert_eq!(mc.seed(), Some(5));
}

#[test]
fn test_estimates_are_efficient() {
    for (estate, claims) in [
        (150.0, vec![100.0, 200.0]),
        (10.0, vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        (12.5, vec![3.5, 7.25, 10.0]),
    ] {
        let game = BankruptcyGame::new(estate, claims).unwrap();
        for samples in [1, 10, 1_000] {
            let estimate = MonteCarlo::new(samples).with_seed(3).compute_raw(&game);
            let total: f64 = estimate.iter().sum();
            assert!(
                (total - estate).abs() < 1e-9,
                "{samples} samples allocated {total} of {estate}"
            );
        }
    }
}

#[test]
fn test_estimates_within_claims() {
    let claims = [2.0, 3.0, 40.0];
    let game = BankruptcyGame::new(7.0, claims.to_vec()).unwrap();
    let estimate = MonteCarlo::new(500).with_seed(8).compute_raw(&game);
    for (value, claim) in estimate.iter().zip(claims) {
        assert!(*value >= 0.0 && *value <= claim);
    }
}

#[test]
fn test_error_shrinks_with_more_samples() {
    let estate = 10.0;
    let claims = [1.0, 2.0, 3.0, 4.0, 5.0];
    let reference = exact(estate, &claims);

    let coarse = mean_error(50, estate, &claims, &reference);
    let fine = mean_error(20_000, estate, &claims, &reference);
    assert!(
        fine < coarse,
        "error did not shrink: {coarse} at 50 samples, {fine} at 20000"
    );
    assert!(fine < 0.05, "error {fine} too large at 20000 samples");
}
