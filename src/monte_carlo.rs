use crate::{
    algorithm::{DEFAULT_ROUND_DIGITS, ShapleyAlgorithm},
    error::{BankruptcyError, Result},
    types::{BankruptcyGame, ValueVector},
};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

pub const DEFAULT_SAMPLES: usize = 10_000;

/// Unbiased Shapley estimate from uniformly random arrival orders
///
/// Each sample shuffles the players and walks the order, crediting each player with
/// the change in `max(0, E - claims still to arrive)` their arrival causes. Claims are
/// capped at the estate first. Every sample hands out exactly `E`, so the estimate is
/// efficient regardless of the sample count; its variance falls as `1 / M`.
///
/// The generator is seeded once, at construction. Repeated calls on one instance keep
/// drawing from the same stream and so return different estimates; call
/// [`reseed`](Self::reseed) before a call to make it reproducible on its own.
#[derive(Debug, Clone)]
pub struct MonteCarlo {
    samples: usize,
    seed: Option<u64>,
    rng: StdRng,
    round_digits: u32,
}

impl Default for MonteCarlo {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES)
    }
}

impl MonteCarlo {
    pub fn new(samples: usize) -> Self {
        Self {
            samples,
            seed: None,
            rng: StdRng::from_entropy(),
            round_digits: DEFAULT_ROUND_DIGITS,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    pub fn with_round_digits(mut self, round_digits: u32) -> Self {
        self.round_digits = round_digits;
        self
    }

    /// Restart the generator from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Seed most recently applied, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl ShapleyAlgorithm for MonteCarlo {
    fn name(&self) -> &'static str {
        "monte-carlo"
    }

    fn round_digits(&self) -> u32 {
        self.round_digits
    }

    fn validate(&self, estate: f64, claims: &[f64]) -> Result<BankruptcyGame> {
        if self.samples == 0 {
            return Err(BankruptcyError::InvalidConfiguration(
                "sample count must be positive".to_string(),
            ));
        }
        BankruptcyGame::new(estate, claims.to_vec())
    }

    fn compute_raw(&mut self, game: &BankruptcyGame) -> ValueVector {
        let estate = game.estate();
        let capped = game.capped_claims();
        let capped_total: f64 = capped.iter().sum();
        let mut totals = vec![0.0; capped.len()];
        let mut order: Vec<usize> = (0..capped.len()).collect();

        for _ in 0..self.samples {
            order.shuffle(&mut self.rng);
            let mut pending = capped_total;
            for &player in &order {
                let before = (estate - pending).max(0.0);
                pending -= capped[player];
                let after = (estate - pending).max(0.0);
                totals[player] += after - before;
            }
        }

        let samples = self.samples as f64;
        totals.into_iter().map(|total| total / samples).collect()
    }
}
