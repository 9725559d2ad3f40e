use crate::{
    dual_recursive::DualRecursive,
    dynamic_programming::DynamicProgramming,
    error::{BankruptcyError, Result},
    exact::ExactEnumeration,
    monte_carlo::MonteCarlo,
    primal_recursive::PrimalRecursive,
    types::{AlgorithmResult, BankruptcyGame, ValueVector},
    utils::round_to,
    validation::check_player_limit,
};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
    time::Instant,
};

pub const DEFAULT_ROUND_DIGITS: u32 = 5;

/// Common contract of every Shapley value algorithm for bankruptcy games
///
/// Implementors provide [`compute_raw`](Self::compute_raw); [`compute`](Self::compute)
/// wraps it with validation, timing and rounding.
pub trait ShapleyAlgorithm {
    fn name(&self) -> &'static str;

    /// Decimal places kept in values and elapsed time
    fn round_digits(&self) -> u32;

    /// Largest number of players the algorithm accepts, if bounded
    fn max_players(&self) -> Option<usize> {
        None
    }

    /// Build the validated game, applying any algorithm-specific constraints
    fn validate(&self, estate: f64, claims: &[f64]) -> Result<BankruptcyGame> {
        let game = BankruptcyGame::new(estate, claims.to_vec())?;
        if let Some(limit) = self.max_players() {
            check_player_limit(self.name(), game.n_players(), limit)?;
        }
        Ok(game)
    }

    /// Unrounded Shapley value of a validated game, one entry per claim
    fn compute_raw(&mut self, game: &BankruptcyGame) -> ValueVector;

    fn compute(&mut self, estate: f64, claims: &[f64]) -> Result<AlgorithmResult> {
        let game = self.validate(estate, claims).inspect_err(|e| {
            log::debug!("{} rejected input: {e}", self.name());
        })?;

        let start = Instant::now();
        let raw = self.compute_raw(&game);
        let elapsed = start.elapsed().as_secs_f64();
        log::debug!(
            "{} computed {} players in {elapsed:.6}s",
            self.name(),
            game.n_players()
        );

        let digits = self.round_digits();
        Ok(AlgorithmResult {
            value: raw.into_iter().map(|x| round_to(x, digits)).collect(),
            elapsed_time: round_to(elapsed, digits),
        })
    }
}

/// Selector over the available algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Exact,
    DynamicProgramming,
    PrimalRecursive,
    DualRecursive,
    MonteCarlo,
}

/// Construction parameters shared by [`Algorithm::instantiate`]
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeConfig {
    pub round_digits: u32,
    /// Monte Carlo permutation count
    pub samples: usize,
    /// Monte Carlo seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            round_digits: DEFAULT_ROUND_DIGITS,
            samples: crate::monte_carlo::DEFAULT_SAMPLES,
            seed: None,
        }
    }
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Exact,
        Algorithm::DynamicProgramming,
        Algorithm::PrimalRecursive,
        Algorithm::DualRecursive,
        Algorithm::MonteCarlo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Exact => "exact",
            Algorithm::DynamicProgramming => "dynamic-programming",
            Algorithm::PrimalRecursive => "primal-recursive",
            Algorithm::DualRecursive => "dual-recursive",
            Algorithm::MonteCarlo => "monte-carlo",
        }
    }

    /// Whether the algorithm returns the exact Shapley value rather than an estimate
    pub fn is_exact(&self) -> bool {
        !matches!(self, Algorithm::MonteCarlo)
    }

    pub fn instantiate(&self, config: &ComputeConfig) -> Box<dyn ShapleyAlgorithm> {
        let digits = config.round_digits;
        match self {
            Algorithm::Exact => Box::new(ExactEnumeration::new().with_round_digits(digits)),
            Algorithm::DynamicProgramming => {
                Box::new(DynamicProgramming::new().with_round_digits(digits))
            }
            Algorithm::PrimalRecursive => {
                Box::new(PrimalRecursive::new().with_round_digits(digits))
            }
            Algorithm::DualRecursive => Box::new(DualRecursive::new().with_round_digits(digits)),
            Algorithm::MonteCarlo => {
                let mc = MonteCarlo::new(config.samples).with_round_digits(digits);
                Box::new(match config.seed {
                    Some(seed) => mc.with_seed(seed),
                    None => mc,
                })
            }
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = BankruptcyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "exact" => Ok(Algorithm::Exact),
            "dp" | "dynamic-programming" => Ok(Algorithm::DynamicProgramming),
            "recursive" | "primal" | "primal-recursive" => Ok(Algorithm::PrimalRecursive),
            "dual" | "dual-recursive" => Ok(Algorithm::DualRecursive),
            "mc" | "monte-carlo" => Ok(Algorithm::MonteCarlo),
            _ => Err(BankruptcyError::UnknownAlgorithm(s.to_string())),
        }
    }
}
