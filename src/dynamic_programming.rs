use crate::{
    algorithm::{DEFAULT_ROUND_DIGITS, ShapleyAlgorithm},
    error::Result,
    types::{BankruptcyGame, ValueVector},
    utils::shapley_weights,
    validation::{check_integral, check_player_limit, check_table_size},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Player ceiling; coalition counts are bounded by `2^(n-1)` and kept in `u128`
pub const DP_MAX_PLAYERS: usize = 128;

/// Largest counting table, in `u128` entries per layer; two layers are kept
///
/// At `1 << 24` entries the pair of layers takes 512 MiB. With `n` players the estate
/// may be at most `DP_MAX_TABLE_CELLS / n - 1`.
pub const DP_MAX_TABLE_CELLS: usize = 1 << 24;

/// Pseudo-polynomial Shapley value for integral games, `O(n^2 * E)` time
///
/// For each pivot player the other claimants are folded in one at a time into a
/// table counting coalitions by total claim `s <= E` and size `t`. A coalition
/// with claim sum `s` gains `min(E - s, w_pivot)` when the pivot joins (dual game),
/// so the pivot's value is the Shapley-weighted sum of that gain over the table.
/// Coalitions whose claims already exceed the estate gain nothing and are never stored.
#[derive(Debug, Clone)]
pub struct DynamicProgramming {
    round_digits: u32,
}

impl Default for DynamicProgramming {
    fn default() -> Self {
        Self {
            round_digits: DEFAULT_ROUND_DIGITS,
        }
    }
}

impl DynamicProgramming {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_round_digits(mut self, round_digits: u32) -> Self {
        self.round_digits = round_digits;
        self
    }
}

/// Rolling pair of `(E + 1) x n` count layers, indexed `[s][t]`
struct CountTable {
    width: usize,
    prev: Vec<u128>,
    curr: Vec<u128>,
}

impl CountTable {
    fn new(estate: usize, n_players: usize) -> Self {
        let len = (estate + 1) * n_players;
        Self {
            width: n_players,
            prev: vec![0; len],
            curr: vec![0; len],
        }
    }

    /// Start over from the empty coalition: one way to reach sum 0 with size 0
    fn reset(&mut self) {
        self.prev.fill(0);
        self.curr.fill(0);
        self.prev[0] = 1;
    }

    #[inline]
    fn count(&self, sum: usize, size: usize) -> u128 {
        self.prev[sum * self.width + size]
    }

    /// Fold in one more player; `max_size` bounds the coalition sizes reachable so far
    fn add_player(&mut self, claim: usize, max_size: usize) {
        let width = self.width;
        let n_sums = self.prev.len() / width;
        for size in 0..=max_size {
            for sum in 0..n_sums {
                let mut count = self.prev[sum * width + size];
                if size > 0 && sum >= claim {
                    count += self.prev[(sum - claim) * width + size - 1];
                }
                self.curr[sum * width + size] = count;
            }
        }
        std::mem::swap(&mut self.prev, &mut self.curr);
    }
}

fn pivot_value(estate: usize, claims: &[usize], pivot: usize, weights: &[f64]) -> f64 {
    let n = claims.len();
    let mut table = CountTable::new(estate, n);
    table.reset();

    let others = (0..n).filter(|&j| j != pivot);
    for (added, player) in others.enumerate() {
        table.add_player(claims[player], added + 1);
    }

    let claim = claims[pivot];
    let mut value = 0.0;
    // sizes run through n - 1: all other players together may still fit under the estate
    for (size, &weight) in weights.iter().enumerate() {
        for sum in 0..=estate {
            let count = table.count(sum, size);
            if count == 0 {
                continue;
            }
            let gain = (estate - sum).min(claim);
            value += weight * gain as f64 * count as f64;
        }
    }
    value
}

impl ShapleyAlgorithm for DynamicProgramming {
    fn name(&self) -> &'static str {
        "dynamic-programming"
    }

    fn round_digits(&self) -> u32 {
        self.round_digits
    }

    fn max_players(&self) -> Option<usize> {
        Some(DP_MAX_PLAYERS)
    }

    fn validate(&self, estate: f64, claims: &[f64]) -> Result<BankruptcyGame> {
        let game = BankruptcyGame::new(estate, claims.to_vec())?;
        check_integral(game.estate(), game.claims())?;
        check_player_limit(self.name(), game.n_players(), DP_MAX_PLAYERS)?;
        check_table_size(
            self.name(),
            game.estate(),
            game.n_players(),
            DP_MAX_TABLE_CELLS,
        )?;
        Ok(game)
    }

    fn compute_raw(&mut self, game: &BankruptcyGame) -> ValueVector {
        // Integrality was checked in `validate`
        let estate = game.estate() as usize;
        let claims: Vec<usize> = game.claims().iter().map(|&w| w as usize).collect();
        let n = claims.len();
        let weights = shapley_weights(n);

        #[cfg(feature = "parallel")]
        let values = (0..n)
            .into_par_iter()
            .map(|pivot| pivot_value(estate, &claims, pivot, &weights))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let values = (0..n)
            .map(|pivot| pivot_value(estate, &claims, pivot, &weights))
            .collect();

        values
    }
}
