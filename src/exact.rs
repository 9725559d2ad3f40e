use crate::{
    algorithm::{DEFAULT_ROUND_DIGITS, ShapleyAlgorithm},
    coalition::{Coalition, contains, insert_gap, subsets_of_size},
    types::{BankruptcyGame, ValueVector},
    utils::shapley_weights,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Player ceiling; the work is `n^2 * 2^(n-1)` characteristic evaluations
pub const EXACT_MAX_PLAYERS: usize = 24;

/// Shapley value straight from its definition
///
/// For every player `i` and every coalition `S` of the others, the marginal
/// contribution `v(S + i) - v(S)` is weighted by `|S|! (n - |S| - 1)! / n!`.
/// Nothing is memoized, which keeps it an independent reference for the faster
/// algorithms.
#[derive(Debug, Clone)]
pub struct ExactEnumeration {
    round_digits: u32,
}

impl Default for ExactEnumeration {
    fn default() -> Self {
        Self {
            round_digits: DEFAULT_ROUND_DIGITS,
        }
    }
}

impl ExactEnumeration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_round_digits(mut self, round_digits: u32) -> Self {
        self.round_digits = round_digits;
        self
    }
}

/// `v(S) = max(0, E - sum of claims outside S)`
fn coalition_value(game: &BankruptcyGame, coalition: Coalition) -> f64 {
    let outside: f64 = game
        .claims()
        .iter()
        .enumerate()
        .filter(|&(j, _)| !contains(coalition, j))
        .map(|(_, w)| w)
        .sum();
    (game.estate() - outside).max(0.0)
}

fn player_value(game: &BankruptcyGame, player: usize, weights: &[f64]) -> f64 {
    let n_others = game.n_players() - 1;
    let mut value = 0.0;
    for (size, &weight) in weights.iter().enumerate() {
        for others in subsets_of_size(n_others, size) {
            let without = insert_gap(others, player);
            let with = without | (1 << player);
            value += weight * (coalition_value(game, with) - coalition_value(game, without));
        }
    }
    value
}

impl ShapleyAlgorithm for ExactEnumeration {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn round_digits(&self) -> u32 {
        self.round_digits
    }

    fn max_players(&self) -> Option<usize> {
        Some(EXACT_MAX_PLAYERS)
    }

    fn compute_raw(&mut self, game: &BankruptcyGame) -> ValueVector {
        let n = game.n_players();
        let weights = shapley_weights(n);

        #[cfg(feature = "parallel")]
        let values = (0..n)
            .into_par_iter()
            .map(|player| player_value(game, player, &weights))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let values = (0..n)
            .map(|player| player_value(game, player, &weights))
            .collect();

        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BankruptcyError;

    fn raw(estate: f64, claims: &[f64]) -> ValueVector {
        let game = BankruptcyGame::new(estate, claims.to_vec()).unwrap();
        ExactEnumeration::new().compute_raw(&game)
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < 1e-9, "player {i}: got {a}, expected {e}");
        }
    }

    #[test]
    fn test_coalition_value() {
        let game = BankruptcyGame::new(150.0, vec![100.0, 200.0]).unwrap();
        assert_eq!(coalition_value(&game, 0b00), 0.0);
        assert_eq!(coalition_value(&game, 0b01), 0.0);
        assert_eq!(coalition_value(&game, 0b10), 50.0);
        assert_eq!(coalition_value(&game, 0b11), 150.0);
    }

    #[test]
    fn test_two_players() {
        assert_close(&raw(150.0, &[100.0, 200.0]), &[50.0, 100.0]);
        // both claims exceed the estate, so both are truncated to it and split evenly
        assert_close(&raw(50.0, &[100.0, 200.0]), &[25.0, 25.0]);
    }

    #[test]
    fn test_single_player() {
        assert_close(&raw(3.0, &[5.0]), &[3.0]);
    }

    #[test]
    fn test_three_players() {
        assert_close(&raw(7.0, &[2.0, 3.0, 4.0]), &[4.0 / 3.0, 7.0 / 3.0, 10.0 / 3.0]);
        assert_close(
            &raw(200.0, &[100.0, 200.0, 300.0]),
            &[100.0 / 3.0, 250.0 / 3.0, 250.0 / 3.0],
        );
    }

    #[test]
    fn test_compute_rounds() {
        let result = ExactEnumeration::new()
            .compute(10.0, &[1.0, 2.0, 3.0, 4.0, 5.0])
            .unwrap();
        assert_eq!(result.value, vec![0.65, 1.31667, 1.98333, 2.65, 3.4]);
    }

    #[test]
    fn test_player_limit() {
        let claims = vec![1.0; EXACT_MAX_PLAYERS + 1];
        assert!(matches!(
            ExactEnumeration::new().compute(1.0, &claims),
            Err(BankruptcyError::TooManyPlayers { algorithm: "exact", .. })
        ));
    }
}
