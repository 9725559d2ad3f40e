use crate::{
    algorithm::{DEFAULT_ROUND_DIGITS, ShapleyAlgorithm},
    characteristic::{CharacteristicTable, ContributionTable, dual_value},
    coalition::{grand_coalition, is_singleton, lowest_member, members, without},
    primal_recursive::RECURSIVE_MAX_PLAYERS,
    types::{BankruptcyGame, ValueVector},
};

/// Shapley value by the recursive rule on the dual game `v*(S) = min(E, sum_w(S))`
///
/// Player `i` of a coalition `S` of size `k` receives
/// `(v*(S) - v*(S \ {i}) + sum_{j != i} φ_i(S \ {j})) / k`. When the estate covers
/// the whole coalition the game restricted to `S` is additive and every member simply
/// gets their claim.
#[derive(Debug, Clone)]
pub struct DualRecursive {
    round_digits: u32,
}

impl Default for DualRecursive {
    fn default() -> Self {
        Self {
            round_digits: DEFAULT_ROUND_DIGITS,
        }
    }
}

impl DualRecursive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_round_digits(mut self, round_digits: u32) -> Self {
        self.round_digits = round_digits;
        self
    }
}

impl ShapleyAlgorithm for DualRecursive {
    fn name(&self) -> &'static str {
        "dual-recursive"
    }

    fn round_digits(&self) -> u32 {
        self.round_digits
    }

    fn max_players(&self) -> Option<usize> {
        Some(RECURSIVE_MAX_PLAYERS)
    }

    fn compute_raw(&mut self, game: &BankruptcyGame) -> ValueVector {
        let n = game.n_players();
        let estate = game.estate();
        let claims = game.claims();
        let characteristic = CharacteristicTable::dual(game);
        let mut phi = ContributionTable::new(n);
        let mut group = Vec::with_capacity(n);

        for coalition in 1..characteristic.len() {
            if is_singleton(coalition) {
                let i = lowest_member(coalition);
                phi.set(coalition, i, dual_value(claims[i], estate));
                continue;
            }

            let value = characteristic.value(coalition);
            if value == characteristic.claim_sum(coalition) {
                for i in members(coalition) {
                    phi.set(coalition, i, claims[i]);
                }
                continue;
            }

            group.clear();
            group.extend(members(coalition));
            let k = group.len() as f64;
            for &i in &group {
                let marginal = value - characteristic.value(without(coalition, i));
                let inherited: f64 = group
                    .iter()
                    .filter(|&&j| j != i)
                    .map(|&j| phi.get(without(coalition, j), i))
                    .sum();
                phi.set(coalition, i, (marginal + inherited) / k);
            }
        }

        phi.row(grand_coalition(n)).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::BankruptcyError, primal_recursive::PrimalRecursive};

    fn raw(estate: f64, claims: &[f64]) -> ValueVector {
        let game = BankruptcyGame::new(estate, claims.to_vec()).unwrap();
        DualRecursive::new().compute_raw(&game)
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < 1e-9, "player {i}: got {a}, expected {e}");
        }
    }

    #[test]
    fn test_two_players() {
        assert_close(&raw(150.0, &[100.0, 200.0]), &[50.0, 100.0]);
        assert_close(&raw(50.0, &[100.0, 200.0]), &[25.0, 25.0]);
    }

    #[test]
    fn test_single_player() {
        assert_close(&raw(3.0, &[5.0]), &[3.0]);
    }

    #[test]
    fn test_covered_coalitions_get_claims() {
        // {0, 1} has claims 2 + 3 <= 7, so inside it both are paid in full
        let game = BankruptcyGame::new(7.0, vec![2.0, 3.0, 40.0]).unwrap();
        assert_close(&DualRecursive::new().compute_raw(&game), &[1.0, 1.5, 4.5]);
    }

    #[test]
    fn test_agrees_with_primal() {
        for (estate, claims) in [
            (10.0, vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            (30.0, vec![5.0, 10.0, 15.0, 20.0]),
            (12.5, vec![3.5, 7.25, 10.0]),
            (250.0, vec![10.0, 60.0, 90.0, 120.0, 45.0, 80.0, 33.0]),
        ] {
            let game = BankruptcyGame::new(estate, claims.clone()).unwrap();
            let primal = PrimalRecursive::new().compute_raw(&game);
            assert_close(&raw(estate, &claims), &primal);
        }
    }

    #[test]
    fn test_player_limit() {
        let claims = vec![1.0; RECURSIVE_MAX_PLAYERS + 1];
        assert!(matches!(
            DualRecursive::new().compute(1.0, &claims),
            Err(BankruptcyError::TooManyPlayers { algorithm: "dual-recursive", .. })
        ));
    }
}
