use crate::{
    algorithm::{DEFAULT_ROUND_DIGITS, ShapleyAlgorithm},
    characteristic::{CharacteristicTable, ContributionTable, primal_value},
    coalition::{grand_coalition, is_singleton, lowest_member, members, without},
    types::{BankruptcyGame, ValueVector},
};

/// Player ceiling; the contribution table holds `2^n * n` values
pub const RECURSIVE_MAX_PLAYERS: usize = 20;

/// Shapley value by the recursive rule on the primal game `v(S) = max(0, sum_w(S) - w0)`
///
/// Within a coalition `S` of size `k`, player `i` receives
/// `(min(w_i, v(S)) + sum_{j != i} φ_i(S \ {j})) / k`, where `min(w_i, v(S))` is
/// exactly `v(S) - v(S \ {i})` whenever `v(S) > 0`. Singletons keep
/// `max(0, w_i - w0)` and coalitions with no surplus allocate nothing.
#[derive(Debug, Clone)]
pub struct PrimalRecursive {
    round_digits: u32,
}

impl Default for PrimalRecursive {
    fn default() -> Self {
        Self {
            round_digits: DEFAULT_ROUND_DIGITS,
        }
    }
}

impl PrimalRecursive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_round_digits(mut self, round_digits: u32) -> Self {
        self.round_digits = round_digits;
        self
    }
}

impl ShapleyAlgorithm for PrimalRecursive {
    fn name(&self) -> &'static str {
        "primal-recursive"
    }

    fn round_digits(&self) -> u32 {
        self.round_digits
    }

    fn max_players(&self) -> Option<usize> {
        Some(RECURSIVE_MAX_PLAYERS)
    }

    fn compute_raw(&mut self, game: &BankruptcyGame) -> ValueVector {
        let n = game.n_players();
        let claims = game.claims();
        let deficit = game.deficit();
        let characteristic = CharacteristicTable::primal(game);
        let mut phi = ContributionTable::new(n);
        let mut group = Vec::with_capacity(n);

        for coalition in 1..characteristic.len() {
            if is_singleton(coalition) {
                let i = lowest_member(coalition);
                phi.set(coalition, i, primal_value(claims[i], deficit));
                continue;
            }

            let surplus = characteristic.value(coalition);
            if surplus == 0.0 {
                continue;
            }

            group.clear();
            group.extend(members(coalition));
            let k = group.len() as f64;
            for &i in &group {
                let inherited: f64 = group
                    .iter()
                    .filter(|&&j| j != i)
                    .map(|&j| phi.get(without(coalition, j), i))
                    .sum();
                phi.set(coalition, i, (claims[i].min(surplus) + inherited) / k);
            }
        }

        phi.row(grand_coalition(n)).to_vec()
    }
}
