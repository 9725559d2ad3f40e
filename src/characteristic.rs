use crate::{
    coalition::{Coalition, claim_sums},
    types::BankruptcyGame,
};

/// Which characteristic function a table holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formulation {
    /// `v(S) = max(0, sum_w(S) - w0)` with `w0 = sum(w) - E`
    Primal,
    /// `v*(S) = min(E, sum_w(S))`
    Dual,
}

#[inline]
pub fn primal_value(claim_sum: f64, deficit: f64) -> f64 {
    (claim_sum - deficit).max(0.0)
}

#[inline]
pub fn dual_value(claim_sum: f64, estate: f64) -> f64 {
    estate.min(claim_sum)
}

/// Claim sums and characteristic values of all `2^n` coalitions of a game
#[derive(Debug, Clone)]
pub struct CharacteristicTable {
    formulation: Formulation,
    sums: Vec<f64>,
    values: Vec<f64>,
}

impl CharacteristicTable {
    pub fn primal(game: &BankruptcyGame) -> Self {
        Self::build(game, Formulation::Primal)
    }

    pub fn dual(game: &BankruptcyGame) -> Self {
        Self::build(game, Formulation::Dual)
    }

    pub fn build(game: &BankruptcyGame, formulation: Formulation) -> Self {
        let sums = claim_sums(game.claims());
        let values = match formulation {
            Formulation::Primal => {
                let deficit = game.deficit();
                sums.iter().map(|&s| primal_value(s, deficit)).collect()
            }
            Formulation::Dual => {
                let estate = game.estate();
                sums.iter().map(|&s| dual_value(s, estate)).collect()
            }
        };
        Self {
            formulation,
            sums,
            values,
        }
    }

    pub fn formulation(&self) -> Formulation {
        self.formulation
    }

    #[inline]
    pub fn value(&self, coalition: Coalition) -> f64 {
        self.values[coalition]
    }

    #[inline]
    pub fn claim_sum(&self, coalition: Coalition) -> f64 {
        self.sums[coalition]
    }

    /// Number of coalitions, `2^n`
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Allocation vector `φ(S)` of every coalition, stored as `2^n` rows of `n` entries
///
/// Built fresh for each game and dropped with it. Rows are filled in increasing mask
/// order, so every `S \ {j}` a row depends on is complete before the row is written.
#[derive(Debug, Clone)]
pub struct ContributionTable {
    n_players: usize,
    entries: Vec<f64>,
}

impl ContributionTable {
    pub fn new(n_players: usize) -> Self {
        Self {
            n_players,
            entries: vec![0.0; (1 << n_players) * n_players],
        }
    }

    #[inline]
    pub fn get(&self, coalition: Coalition, player: usize) -> f64 {
        self.entries[coalition * self.n_players + player]
    }

    #[inline]
    pub fn set(&mut self, coalition: Coalition, player: usize, value: f64) {
        self.entries[coalition * self.n_players + player] = value;
    }

    pub fn row(&self, coalition: Coalition) -> &[f64] {
        let start = coalition * self.n_players;
        &self.entries[start..start + self.n_players]
    }
}
