//! Coalitions of `n` players as bitmasks
//!
//! Bit `i` of a [`Coalition`] is set when player `i` belongs to it, so the `2^n`
//! coalitions are exactly the integers `0..1 << n` and removing a member always
//! yields a strictly smaller mask.

/// Subset of player indices, one bit per player
pub type Coalition = usize;

/// Mask containing every one of `n` players
#[inline]
pub fn grand_coalition(n_players: usize) -> Coalition {
    (1 << n_players) - 1
}

#[inline]
pub fn contains(coalition: Coalition, player: usize) -> bool {
    (coalition >> player) & 1 == 1
}

#[inline]
pub fn without(coalition: Coalition, player: usize) -> Coalition {
    coalition & !(1 << player)
}

#[inline]
pub fn size(coalition: Coalition) -> usize {
    coalition.count_ones() as usize
}

#[inline]
pub fn is_singleton(coalition: Coalition) -> bool {
    coalition != 0 && coalition & (coalition - 1) == 0
}

/// Index of the lowest-numbered member; `coalition` must be non-empty
#[inline]
pub fn lowest_member(coalition: Coalition) -> usize {
    coalition.trailing_zeros() as usize
}

/// Iterate the members of a coalition in increasing index order
pub fn members(coalition: Coalition) -> Members {
    Members { rest: coalition }
}

#[derive(Debug, Clone)]
pub struct Members {
    rest: Coalition,
}

impl Iterator for Members {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.rest == 0 {
            return None;
        }
        let player = lowest_member(self.rest);
        self.rest &= self.rest - 1;
        Some(player)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = size(self.rest);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Members {}

/// Iterate every `k`-element subset of `n` players in increasing mask order
///
/// Uses Gosper's hack to step from one mask to the next mask with the same popcount.
pub fn subsets_of_size(n_players: usize, k: usize) -> FixedSizeSubsets {
    let next = (k <= n_players).then(|| grand_coalition(k));
    FixedSizeSubsets {
        next,
        limit: 1 << n_players,
    }
}

#[derive(Debug, Clone)]
pub struct FixedSizeSubsets {
    next: Option<Coalition>,
    limit: Coalition,
}

impl Iterator for FixedSizeSubsets {
    type Item = Coalition;

    fn next(&mut self) -> Option<Coalition> {
        let current = self.next?;
        self.next = if current == 0 {
            None
        } else {
            let lowest = current & current.wrapping_neg();
            let ripple = current + lowest;
            let following = (((ripple ^ current) >> 2) / lowest) | ripple;
            (following < self.limit).then_some(following)
        };
        Some(current)
    }
}

/// Spread a mask over the `n - 1` players other than `skipped` into a mask over all `n`
///
/// Bits below `skipped` stay in place, bits at or above it move up by one.
#[inline]
pub fn insert_gap(compact: Coalition, skipped: usize) -> Coalition {
    let low = compact & ((1 << skipped) - 1);
    let high = (compact >> skipped) << (skipped + 1);
    low | high
}

/// Total claim of every coalition, indexed by mask
///
/// Each entry extends an already computed smaller mask by its lowest member:
/// `sums[S] = sums[S without lowest] + claims[lowest]`.
pub fn claim_sums(claims: &[f64]) -> Vec<f64> {
    let n_coalitions = 1 << claims.len();
    let mut sums = vec![0.0; n_coalitions];
    for coalition in 1..n_coalitions {
        let player = lowest_member(coalition);
        sums[coalition] = sums[coalition & (coalition - 1)] + claims[player];
    }
    sums
}
