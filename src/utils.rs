/// Largest power of ten an `f64` can hold
const MAX_DECIMAL_EXPONENT: u32 = 308;

/// From `2^52` up every `f64` is an integer
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Round to a fixed number of decimal places
pub(crate) fn round_to(x: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits.min(MAX_DECIMAL_EXPONENT) as i32);
    let scaled = x * factor;
    if scaled.is_nan() || scaled.abs() >= INTEGRAL_THRESHOLD {
        // Already beyond the precision the digits could express
        return x;
    }
    scaled.round() / factor
}

/// True when a finite value carries no fractional part
pub(crate) fn is_integral(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// Factorials `0!..=n!` as floats
pub(crate) fn factorials(n: usize) -> Vec<f64> {
    let mut facts = vec![1.0; n + 1];
    for i in 1..=n {
        facts[i] = facts[i - 1] * i as f64;
    }
    facts
}

/// Shapley probability of joining after a coalition of size `t`, for `t` in `0..n`
///
/// `weights[t] = t! (n - t - 1)! / n!`. Summed over all `C(n-1, t)` coalitions of each
/// size this gives one, which is what makes every weighted marginal sum efficient.
pub(crate) fn shapley_weights(n: usize) -> Vec<f64> {
    let fact = factorials(n);
    (0..n)
        .map(|t| fact[t] * fact[n - t - 1] / fact[n])
        .collect()
}
