//! Shapley value computation for bankruptcy games
//!
//! A bankruptcy game divides an estate `E` among claimants whose claims `w` add up to
//! more than `E`. This library offers several interchangeable algorithms for the
//! Shapley value of such a game, all behind the [`ShapleyAlgorithm`] contract:
//!
//! - [`ExactEnumeration`]: the definition, `O(n^2 2^n)`, a reference oracle
//! - [`DynamicProgramming`]: coalition counting, `O(n^2 E)`, integral games only
//! - [`PrimalRecursive`] / [`DualRecursive`]: recursive rules over all `2^n` coalitions
//! - [`MonteCarlo`]: permutation sampling estimate
//!
//! ```
//! use bankruptcy_shapley::{DualRecursive, ShapleyAlgorithm};
//!
//! let result = DualRecursive::new().compute(150.0, &[100.0, 200.0]).unwrap();
//! assert_eq!(result.value, vec![50.0, 100.0]);
//! ```

pub mod algorithm;
pub mod characteristic;
pub mod coalition;
pub mod dual_recursive;
pub mod dynamic_programming;
pub mod error;
pub mod exact;
pub mod monte_carlo;
pub mod primal_recursive;
pub mod types;
mod utils;
mod validation;

pub use algorithm::{Algorithm, ComputeConfig, DEFAULT_ROUND_DIGITS, ShapleyAlgorithm};
pub use dual_recursive::DualRecursive;
pub use dynamic_programming::DynamicProgramming;
pub use error::{BankruptcyError, Result};
pub use exact::ExactEnumeration;
pub use monte_carlo::MonteCarlo;
pub use primal_recursive::PrimalRecursive;
pub use types::{AlgorithmResult, Allocation, BankruptcyGame, GameRecord, ValueVector};
