use thiserror::Error;

/// Error types for the bankruptcy Shapley computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankruptcyError {
    /// Estate or claims fail the bankruptcy game conditions
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Dynamic programming needs integral estate and claims
    #[error("Integer constraint violated: {0}")]
    IntegerConstraintViolation(String),

    /// Too many players for the tables an algorithm has to build
    #[error("There are too many players for {algorithm}; got {count}, the limit is {limit}.")]
    TooManyPlayers {
        algorithm: &'static str,
        count: usize,
        limit: usize,
    },

    /// Estate too large for the counting table dynamic programming allocates
    #[error(
        "Estate {estate} is too large for {algorithm} with {n_players} players; the limit is {limit}."
    )]
    EstateTooLarge {
        algorithm: &'static str,
        estate: f64,
        n_players: usize,
        limit: u64,
    },

    /// Construction parameters that make the computation meaningless
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Game file could not be read or parsed
    #[error("Input file error: {0}")]
    InputFile(String),
}

/// Result type alias for bankruptcy Shapley operations
pub type Result<T> = std::result::Result<T, BankruptcyError>;
