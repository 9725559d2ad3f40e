use crate::{
    error::{BankruptcyError, Result},
    utils::is_integral,
};

/// Validate estate and claims of a bankruptcy game
///
/// Checks run in a fixed order so the first violated condition is the one reported:
/// empty claims, estate finiteness and sign, each claim's finiteness and sign, and
/// finally the bankruptcy condition `estate < sum(claims)`.
pub(crate) fn check_inputs(estate: f64, claims: &[f64]) -> Result<()> {
    if claims.is_empty() {
        return Err(BankruptcyError::InvalidInput(
            "claims cannot be empty".to_string(),
        ));
    }

    if !estate.is_finite() {
        return Err(BankruptcyError::InvalidInput(format!(
            "estate must be finite, got {estate}"
        )));
    }
    if estate <= 0.0 {
        return Err(BankruptcyError::InvalidInput(format!(
            "estate must be positive, got {estate}"
        )));
    }

    for (i, &claim) in claims.iter().enumerate() {
        if !claim.is_finite() {
            return Err(BankruptcyError::InvalidInput(format!(
                "claim {i} must be finite, got {claim}"
            )));
        }
        if claim <= 0.0 {
            return Err(BankruptcyError::InvalidInput(format!(
                "claim {i} must be positive, got {claim}"
            )));
        }
    }

    let total: f64 = claims.iter().sum();
    if !total.is_finite() {
        return Err(BankruptcyError::InvalidInput(
            "total claims must be finite".to_string(),
        ));
    }
    if estate >= total {
        return Err(BankruptcyError::InvalidInput(format!(
            "estate ({estate}) must be smaller than the total claims ({total})"
        )));
    }

    Ok(())
}

/// Reject estates and claims with a fractional part
pub(crate) fn check_integral(estate: f64, claims: &[f64]) -> Result<()> {
    if !is_integral(estate) {
        return Err(BankruptcyError::IntegerConstraintViolation(format!(
            "estate must be an integer, got {estate}"
        )));
    }
    for (i, &claim) in claims.iter().enumerate() {
        if !is_integral(claim) {
            return Err(BankruptcyError::IntegerConstraintViolation(format!(
                "claim {i} must be an integer, got {claim}"
            )));
        }
    }
    Ok(())
}

/// Enforce the player ceiling of an algorithm
pub(crate) fn check_player_limit(algorithm: &'static str, count: usize, limit: usize) -> Result<()> {
    if count > limit {
        return Err(BankruptcyError::TooManyPlayers {
            algorithm,
            count,
            limit,
        });
    }
    Ok(())
}

/// Reject estates whose `(E + 1) x n` table would exceed `max_cells` entries
///
/// `estate` is finite here; the bound comes from a division, so nothing can overflow.
pub(crate) fn check_table_size(
    algorithm: &'static str,
    estate: f64,
    n_players: usize,
    max_cells: usize,
) -> Result<()> {
    let limit = (max_cells / n_players.max(1)).saturating_sub(1) as u64;
    if estate > limit as f64 {
        return Err(BankruptcyError::EstateTooLarge {
            algorithm,
            estate,
            n_players,
            limit,
        });
    }
    Ok(())
}
