use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Transaction;

pub mod matcher;
pub mod portfolio;
pub mod positions;

pub use matcher::{MatchOutcome, match_lots};
pub use portfolio::calculate_portfolio;
pub use positions::calculate_positions;

/// The single error taxonomy for malformed input. The engine itself never
/// returns one for well-formed records (positive quantity and price,
/// non-negative fees); it degrades to zeroed figures instead. Callers use
/// [`check_transaction`] to reject bad records before they reach the engine,
/// with enough context to log and skip.
#[derive(Debug, Error, PartialEq)]
pub enum ComputationError {
    #[error("transaction {id} for {symbol}: quantity must be positive, got {value}")]
    NonPositiveQuantity {
        symbol: String,
        id: i64,
        value: Decimal,
    },
    #[error("transaction {id} for {symbol}: unit price must be positive, got {value}")]
    NonPositivePrice {
        symbol: String,
        id: i64,
        value: Decimal,
    },
    #[error("transaction {id} for {symbol}: fees must not be negative, got {value}")]
    NegativeFees {
        symbol: String,
        id: i64,
        value: Decimal,
    },
}

/// Field-level validation of a single record against the engine's input
/// invariants.
pub fn check_transaction(transaction: &Transaction) -> Result<(), ComputationError> {
    if *transaction.quantity() <= Decimal::ZERO {
        return Err(ComputationError::NonPositiveQuantity {
            symbol: transaction.symbol().clone(),
            id: *transaction.id(),
            value: *transaction.quantity(),
        });
    }
    if *transaction.unit_price() <= Decimal::ZERO {
        return Err(ComputationError::NonPositivePrice {
            symbol: transaction.symbol().clone(),
            id: *transaction.id(),
            value: *transaction.unit_price(),
        });
    }
    if *transaction.fees() < Decimal::ZERO {
        return Err(ComputationError::NegativeFees {
            symbol: transaction.symbol().clone(),
            id: *transaction.id(),
            value: *transaction.fees(),
        });
    }
    Ok(())
}
