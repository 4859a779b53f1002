//! FIFO cost-basis and portfolio aggregation over buy/sell transaction logs.
//!
//! The engine is stateless: each call takes a slice of [`Transaction`]s and
//! an optional symbol-to-price map, and derives realized sales, open lots,
//! per-symbol positions and portfolio statistics from scratch. Input is never
//! mutated; sorting happens on an internal copy.

pub mod engine;
pub mod import;
pub mod models;

#[cfg(test)]
mod test;

pub use engine::{
    ComputationError, MatchOutcome, calculate_portfolio, calculate_positions, check_transaction,
    match_lots,
};
pub use import::import_transactions;
pub use models::{OpenLot, PortfolioStats, Position, RealizedSale, Transaction, TransactionKind};
