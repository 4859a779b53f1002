pub mod lot;
pub mod portfolio_stats;
pub mod position;
pub mod realized;
pub mod transaction;

pub use lot::OpenLot;
pub use portfolio_stats::PortfolioStats;
pub use position::Position;
pub use realized::RealizedSale;
pub use transaction::{Transaction, TransactionKind};
