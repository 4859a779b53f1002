use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gain or loss locked in by a completed (or fallback-resolved) sale,
/// computed against the cost basis of the lots it consumed.
#[derive(Clone, Debug, Deserialize, Getters, new, PartialEq, Serialize)]
pub struct RealizedSale {
    symbol: String,
    quantity: Decimal,
    proceeds: Decimal,
    cost_basis: Decimal,
    gain_loss: Decimal,
    timestamp: DateTime<Local>,
}
