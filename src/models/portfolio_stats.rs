use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-wide sums over all positions.
#[derive(Clone, Debug, Deserialize, Eq, Getters, new, PartialEq, Serialize)]
pub struct PortfolioStats {
    total_invested: Decimal,
    total_received: Decimal,
    realized_gain: Decimal,
    current_value: Decimal,
    unrealized_gain: Decimal,
    total_gain: Decimal,
    gain_loss_percent: Decimal,
    unique_stocks: usize,
    stocks_with_holdings: usize,
    total_transactions: usize,
}
