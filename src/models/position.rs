use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated state of all transactions for one symbol. Recomputed on every
/// engine call; fully sold symbols still get a position with zero shares.
///
/// `current_value` and `unrealized_gain` are only nonzero when the symbol is
/// still held and a current price was supplied. `shares_owned` may be
/// negative when a symbol's history contains more sells than buys; it is
/// surfaced as-is, not clamped.
#[derive(Clone, Debug, Deserialize, Eq, Getters, new, PartialEq, Serialize)]
pub struct Position {
    symbol: String,
    name: String,
    total_shares_bought: Decimal,
    total_shares_sold: Decimal,
    shares_owned: Decimal,
    total_invested: Decimal,
    total_received: Decimal,
    realized_gain: Decimal,
    average_cost: Decimal,
    cost_basis: Decimal,
    current_value: Decimal,
    unrealized_gain: Decimal,
    total_gain: Decimal,
}
