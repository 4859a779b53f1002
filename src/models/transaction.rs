use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A single buy or sell of one security. Immutable once created; the engine
/// never mutates caller-supplied transactions.
#[derive(Clone, Debug, Deserialize, Getters, new, PartialEq, Serialize)]
pub struct Transaction {
    id: i64,
    symbol: String,
    name: String,
    kind: TransactionKind,
    quantity: Decimal,
    unit_price: Decimal,
    timestamp: DateTime<Local>,
    fees: Decimal,
    notes: Option<String>,
}

impl Transaction {
    /// Full cost of a buy: shares times price plus the fee charged in full.
    pub fn total_cost(&self) -> Decimal {
        self.quantity * self.unit_price + self.fees
    }

    /// Net proceeds of a sell: shares times price minus the fee.
    pub fn net_proceeds(&self) -> Decimal {
        self.quantity * self.unit_price - self.fees
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum TransactionKind {
    Buy,
    Sell,
}
