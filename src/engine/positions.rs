use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::engine::matcher::match_lots;
use crate::models::{Position, Transaction, TransactionKind};

/// Builds one [`Position`] per symbol ever touched by a transaction, fully
/// sold symbols included. Output is sorted by symbol so repeated calls over
/// the same input yield identical results.
///
/// `prices` is sparse: a symbol without an entry has no live price, and its
/// current value and unrealized gain stay zero. The same holds for symbols
/// no longer held.
pub fn calculate_positions(
    transactions: &[Transaction],
    prices: Option<&HashMap<String, Decimal>>,
) -> Vec<Position> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| a.timestamp().cmp(b.timestamp()));

    let mut by_symbol: BTreeMap<String, Vec<Transaction>> = BTreeMap::new();
    for transaction in sorted {
        by_symbol
            .entry(transaction.symbol().clone())
            .or_default()
            .push(transaction);
    }

    let mut positions = Vec::with_capacity(by_symbol.len());
    for (symbol, symbol_transactions) in by_symbol {
        let mut total_shares_bought = Decimal::ZERO;
        let mut total_shares_sold = Decimal::ZERO;
        let mut total_invested = Decimal::ZERO;
        let mut total_received = Decimal::ZERO;

        for transaction in &symbol_transactions {
            match transaction.kind() {
                TransactionKind::Buy => {
                    total_shares_bought += *transaction.quantity();
                    total_invested += transaction.total_cost();
                }
                TransactionKind::Sell => {
                    total_shares_sold += *transaction.quantity();
                    total_received += transaction.net_proceeds();
                }
            }
        }
        // not clamped: more sells than buys is surfaced, not rejected
        let shares_owned = total_shares_bought - total_shares_sold;

        let outcome = match_lots(&symbol_transactions);
        let realized_gain = outcome.realized_gain();
        let cost_basis = outcome.remaining_cost_basis();
        let remaining_quantity = outcome.remaining_quantity();
        let average_cost = if remaining_quantity.is_zero() {
            Decimal::ZERO
        } else {
            cost_basis / remaining_quantity
        };

        let current_price = prices.and_then(|map| map.get(&symbol));
        let (current_value, unrealized_gain) = match current_price {
            Some(price) if shares_owned > Decimal::ZERO => {
                let value = shares_owned * *price;
                (value, value - cost_basis)
            }
            _ => (Decimal::ZERO, Decimal::ZERO),
        };
        let total_gain = realized_gain + unrealized_gain;

        let name = symbol_transactions
            .last()
            .map(|transaction| transaction.name().clone())
            .unwrap_or_default();

        positions.push(Position::new(
            symbol,
            name,
            total_shares_bought,
            total_shares_sold,
            shares_owned,
            total_invested,
            total_received,
            realized_gain,
            average_cost,
            cost_basis,
            current_value,
            unrealized_gain,
            total_gain,
        ));
    }

    positions
}
