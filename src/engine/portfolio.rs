use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::engine::positions::calculate_positions;
use crate::models::{PortfolioStats, Transaction, TransactionKind};

/// Sums all positions into one [`PortfolioStats`].
///
/// With a price map supplied, portfolio current value is the sum of the
/// per-position current values. Without one, each held symbol is marked at
/// its most recent buy price as a best-effort proxy; unrealized gain stays
/// zero on that path, since a stale buy price is no basis for a gain figure.
pub fn calculate_portfolio(
    transactions: &[Transaction],
    prices: Option<&HashMap<String, Decimal>>,
) -> PortfolioStats {
    let positions = calculate_positions(transactions, prices);

    let mut total_invested = Decimal::ZERO;
    let mut total_received = Decimal::ZERO;
    let mut realized_gain = Decimal::ZERO;
    let mut unrealized_gain = Decimal::ZERO;
    for position in &positions {
        total_invested += *position.total_invested();
        total_received += *position.total_received();
        realized_gain += *position.realized_gain();
        if *position.shares_owned() > Decimal::ZERO {
            unrealized_gain += *position.unrealized_gain();
        }
    }

    let current_value: Decimal = if prices.is_some() {
        positions
            .iter()
            .map(|position| *position.current_value())
            .sum()
    } else {
        let last_buy = last_buy_prices(transactions);
        positions
            .iter()
            .filter(|position| *position.shares_owned() > Decimal::ZERO)
            .map(|position| match last_buy.get(position.symbol()) {
                Some(price) => *position.shares_owned() * *price,
                None => Decimal::ZERO,
            })
            .sum()
    };

    let total_gain = realized_gain + unrealized_gain;
    let gain_loss_percent = if total_invested > Decimal::ZERO {
        total_gain / total_invested * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let stocks_with_holdings = positions
        .iter()
        .filter(|position| *position.shares_owned() > Decimal::ZERO)
        .count();

    PortfolioStats::new(
        total_invested,
        total_received,
        realized_gain,
        current_value,
        unrealized_gain,
        total_gain,
        gain_loss_percent,
        positions.len(),
        stocks_with_holdings,
        transactions.len(),
    )
}

/// Price of the most recent buy per symbol, ties resolved by input order.
fn last_buy_prices(transactions: &[Transaction]) -> HashMap<String, Decimal> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| a.timestamp().cmp(b.timestamp()));

    let mut prices = HashMap::new();
    for transaction in &sorted {
        if *transaction.kind() == TransactionKind::Buy {
            prices.insert(transaction.symbol().clone(), *transaction.unit_price());
        }
    }
    prices
}
