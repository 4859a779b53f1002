use std::collections::VecDeque;

use chrono::{DateTime, Local};
use derive_getters::Getters;
use rust_decimal::Decimal;

use crate::models::{OpenLot, RealizedSale, Transaction, TransactionKind};

/// Result of matching one symbol's transaction history: realized sales in the
/// order they resolved, and the open lots left over, oldest first.
#[derive(Clone, Debug, Default, Getters)]
pub struct MatchOutcome {
    realized: Vec<RealizedSale>,
    open_lots: VecDeque<OpenLot>,
}

impl MatchOutcome {
    pub fn realized_gain(&self) -> Decimal {
        self.realized.iter().map(|sale| *sale.gain_loss()).sum()
    }

    /// Cost basis of the remaining open lots, fee shares included.
    pub fn remaining_cost_basis(&self) -> Decimal {
        self.open_lots.iter().map(OpenLot::remaining_cost).sum()
    }

    pub fn remaining_quantity(&self) -> Decimal {
        self.open_lots.iter().map(|lot| *lot.remaining_quantity()).sum()
    }
}

/// A sell that could not (yet) be matched against any open lot, either
/// because it was recorded before its covering buy or because the symbol's
/// history contains more sells than buys.
#[derive(Clone, Debug)]
struct PendingSell {
    symbol: String,
    quantity: Decimal,
    outstanding: Decimal,
    unit_price: Decimal,
    fees: Decimal,
    cost_basis: Decimal,
    timestamp: DateTime<Local>,
}

/// Runs FIFO lot matching over the transactions of a single symbol.
///
/// Transactions are sorted by timestamp on a copy (ties keep input order, and
/// the caller's slice is never reordered). Buys append open lots and then
/// resolve any pending sells oldest-first; sells consume lots from the front
/// of the queue, each consumed share carrying its lot's proportional fee.
/// Sells left uncovered at the end of the stream are priced at the average
/// cost of every buy in the history, fees included; with no buys at all they
/// realize zero gain because the shares cannot be priced, a documented
/// approximation rather than a dropped record.
pub fn match_lots(transactions: &[Transaction]) -> MatchOutcome {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| a.timestamp().cmp(b.timestamp()));

    let mut open_lots: VecDeque<OpenLot> = VecDeque::new();
    let mut pending: VecDeque<PendingSell> = VecDeque::new();
    let mut realized: Vec<RealizedSale> = Vec::new();

    for transaction in &sorted {
        let quantity = *transaction.quantity();
        if quantity <= Decimal::ZERO {
            // degrade on records the validation layer should have rejected
            continue;
        }
        match transaction.kind() {
            TransactionKind::Buy => {
                open_lots.push_back(OpenLot::new(
                    quantity,
                    *transaction.unit_price(),
                    *transaction.fees(),
                    quantity,
                ));
                resolve_pending(&mut pending, &mut open_lots, &mut realized);
            }
            TransactionKind::Sell => {
                let (matched, cost_basis) = drain_front(&mut open_lots, quantity);
                if matched == quantity {
                    let proceeds = quantity * *transaction.unit_price() - *transaction.fees();
                    realized.push(RealizedSale::new(
                        transaction.symbol().clone(),
                        quantity,
                        proceeds,
                        cost_basis,
                        proceeds - cost_basis,
                        *transaction.timestamp(),
                    ));
                } else {
                    let unmatched = quantity - matched;
                    if matched > Decimal::ZERO {
                        let fee_share = *transaction.fees() * (matched / quantity);
                        let proceeds = matched * *transaction.unit_price() - fee_share;
                        realized.push(RealizedSale::new(
                            transaction.symbol().clone(),
                            matched,
                            proceeds,
                            cost_basis,
                            proceeds - cost_basis,
                            *transaction.timestamp(),
                        ));
                    }
                    pending.push_back(PendingSell {
                        symbol: transaction.symbol().clone(),
                        quantity: unmatched,
                        outstanding: unmatched,
                        unit_price: *transaction.unit_price(),
                        fees: *transaction.fees() * (unmatched / quantity),
                        cost_basis: Decimal::ZERO,
                        timestamp: *transaction.timestamp(),
                    });
                }
            }
        }
    }

    if !pending.is_empty() {
        let mut total_buy_shares = Decimal::ZERO;
        let mut total_buy_cost = Decimal::ZERO;
        for transaction in &sorted {
            if *transaction.kind() == TransactionKind::Buy && *transaction.quantity() > Decimal::ZERO
            {
                total_buy_shares += *transaction.quantity();
                total_buy_cost += transaction.total_cost();
            }
        }
        for sell in pending.drain(..) {
            let proceeds = sell.quantity * sell.unit_price - sell.fees;
            let cost_basis = if total_buy_shares.is_zero() {
                proceeds
            } else {
                sell.cost_basis + sell.outstanding * (total_buy_cost / total_buy_shares)
            };
            realized.push(RealizedSale::new(
                sell.symbol,
                sell.quantity,
                proceeds,
                cost_basis,
                proceeds - cost_basis,
                sell.timestamp,
            ));
        }
    }

    MatchOutcome {
        realized,
        open_lots,
    }
}

/// Consumes up to `want` shares from the front of the lot queue. Returns the
/// quantity actually matched and the cost basis it carried.
fn drain_front(open_lots: &mut VecDeque<OpenLot>, want: Decimal) -> (Decimal, Decimal) {
    let mut matched = Decimal::ZERO;
    let mut cost_basis = Decimal::ZERO;
    while matched < want {
        let Some(front) = open_lots.front_mut() else {
            break;
        };
        let take = (want - matched).min(*front.remaining_quantity());
        cost_basis += front.consume(take);
        matched += take;
        if front.is_exhausted() {
            open_lots.pop_front();
        }
    }
    (matched, cost_basis)
}

/// Matches outstanding pending sells against newly available lots, oldest
/// pending sell first. A pending sell only realizes once fully covered.
fn resolve_pending(
    pending: &mut VecDeque<PendingSell>,
    open_lots: &mut VecDeque<OpenLot>,
    realized: &mut Vec<RealizedSale>,
) {
    loop {
        let Some(front) = pending.front_mut() else {
            break;
        };
        let (matched, cost_basis) = drain_front(open_lots, front.outstanding);
        front.outstanding -= matched;
        front.cost_basis += cost_basis;
        if !front.outstanding.is_zero() {
            break;
        }
        if let Some(sell) = pending.pop_front() {
            let proceeds = sell.quantity * sell.unit_price - sell.fees;
            realized.push(RealizedSale::new(
                sell.symbol,
                sell.quantity,
                proceeds,
                sell.cost_basis,
                proceeds - sell.cost_basis,
                sell.timestamp,
            ));
        }
    }
}
