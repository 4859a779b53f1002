use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Shares from one buy transaction not yet matched against a sale.
///
/// The buy's fee is spread evenly over its shares, so the cost of whatever
/// part of the lot a sale consumes carries `total_fees / original_quantity`
/// per share and the fee stays conserved when the lot is split across
/// several sells.
#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct OpenLot {
    remaining_quantity: Decimal,
    unit_price: Decimal,
    total_fees: Decimal,
    original_quantity: Decimal,
}

impl OpenLot {
    pub fn cost_per_share(&self) -> Decimal {
        if self.original_quantity.is_zero() {
            return self.unit_price;
        }
        self.unit_price + self.total_fees / self.original_quantity
    }

    /// Cost basis of the unsold remainder, fee share included.
    pub fn remaining_cost(&self) -> Decimal {
        self.remaining_quantity * self.cost_per_share()
    }

    /// Removes `shares` from the lot and returns the cost basis consumed.
    /// Callers must not take more than `remaining_quantity`.
    pub(crate) fn consume(&mut self, shares: Decimal) -> Decimal {
        self.remaining_quantity -= shares;
        shares * self.cost_per_share()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_quantity.is_zero()
    }
}
