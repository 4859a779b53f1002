mod portfolio;

pub mod fixtures {
    use chrono::{DateTime, Local, TimeZone};
    use rust_decimal::Decimal;

    use crate::models::{Transaction, TransactionKind};

    pub fn day(day_of_month: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 1, day_of_month, 0, 0, 0)
            .unwrap()
    }

    pub fn tx(
        id: i64,
        symbol: &str,
        kind: TransactionKind,
        quantity: Decimal,
        unit_price: Decimal,
        fees: Decimal,
        day_of_month: u32,
    ) -> Transaction {
        Transaction::new(
            id,
            symbol.to_string(),
            format!("{} Inc.", symbol),
            kind,
            quantity,
            unit_price,
            day(day_of_month),
            fees,
            None,
        )
    }
}
