use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use csv::{Reader, StringRecord};
use log::warn;
use rust_decimal::Decimal;

use crate::engine::check_transaction;
use crate::import::utils::{parse_datetime, parse_decimal};
use crate::models::{Transaction, TransactionKind};

/// Reads transactions from a CSV file.
///
/// Column order is free; headers are matched case-insensitively. A price can
/// come from a `pricePerShare` column or be derived from `totalPrice` divided
/// by quantity. Rows with an unknown type or values that fail validation are
/// skipped with a warning rather than failing the whole import.
pub fn import_transactions(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let mut reader = Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file at path: {}", path.display()))?;

    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let mut transactions = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        // header occupies line 1
        let line = row_idx + 2;
        let record =
            record.with_context(|| format!("Failed to read CSV record at line {}", line))?;
        match parse_row(&record, &columns, transactions.len() as i64 + 1) {
            Ok(transaction) => transactions.push(transaction),
            Err(err) => warn!("Skipping CSV line {}: {:#}", line, err),
        }
    }

    Ok(transactions)
}

#[derive(Debug, Default)]
struct ColumnMap {
    symbol: Option<usize>,
    name: Option<usize>,
    kind: Option<usize>,
    quantity: Option<usize>,
    unit_price: Option<usize>,
    total_price: Option<usize>,
    date: Option<usize>,
    fees: Option<usize>,
    notes: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut map = ColumnMap::default();
        for (index, header) in headers.iter().enumerate() {
            let normalized = header
                .trim()
                .to_ascii_lowercase()
                .replace(['_', '-', ' '], "");
            match normalized.as_str() {
                "symbol" | "ticker" => map.symbol = Some(index),
                "stockname" | "name" => map.name = Some(index),
                "type" | "kind" | "transactiontype" => map.kind = Some(index),
                "quantity" | "shares" => map.quantity = Some(index),
                "pricepershare" | "unitprice" | "price" => map.unit_price = Some(index),
                "totalprice" | "amount" => map.total_price = Some(index),
                "date" | "timestamp" => map.date = Some(index),
                "fees" | "fee" => map.fees = Some(index),
                "notes" | "note" => map.notes = Some(index),
                _ => {}
            }
        }

        for (name, index) in [
            ("symbol", map.symbol),
            ("type", map.kind),
            ("quantity", map.quantity),
            ("date", map.date),
        ] {
            if index.is_none() {
                bail!("Missing required column '{}'", name);
            }
        }
        if map.unit_price.is_none() && map.total_price.is_none() {
            bail!("Missing price column: need 'pricePerShare' or 'totalPrice'");
        }

        Ok(map)
    }
}

fn parse_row(record: &StringRecord, columns: &ColumnMap, id: i64) -> Result<Transaction> {
    let field =
        |index: Option<usize>| index.and_then(|i| record.get(i)).unwrap_or("").trim();

    let symbol = field(columns.symbol);
    if symbol.is_empty() {
        bail!("empty symbol");
    }
    let kind = TransactionKind::from_str(field(columns.kind))
        .map_err(|_| anyhow!("unknown transaction type '{}'", field(columns.kind)))?;
    let quantity = parse_decimal(field(columns.quantity), "quantity")?;

    let unit_price = match field(columns.unit_price) {
        "" => {
            let total = parse_decimal(field(columns.total_price), "totalPrice")?;
            if quantity.is_zero() {
                bail!("totalPrice given with zero quantity");
            }
            total / quantity
        }
        raw => parse_decimal(raw, "pricePerShare")?,
    };

    let timestamp = parse_datetime(field(columns.date))?;
    let fees = match field(columns.fees) {
        "" => Decimal::ZERO,
        raw => parse_decimal(raw, "fees")?,
    };
    let notes = match field(columns.notes) {
        "" => None,
        raw => Some(raw.to_string()),
    };

    let transaction = Transaction::new(
        id,
        symbol.to_string(),
        field(columns.name).to_string(),
        kind,
        quantity,
        unit_price,
        timestamp,
        fees,
        notes,
    );
    check_transaction(&transaction)?;

    Ok(transaction)
}
