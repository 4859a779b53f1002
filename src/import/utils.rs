use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use rust_decimal::Decimal;

/// Parses a date or date+time field. Accepted layouts: ISO (`2024-01-31`),
/// European dotted (`31.01.2024`) and US slashed (`01/31/2024`), each with an
/// optional `HH:MM:SS` time part. Date-only values resolve to midnight.
pub fn parse_datetime(field: &str) -> Result<DateTime<Local>> {
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];

    for format in DATE_FORMATS {
        let with_time = format!("{format} %H:%M:%S");
        if let Ok(naive) = NaiveDateTime::parse_from_str(field, &with_time) {
            return Ok(Local.from_utc_datetime(&naive));
        }
        let padded = format!("{field} 00:00:00");
        if let Ok(naive) = NaiveDateTime::parse_from_str(&padded, &with_time) {
            return Ok(Local.from_utc_datetime(&naive));
        }
    }

    Err(anyhow::anyhow!("Failed to parse date '{}'", field))
}

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}
