pub mod csv;
pub mod utils;

pub use csv::import_transactions;
