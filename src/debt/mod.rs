//! Debt records, payoff strategies and debt list loading

mod data;
pub mod loader;

pub use data::{monthly_interest, monthly_rate, Debt, PayoffStrategy, Prioritized, PAID_OFF_EPSILON};
pub use loader::{load_debts, load_debts_from_csv_reader, load_debts_from_json_reader, load_sample_debts, validate_debts};
