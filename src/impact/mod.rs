//! Single-debt payment impact analysis
//!
//! Answers "what if I paid $X/month on this debt" independently of the
//! multi-debt projection, cheap enough to recompute on every slider move.

mod calculator;
mod suggested;

pub use calculator::{impact, MinimumPaymentBaseline, PaymentImpact, PayoffEstimate};
pub use suggested::{amortized_payment, suggested_payments, SuggestedPayments};

/// Iteration cap for the single-debt payoff loops
pub const IMPACT_MAX_MONTHS: u32 = 1000;

/// Term for the recommended payment suggestion
pub const RECOMMENDED_TERM_MONTHS: u32 = 24;

/// Term for the aggressive payment suggestion
pub const AGGRESSIVE_TERM_MONTHS: u32 = 12;

/// Savings above this are highlighted to the user
pub const SIGNIFICANT_SAVINGS: f64 = 50.0;
