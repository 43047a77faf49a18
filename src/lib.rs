//! Debt Payoff - projection engine for multi-debt payoff plans
//!
//! This library provides:
//! - Month-by-month amortization across several debts (snowball, avalanche, custom order)
//! - Payoff summaries and parallel strategy / budget comparisons
//! - Single-debt payment impact ("what if I paid $X/month") analysis
//! - Debt list loading and payoff plan configuration for the command-line tools

pub mod debt;
pub mod error;
pub mod impact;
pub mod plan;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use debt::{Debt, PayoffStrategy};
pub use error::PayoffError;
pub use impact::{impact, suggested_payments, PaymentImpact, PayoffEstimate, SuggestedPayments};
pub use plan::PayoffPlan;
pub use projection::{project, MonthlySnapshot, PayoffSummary, ProjectionConfig, ProjectionEngine};
