//! Projection engine for multi-debt payoff plans

mod state;
mod engine;
mod snapshot;
mod summary;
pub mod compare;

pub use state::{ProjectionState, WorkingDebt};
pub use engine::{ProjectionEngine, ProjectionConfig, ProjectionResult};
pub use snapshot::{MonthlySnapshot, MonthTotals, DebtMonth};
pub use summary::{PayoffSummary, PayoffOutcome, DebtPayoff};
pub use compare::{compare_strategies, budget_sweep, StrategyComparison, BudgetPoint};

use crate::debt::{Debt, PayoffStrategy};

// ============================================================================
// Projection horizons
// ============================================================================
// The debts page projects ten years; the general-purpose default is twenty.
// Either cap also bounds plans whose minimums never outpace interest.

/// Default month cap for a projection run
pub const DEFAULT_MAX_MONTHS: u32 = 240;

/// Month cap used by the debts overview
pub const DEBTS_PAGE_MAX_MONTHS: u32 = 120;

/// Project `debts` month by month, labelling months from the current calendar month.
///
/// Use [`ProjectionEngine`] with an explicit `start_month` for reproducible labels.
pub fn project(
    debts: &[Debt],
    monthly_budget: f64,
    strategy: PayoffStrategy,
    max_months: u32,
) -> Vec<MonthlySnapshot> {
    let config = ProjectionConfig {
        max_months,
        ..ProjectionConfig::new(monthly_budget, strategy)
    };
    ProjectionEngine::new(config).project(debts)
}
