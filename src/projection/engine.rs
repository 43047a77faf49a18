//! Drives the month-by-month payoff simulation

use super::snapshot::{MonthTotals, MonthlySnapshot};
use super::state::ProjectionState;
use super::summary::PayoffSummary;
use super::DEFAULT_MAX_MONTHS;
use crate::debt::{Debt, PayoffStrategy};
use chrono::{Datelike, Local, Months, NaiveDate};
use log::{debug, warn};

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Total paid across all debts each month. Anything above the combined
    /// minimums is concentrated on the top-priority debt; a budget below
    /// the minimums (including a negative one) simply leaves no extra.
    pub monthly_budget: f64,
    pub strategy: PayoffStrategy,
    /// Hard cap on simulated months
    pub max_months: u32,
    /// Calendar month of the first snapshot (normalized to the 1st)
    pub start_month: NaiveDate,
}

impl ProjectionConfig {
    /// Config starting at the current calendar month with the default cap
    pub fn new(monthly_budget: f64, strategy: PayoffStrategy) -> Self {
        Self {
            monthly_budget,
            strategy,
            max_months: DEFAULT_MAX_MONTHS,
            start_month: current_month(),
        }
    }

    pub fn with_start_month(mut self, start: NaiveDate) -> Self {
        self.start_month = first_of_month(start);
        self
    }
}

/// Result of a projection run
#[derive(Debug, Clone)]
pub struct ProjectionResult {
    pub snapshots: Vec<MonthlySnapshot>,
    pub summary: PayoffSummary,
}

/// Payoff projection engine
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Simulate until every debt is paid or `max_months` snapshots exist.
    ///
    /// A sequence that reaches `max_months` with balance outstanding means the
    /// plan does not pay off within the horizon.
    pub fn project(&self, debts: &[Debt]) -> Vec<MonthlySnapshot> {
        let config = &self.config;
        let mut snapshots = Vec::new();
        let mut state = ProjectionState::new(debts);
        let mut month = first_of_month(config.start_month);

        for month_index in 0..config.max_months {
            let Some((per_debt, next)) = state.advance(config.monthly_budget, config.strategy) else {
                break;
            };

            let totals = MonthTotals::from_rows(&per_debt);
            debug!(
                "month {} ({}): start={:.2} interest={:.2} payment={:.2} end={:.2}",
                month_index,
                month.format("%b %Y"),
                totals.starting_balance,
                totals.interest,
                totals.payment,
                totals.ending_balance,
            );

            snapshots.push(MonthlySnapshot {
                month_index,
                month_label: month_label(month),
                month,
                totals,
                per_debt,
            });

            state = next;
            month = month.checked_add_months(Months::new(1)).unwrap_or(month);
        }

        if !state.is_paid_off() {
            warn!(
                "{} strategy with budget {:.2} leaves {:.2} owed after {} months",
                config.strategy,
                config.monthly_budget,
                state.total_balance(),
                config.max_months,
            );
        }

        snapshots
    }

    /// Project and summarize in one pass
    pub fn run(&self, debts: &[Debt]) -> ProjectionResult {
        let snapshots = self.project(debts);
        let summary = PayoffSummary::from_snapshots(&snapshots);
        ProjectionResult { snapshots, summary }
    }
}

/// Short month label, e.g. "Jan 2026"
pub(crate) fn month_label(month: NaiveDate) -> String {
    month.format("%b %Y").to_string()
}

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn current_month() -> NaiveDate {
    first_of_month(Local::now().date_naive())
}
