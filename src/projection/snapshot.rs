//! Month-by-month projection output

use chrono::NaiveDate;
use serde::Serialize;

/// One debt's figures for a simulated month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtMonth {
    pub id: String,
    pub name: String,
    /// Balance before this month's interest and payment
    pub starting_balance: f64,
    pub interest: f64,
    pub payment: f64,
    pub ending_balance: f64,
}

/// Figures summed across all debts active in a month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthTotals {
    pub starting_balance: f64,
    pub interest: f64,
    pub payment: f64,
    pub ending_balance: f64,
}

impl MonthTotals {
    pub fn from_rows(rows: &[DebtMonth]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            starting_balance: acc.starting_balance + row.starting_balance,
            interest: acc.interest + row.interest,
            payment: acc.payment + row.payment,
            ending_balance: acc.ending_balance + row.ending_balance,
        })
    }
}

/// Outcome of one simulated month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySnapshot {
    /// 0-based month offset from the projection start
    pub month_index: u32,
    /// Display label, e.g. "Jan 2026"
    pub month_label: String,
    /// First day of the simulated calendar month
    pub month: NaiveDate,
    pub totals: MonthTotals,
    /// Active debts in priority order
    pub per_debt: Vec<DebtMonth>,
}

impl MonthlySnapshot {
    pub fn debt(&self, id: &str) -> Option<&DebtMonth> {
        self.per_debt.iter().find(|row| row.id == id)
    }
}
