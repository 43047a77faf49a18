//! Headline figures derived from a snapshot sequence

use super::snapshot::MonthlySnapshot;
use crate::debt::PAID_OFF_EPSILON;
use chrono::NaiveDate;
use serde::Serialize;

/// Whether a plan clears every debt within the simulated horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayoffOutcome {
    /// Nothing was owed to begin with
    NothingOwed,
    /// All debts cleared; `debt_free_month` is the month of the final payment
    DebtFree { months: u32, debt_free_month: NaiveDate },
    /// The month cap was hit with balance outstanding
    NotPaidOff { months_simulated: u32, remaining_balance: f64 },
}

/// When a single debt is retired
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtPayoff {
    pub id: String,
    pub name: String,
    /// Index of the month with the final payment, `None` if never cleared
    pub month_index: Option<u32>,
    pub month: Option<NaiveDate>,
    pub interest_paid: f64,
}

/// Summary of a projection run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoffSummary {
    pub outcome: PayoffOutcome,
    pub total_interest: f64,
    pub total_paid: f64,
    /// Debts in the order they are retired; uncleared debts last
    pub debts: Vec<DebtPayoff>,
}

impl PayoffSummary {
    pub fn from_snapshots(snapshots: &[MonthlySnapshot]) -> Self {
        let Some(last) = snapshots.last() else {
            return Self {
                outcome: PayoffOutcome::NothingOwed,
                total_interest: 0.0,
                total_paid: 0.0,
                debts: Vec::new(),
            };
        };

        let total_interest = snapshots.iter().map(|s| s.totals.interest).sum();
        let total_paid = snapshots.iter().map(|s| s.totals.payment).sum();

        let cleared = last.per_debt.iter().all(|row| row.ending_balance <= PAID_OFF_EPSILON);
        let months = snapshots.len() as u32;
        let outcome = if cleared {
            PayoffOutcome::DebtFree {
                months,
                debt_free_month: last.month,
            }
        } else {
            PayoffOutcome::NotPaidOff {
                months_simulated: months,
                remaining_balance: last.totals.ending_balance,
            }
        };

        Self {
            outcome,
            total_interest,
            total_paid,
            debts: debt_payoffs(snapshots),
        }
    }

    pub fn is_debt_free(&self) -> bool {
        !matches!(self.outcome, PayoffOutcome::NotPaidOff { .. })
    }

    pub fn months_to_debt_free(&self) -> Option<u32> {
        match self.outcome {
            PayoffOutcome::NothingOwed => Some(0),
            PayoffOutcome::DebtFree { months, .. } => Some(months),
            PayoffOutcome::NotPaidOff { .. } => None,
        }
    }

    pub fn debt(&self, id: &str) -> Option<&DebtPayoff> {
        self.debts.iter().find(|d| d.id == id)
    }
}

fn debt_payoffs(snapshots: &[MonthlySnapshot]) -> Vec<DebtPayoff> {
    let mut payoffs: Vec<DebtPayoff> = Vec::new();

    for snapshot in snapshots {
        for row in &snapshot.per_debt {
            let index = match payoffs.iter().position(|p| p.id == row.id) {
                Some(index) => index,
                None => {
                    payoffs.push(DebtPayoff {
                        id: row.id.clone(),
                        name: row.name.clone(),
                        month_index: None,
                        month: None,
                        interest_paid: 0.0,
                    });
                    payoffs.len() - 1
                }
            };

            let payoff = &mut payoffs[index];
            payoff.interest_paid += row.interest;
            if payoff.month_index.is_none() && row.ending_balance <= PAID_OFF_EPSILON {
                payoff.month_index = Some(snapshot.month_index);
                payoff.month = Some(snapshot.month);
            }
        }
    }

    // Stable: ties keep first-seen (priority) order
    payoffs.sort_by_key(|p| p.month_index.unwrap_or(u32::MAX));
    payoffs
}
