//! Working balances carried between simulated months

use crate::debt::{Debt, PayoffStrategy, Prioritized, PAID_OFF_EPSILON};
use super::snapshot::DebtMonth;

/// A caller's debt paired with its simulated balance
#[derive(Debug, Clone, Copy)]
pub struct WorkingDebt<'a> {
    pub debt: &'a Debt,
    pub balance: f64,
    /// Position in the caller's list; `Custom` ordering and write-back use it
    index: usize,
}

impl WorkingDebt<'_> {
    pub fn is_active(&self) -> bool {
        self.balance > PAID_OFF_EPSILON
    }
}

impl Prioritized for WorkingDebt<'_> {
    fn balance(&self) -> f64 {
        self.balance
    }

    fn annual_rate(&self) -> f64 {
        self.debt.interest_rate_annual
    }
}

/// Simulated balances at the start of a month.
///
/// Each month produces a new state; caller debts are only ever borrowed.
#[derive(Debug, Clone)]
pub struct ProjectionState<'a> {
    debts: Vec<WorkingDebt<'a>>,
}

impl<'a> ProjectionState<'a> {
    pub fn new(debts: &'a [Debt]) -> Self {
        let debts = debts
            .iter()
            .enumerate()
            .map(|(index, debt)| WorkingDebt {
                debt,
                balance: debt.current_balance,
                index,
            })
            .collect();
        Self { debts }
    }

    /// Debts with balance left, in input order
    pub fn active(&self) -> impl Iterator<Item = &WorkingDebt<'a>> {
        self.debts.iter().filter(|d| d.is_active())
    }

    pub fn is_paid_off(&self) -> bool {
        self.active().next().is_none()
    }

    pub fn total_balance(&self) -> f64 {
        self.active().map(|d| d.balance).sum()
    }

    #[cfg(test)]
    fn balance_of(&self, id: &str) -> Option<f64> {
        self.debts.iter().find(|d| d.debt.id == id).map(|d| d.balance)
    }

    /// Simulate one month.
    ///
    /// Active debts are re-ranked every month because balances move. All
    /// debts get their minimum (capped at what is owed); whatever budget is
    /// left above the combined minimums goes to the top-ranked debt only.
    /// Returns `None` once nothing is owed.
    pub fn advance(
        &self,
        monthly_budget: f64,
        strategy: PayoffStrategy,
    ) -> Option<(Vec<DebtMonth>, ProjectionState<'a>)> {
        let mut ranked: Vec<WorkingDebt<'a>> = self.active().copied().collect();
        if ranked.is_empty() {
            return None;
        }
        strategy.order(&mut ranked);

        let min_total: f64 = ranked.iter().map(|d| d.debt.minimum_payment).sum();
        let mut extra = (monthly_budget - min_total).max(0.0);

        let mut next = self.clone();
        let mut rows = Vec::with_capacity(ranked.len());

        for working in &ranked {
            let debt = working.debt;
            let interest = working.balance * debt.monthly_rate();
            let total_owed = working.balance + interest;

            let mut payment = if total_owed < debt.minimum_payment {
                total_owed
            } else {
                debt.minimum_payment
            };
            if extra > 0.0 {
                payment = total_owed.min(payment + extra);
                extra = 0.0;
            }

            let ending_balance = (total_owed - payment).max(0.0);
            next.debts[working.index].balance = ending_balance;

            rows.push(DebtMonth {
                id: debt.id.clone(),
                name: debt.name.clone(),
                starting_balance: working.balance,
                interest,
                payment,
                ending_balance,
            });
        }

        Some((rows, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn two_debts() -> Vec<Debt> {
        vec![
            Debt::new("A", "Card A", 1000.0, 30.0, 50.0),
            Debt::new("B", "Card B", 200.0, 10.0, 20.0),
        ]
    }

    #[test]
    fn test_extra_goes_to_smallest_balance_under_snowball() {
        let debts = two_debts();
        let state = ProjectionState::new(&debts);
        let (rows, next) = state.advance(100.0, PayoffStrategy::Snowball).unwrap();

        assert_eq!(rows[0].id, "B");
        // Minimum 20 plus the 30 left over after both minimums
        assert_abs_diff_eq!(rows[0].payment, 50.0, epsilon = 1e-9);
        assert_eq!(rows[1].id, "A");
        assert_abs_diff_eq!(rows[1].payment, 50.0, epsilon = 1e-9);

        assert_abs_diff_eq!(next.balance_of("A").unwrap(), 975.0, epsilon = 1e-9);
        assert_abs_diff_eq!(next.balance_of("B").unwrap(), 200.0 + 200.0 * 0.10 / 12.0 - 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_extra_goes_to_highest_rate_under_avalanche() {
        let debts = two_debts();
        let state = ProjectionState::new(&debts);
        let (rows, _) = state.advance(100.0, PayoffStrategy::Avalanche).unwrap();

        assert_eq!(rows[0].id, "A");
        assert_abs_diff_eq!(rows[0].payment, 80.0, epsilon = 1e-9);
        assert_eq!(rows[1].id, "B");
        assert_abs_diff_eq!(rows[1].payment, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_extra_capped_at_amount_owed() {
        let debts = vec![
            Debt::new("small", "Small", 10.0, 12.0, 5.0),
            Debt::new("big", "Big", 1000.0, 12.0, 25.0),
        ];
        let state = ProjectionState::new(&debts);
        let (rows, next) = state.advance(500.0, PayoffStrategy::Snowball).unwrap();

        assert_abs_diff_eq!(rows[0].payment, 10.1, epsilon = 1e-9);
        assert_eq!(rows[0].ending_balance, 0.0);
        // Leftover extra is not passed down to the next debt
        assert_abs_diff_eq!(rows[1].payment, 25.0, epsilon = 1e-9);
        assert!(next.balance_of("small").unwrap() <= PAID_OFF_EPSILON);
    }

    #[test]
    fn test_minimum_larger_than_owed_pays_balance() {
        let debts = vec![Debt::new("a", "A", 30.0, 0.0, 50.0)];
        let state = ProjectionState::new(&debts);
        let (rows, next) = state.advance(0.0, PayoffStrategy::Custom).unwrap();

        assert_abs_diff_eq!(rows[0].payment, 30.0, epsilon = 1e-9);
        assert!(next.is_paid_off());
    }

    #[test]
    fn test_budget_below_minimums_gives_no_extra() {
        let debts = two_debts();
        let state = ProjectionState::new(&debts);
        let (rows, _) = state.advance(40.0, PayoffStrategy::Snowball).unwrap();

        assert_abs_diff_eq!(rows[0].payment, 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rows[1].payment, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_paid_off_debts_are_skipped() {
        let debts = vec![
            Debt::new("done", "Done", 0.004, 20.0, 10.0),
            Debt::new("open", "Open", 100.0, 20.0, 10.0),
        ];
        let state = ProjectionState::new(&debts);
        assert_eq!(state.active().count(), 1);

        let (rows, _) = state.advance(10.0, PayoffStrategy::Custom).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "open");
    }

    #[test]
    fn test_advance_stops_when_nothing_owed() {
        let debts = vec![Debt::new("a", "A", 0.0, 10.0, 10.0)];
        let state = ProjectionState::new(&debts);
        assert!(state.is_paid_off());
        assert!(state.advance(100.0, PayoffStrategy::Snowball).is_none());
    }

    #[test]
    fn test_caller_debts_unchanged() {
        let debts = two_debts();
        let before = debts.clone();
        let state = ProjectionState::new(&debts);
        let (_, next) = state.advance(100.0, PayoffStrategy::Snowball).unwrap();
        let _ = next.advance(100.0, PayoffStrategy::Snowball);

        assert_eq!(debts, before);
        assert_abs_diff_eq!(state.total_balance(), 1200.0, epsilon = 1e-9);
    }
}
