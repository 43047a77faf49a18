//! Side-by-side projections across strategies and budgets
//!
//! Each run owns its working balances, so runs fan out across rayon's pool.

use super::engine::{ProjectionConfig, ProjectionEngine};
use super::summary::PayoffSummary;
use crate::debt::{Debt, PayoffStrategy};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StrategyComparison {
    pub strategy: PayoffStrategy,
    pub summary: PayoffSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetPoint {
    pub monthly_budget: f64,
    pub summary: PayoffSummary,
}

/// Run every strategy with otherwise identical settings.
/// Results follow `PayoffStrategy::ALL` order.
pub fn compare_strategies(debts: &[Debt], config: &ProjectionConfig) -> Vec<StrategyComparison> {
    PayoffStrategy::ALL
        .as_slice()
        .par_iter()
        .map(|&strategy| {
            let engine = ProjectionEngine::new(ProjectionConfig {
                strategy,
                ..config.clone()
            });
            StrategyComparison {
                strategy,
                summary: engine.run(debts).summary,
            }
        })
        .collect()
}

/// Run the configured strategy once per budget, keeping input order
pub fn budget_sweep(debts: &[Debt], config: &ProjectionConfig, budgets: &[f64]) -> Vec<BudgetPoint> {
    budgets
        .par_iter()
        .map(|&monthly_budget| {
            let engine = ProjectionEngine::new(ProjectionConfig {
                monthly_budget,
                ..config.clone()
            });
            BudgetPoint {
                monthly_budget,
                summary: engine.run(debts).summary,
            }
        })
        .collect()
}

/// Debt-free comparison with the least interest; ties go to the earlier entry
pub fn cheapest(comparisons: &[StrategyComparison]) -> Option<&StrategyComparison> {
    comparisons
        .iter()
        .filter(|c| c.summary.is_debt_free())
        .min_by(|a, b| a.summary.total_interest.total_cmp(&b.summary.total_interest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config(budget: f64) -> ProjectionConfig {
        ProjectionConfig::new(budget, PayoffStrategy::Snowball)
            .with_start_month(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
    }

    fn two_debts() -> Vec<Debt> {
        vec![
            Debt::new("A", "Card A", 1000.0, 30.0, 50.0),
            Debt::new("B", "Card B", 200.0, 10.0, 20.0),
        ]
    }

    #[test]
    fn test_compare_strategies_order_and_values() {
        let comparisons = compare_strategies(&two_debts(), &config(100.0));
        let strategies: Vec<PayoffStrategy> = comparisons.iter().map(|c| c.strategy).collect();
        assert_eq!(strategies, PayoffStrategy::ALL.to_vec());

        let snowball = &comparisons[0].summary;
        let avalanche = &comparisons[1].summary;
        assert!(avalanche.total_interest < snowball.total_interest);
    }

    #[test]
    fn test_cheapest_is_avalanche() {
        let comparisons = compare_strategies(&two_debts(), &config(100.0));
        // Custom order here matches avalanche; the earlier entry wins the tie
        assert_eq!(cheapest(&comparisons).unwrap().strategy, PayoffStrategy::Avalanche);
    }

    #[test]
    fn test_cheapest_ignores_plans_that_never_finish() {
        let debts = vec![Debt::new("a", "A", 10_000.0, 24.0, 150.0)];
        let comparisons = compare_strategies(&debts, &config(150.0));
        assert!(cheapest(&comparisons).is_none());
    }

    #[test]
    fn test_budget_sweep_keeps_input_order() {
        let budgets = [300.0, 70.0, 150.0];
        let points = budget_sweep(&two_debts(), &config(0.0), &budgets);

        let swept: Vec<f64> = points.iter().map(|p| p.monthly_budget).collect();
        assert_eq!(swept, budgets.to_vec());

        let months = |i: usize| points[i].summary.months_to_debt_free().unwrap();
        assert!(months(0) < months(2));
        assert!(months(2) < months(1));
    }
}
