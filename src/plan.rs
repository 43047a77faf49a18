//! Payoff plan configuration
//!
//! A plan bundles the user's budget and strategy choice. Plans are read from
//! JSON; every field has a default so partial files are accepted.

use crate::debt::PayoffStrategy;
use crate::error::{PayoffError, Result};
use crate::projection::{ProjectionConfig, DEBTS_PAGE_MAX_MONTHS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Budget and strategy for a payoff projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffPlan {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub strategy: PayoffStrategy,

    /// Total paid toward all debts each month
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: f64,

    /// First projected month; the current month when absent
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default = "default_max_months")]
    pub max_months: u32,
}

fn default_name() -> String { "My plan".to_string() }
fn default_monthly_budget() -> f64 { 250.0 }
fn default_max_months() -> u32 { DEBTS_PAGE_MAX_MONTHS }

impl Default for PayoffPlan {
    fn default() -> Self {
        Self {
            name: default_name(),
            strategy: PayoffStrategy::default(),
            monthly_budget: default_monthly_budget(),
            start_date: None,
            max_months: default_max_months(),
        }
    }
}

impl PayoffPlan {
    /// Load and validate a plan from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let plan: PayoffPlan = serde_json::from_reader(reader)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Rejects negative budgets; the projector alone would clamp them to zero extra.
    pub fn validate(&self) -> Result<()> {
        if !self.monthly_budget.is_finite() || self.monthly_budget < 0.0 {
            return Err(PayoffError::InvalidPlan(format!(
                "monthly_budget must be a non-negative amount, got {}",
                self.monthly_budget
            )));
        }
        if self.max_months == 0 {
            return Err(PayoffError::InvalidPlan("max_months must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn projection_config(&self) -> ProjectionConfig {
        let config = ProjectionConfig {
            max_months: self.max_months,
            ..ProjectionConfig::new(self.monthly_budget, self.strategy)
        };
        match self.start_date {
            Some(start) => config.with_start_month(start),
            None => config,
        }
    }
}
