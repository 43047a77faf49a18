//! Debt data structures

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Balances at or below half a cent count as paid off.
/// Keeps float residue from holding a debt in the active set forever.
pub const PAID_OFF_EPSILON: f64 = 0.005;

/// Convert an annual percentage rate (33.99 = 33.99%) to a monthly decimal rate
pub fn monthly_rate(apr_percent: f64) -> f64 {
    apr_percent / 100.0 / 12.0
}

/// One month of simple interest on `balance` at `apr_percent`
pub fn monthly_interest(balance: f64, apr_percent: f64) -> f64 {
    balance * monthly_rate(apr_percent)
}

/// One outstanding liability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    pub name: String,
    /// Amount currently owed
    pub current_balance: f64,
    /// Informational only, never consulted by the projector
    #[serde(default)]
    pub original_balance: Option<f64>,
    /// Annual rate in percent
    pub interest_rate_annual: f64,
    pub minimum_payment: f64,
    /// Day of month the payment is due (1-31)
    #[serde(default = "default_due_day")]
    pub due_day: u8,
    #[serde(default)]
    pub auto_pay: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_due_day() -> u8 { 1 }

impl Debt {
    /// Build a debt with the fields the projector consumes; informational fields are left empty
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        current_balance: f64,
        interest_rate_annual: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_balance,
            original_balance: None,
            interest_rate_annual,
            minimum_payment,
            due_day: default_due_day(),
            auto_pay: None,
            notes: None,
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.interest_rate_annual)
    }

    /// Interest accrued over one month at the current balance
    pub fn monthly_interest(&self) -> f64 {
        monthly_interest(self.current_balance, self.interest_rate_annual)
    }

    pub fn is_paid_off(&self) -> bool {
        self.current_balance <= PAID_OFF_EPSILON
    }
}

/// Anything a payoff strategy can rank
pub trait Prioritized {
    fn balance(&self) -> f64;
    fn annual_rate(&self) -> f64;
}

impl Prioritized for Debt {
    fn balance(&self) -> f64 {
        self.current_balance
    }

    fn annual_rate(&self) -> f64 {
        self.interest_rate_annual
    }
}

fn smallest_balance_first<T: Prioritized>(a: &T, b: &T) -> Ordering {
    a.balance().total_cmp(&b.balance())
}

fn highest_rate_first<T: Prioritized>(a: &T, b: &T) -> Ordering {
    b.annual_rate().total_cmp(&a.annual_rate())
}

/// Order in which surplus budget is concentrated on debts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// Smallest balance first
    #[default]
    Snowball,
    /// Highest interest rate first
    Avalanche,
    /// Input order, unchanged
    Custom,
}

impl PayoffStrategy {
    pub const ALL: [PayoffStrategy; 3] = [
        PayoffStrategy::Snowball,
        PayoffStrategy::Avalanche,
        PayoffStrategy::Custom,
    ];

    /// Comparator for this strategy, `None` when input order is kept
    fn comparator<T: Prioritized>(self) -> Option<fn(&T, &T) -> Ordering> {
        let cmp: fn(&T, &T) -> Ordering = match self {
            PayoffStrategy::Snowball => smallest_balance_first,
            PayoffStrategy::Avalanche => highest_rate_first,
            PayoffStrategy::Custom => return None,
        };
        Some(cmp)
    }

    /// Sort `items` into priority order.
    /// The sort is stable, so ties keep their input order.
    pub fn order<T: Prioritized>(self, items: &mut [T]) {
        if let Some(cmp) = self.comparator::<T>() {
            items.sort_by(cmp);
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PayoffStrategy::Snowball => "snowball",
            PayoffStrategy::Avalanche => "avalanche",
            PayoffStrategy::Custom => "custom",
        }
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoffStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snowball" => Ok(PayoffStrategy::Snowball),
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            "custom" => Ok(PayoffStrategy::Custom),
            other => Err(format!("unknown payoff strategy '{}'", other)),
        }
    }
}
