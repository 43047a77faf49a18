//! Payoff trajectory for one debt at a fixed monthly payment

use super::{IMPACT_MAX_MONTHS, SIGNIFICANT_SAVINGS};
use crate::debt::Debt;
use chrono::{Months, NaiveDate};
use serde::Serialize;

/// Where a fixed payment leads
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayoffEstimate {
    PaysOff { months: u32, total_interest: f64 },
    /// Payment does not outrun interest, is not a finite amount, or the debt
    /// outlives the iteration cap
    NeverPaysOff,
}

impl PayoffEstimate {
    pub fn months(&self) -> Option<u32> {
        match *self {
            PayoffEstimate::PaysOff { months, .. } => Some(months),
            PayoffEstimate::NeverPaysOff => None,
        }
    }

    pub fn total_interest(&self) -> Option<f64> {
        match *self {
            PayoffEstimate::PaysOff { total_interest, .. } => Some(total_interest),
            PayoffEstimate::NeverPaysOff => None,
        }
    }
}

/// Trajectory at the debt's minimum payment.
///
/// The loop stops as soon as the minimum no longer covers the month's
/// interest, so `months`/`total_interest` then cover only the months
/// simulated and `pays_off` is false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinimumPaymentBaseline {
    pub months: u32,
    pub total_interest: f64,
    pub pays_off: bool,
}

/// Effect of paying `payment` every month on one debt
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentImpact {
    pub payment: f64,
    /// Interest accrued this month at the current balance
    pub monthly_interest: f64,
    pub estimate: PayoffEstimate,
    pub baseline: MinimumPaymentBaseline,
    /// Baseline interest minus interest at `payment`; negative when paying
    /// less than the minimum. `None` when `payment` never pays the debt off.
    pub interest_saved: Option<f64>,
}

impl PaymentImpact {
    /// Calendar month of the final payment, counting from `start`
    pub fn payoff_month(&self, start: NaiveDate) -> Option<NaiveDate> {
        let months = self.estimate.months()?;
        start.checked_add_months(Months::new(months))
    }

    pub fn has_significant_savings(&self) -> bool {
        self.interest_saved.is_some_and(|saved| saved > SIGNIFICANT_SAVINGS)
    }
}

/// Evaluate a hypothetical fixed monthly payment against `debt`
pub fn impact(debt: &Debt, payment: f64) -> PaymentImpact {
    let monthly_rate = debt.monthly_rate();
    let monthly_interest = debt.current_balance * monthly_rate;

    let estimate = if debt.is_paid_off() {
        PayoffEstimate::PaysOff { months: 0, total_interest: 0.0 }
    } else if !payment.is_finite() || payment <= monthly_interest {
        PayoffEstimate::NeverPaysOff
    } else {
        fixed_payment_trajectory(debt.current_balance, monthly_rate, payment)
    };

    let baseline = minimum_payment_baseline(debt.current_balance, monthly_rate, debt.minimum_payment);

    let interest_saved = estimate
        .total_interest()
        .map(|total_interest| baseline.total_interest - total_interest);

    PaymentImpact {
        payment,
        monthly_interest,
        estimate,
        baseline,
        interest_saved,
    }
}

fn fixed_payment_trajectory(balance: f64, monthly_rate: f64, payment: f64) -> PayoffEstimate {
    let mut remaining = balance;
    let mut months = 0u32;
    let mut total_interest = 0.0;

    while remaining > 0.0 && months < IMPACT_MAX_MONTHS {
        let interest = remaining * monthly_rate;
        remaining -= payment - interest;
        total_interest += interest;
        months += 1;
    }

    if remaining > 0.0 {
        PayoffEstimate::NeverPaysOff
    } else {
        PayoffEstimate::PaysOff { months, total_interest }
    }
}

fn minimum_payment_baseline(balance: f64, monthly_rate: f64, minimum_payment: f64) -> MinimumPaymentBaseline {
    let mut remaining = balance;
    let mut months = 0u32;
    let mut total_interest = 0.0;

    while remaining > 0.0 && months < IMPACT_MAX_MONTHS {
        let interest = remaining * monthly_rate;
        let principal = minimum_payment - interest;
        if principal <= 0.0 {
            break;
        }
        remaining -= principal;
        total_interest += interest;
        months += 1;
    }

    MinimumPaymentBaseline {
        months,
        total_interest,
        pays_off: remaining <= 0.0,
    }
}
