//! Suggested monthly payments sized to clear a debt over a fixed term

use super::{AGGRESSIVE_TERM_MONTHS, RECOMMENDED_TERM_MONTHS};
use crate::debt::Debt;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SuggestedPayments {
    /// Clears the balance in about two years, never below the minimum
    pub recommended: f64,
    /// Clears the balance in about one year, never below `recommended`
    pub aggressive: f64,
}

/// Level payment that amortizes `balance` over `term_months`.
///
/// Annuity formula `P·r / (1 - (1+r)^-n)`; at a 0% rate the denominator is
/// zero, so the balance is split evenly instead.
pub fn amortized_payment(balance: f64, monthly_rate: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return balance;
    }
    if monthly_rate == 0.0 {
        return balance / term_months as f64;
    }
    let n = term_months as i32;
    (balance * monthly_rate) / (1.0 - (1.0 + monthly_rate).powi(-n))
}

pub fn suggested_payments(debt: &Debt) -> SuggestedPayments {
    let rate = debt.monthly_rate();
    let balance = debt.current_balance.max(0.0);

    let recommended = round_cents(amortized_payment(balance, rate, RECOMMENDED_TERM_MONTHS))
        .max(debt.minimum_payment);
    let aggressive = round_cents(amortized_payment(balance, rate, AGGRESSIVE_TERM_MONTHS))
        .max(recommended);

    SuggestedPayments { recommended, aggressive }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
