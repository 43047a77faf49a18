//! What-if analysis for a single debt at a chosen monthly payment

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use debt_payoff::debt::{load_debts, load_sample_debts};
use debt_payoff::report::{fmt_money, fmt_months};
use debt_payoff::{impact, suggested_payments, PayoffEstimate};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "payment_impact", about = "Show how a monthly payment changes one debt's payoff")]
struct Args {
    /// Debt list (.csv or .json); the bundled sample list when omitted
    #[arg(long)]
    debts: Option<PathBuf>,

    /// Id of the debt to analyze
    #[arg(long)]
    id: String,

    /// Hypothetical monthly payment; the debt's minimum when omitted
    #[arg(long)]
    payment: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let debts = match &args.debts {
        Some(path) => load_debts(path)
            .with_context(|| format!("failed to load debts from {}", path.display()))?,
        None => load_sample_debts().context("failed to load bundled sample debts")?,
    };

    let debt = debts
        .iter()
        .find(|d| d.id == args.id)
        .ok_or_else(|| anyhow!("no debt with id '{}'", args.id))?;

    let payment = args.payment.unwrap_or(debt.minimum_payment);
    if !payment.is_finite() || payment < 0.0 {
        bail!("payment must be a non-negative amount, got {}", payment);
    }
    let result = impact(debt, payment);
    let suggested = suggested_payments(debt);

    let today = Local::now().date_naive();
    let this_month = today.with_day(1).unwrap_or(today);

    println!("{}", debt.name);
    println!(
        "Balance: {}   APR: {}%   Minimum: {}",
        fmt_money(debt.current_balance),
        debt.interest_rate_annual,
        fmt_money(debt.minimum_payment)
    );
    println!();
    println!("Payment:          {}/month", fmt_money(payment));
    println!("Interest now:     {}/month", fmt_money(result.monthly_interest));

    match result.estimate {
        PayoffEstimate::PaysOff { months, total_interest } => {
            let payoff = result
                .payoff_month(this_month)
                .map(|m| m.format("%b %Y").to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("Paid off in:      {} ({})", fmt_months(months), payoff);
            println!("Total interest:   {}", fmt_money(total_interest));
        }
        PayoffEstimate::NeverPaysOff => {
            println!("Paid off in:      Never");
            println!("Total interest:   -");
        }
    }

    match result.interest_saved {
        Some(saved) if result.has_significant_savings() => {
            println!("Interest saved:   {} vs. minimum payments", fmt_money(saved))
        }
        Some(saved) => println!("Interest saved:   {}", fmt_money(saved)),
        None => println!("Interest saved:   -"),
    }

    println!();
    println!("Recommended:      {}/month (about 24 months)", fmt_money(suggested.recommended));
    println!("Aggressive:       {}/month (about 12 months)", fmt_money(suggested.aggressive));

    Ok(())
}
