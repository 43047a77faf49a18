//! Project a debt payoff plan month by month
//!
//! Prints the headline summary and optionally writes the full schedule CSV.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use debt_payoff::debt::{load_debts, load_sample_debts};
use debt_payoff::projection::compare::{cheapest, compare_strategies};
use debt_payoff::projection::{PayoffOutcome, PayoffSummary, ProjectionEngine};
use debt_payoff::report::{fmt_money, fmt_months, write_schedule_to_path};
use debt_payoff::{PayoffPlan, PayoffStrategy};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliStrategy {
    Snowball,
    Avalanche,
    Custom,
}

impl From<CliStrategy> for PayoffStrategy {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Snowball => PayoffStrategy::Snowball,
            CliStrategy::Avalanche => PayoffStrategy::Avalanche,
            CliStrategy::Custom => PayoffStrategy::Custom,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "project_debts", about = "Project a snowball/avalanche debt payoff plan")]
struct Args {
    /// Debt list (.csv or .json); the bundled sample list when omitted
    #[arg(long)]
    debts: Option<PathBuf>,

    /// Payoff plan JSON; flags below override its fields
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Total monthly budget across all debts
    #[arg(long)]
    budget: Option<f64>,

    #[arg(long, value_enum)]
    strategy: Option<CliStrategy>,

    /// Month cap for the projection
    #[arg(long)]
    max_months: Option<u32>,

    /// First projected month, YYYY-MM
    #[arg(long, value_parser = parse_month)]
    start: Option<NaiveDate>,

    /// Write the month-by-month schedule to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also run every strategy and show them side by side
    #[arg(long)]
    compare: bool,
}

fn parse_month(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM: {}", e))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let debts = match &args.debts {
        Some(path) => load_debts(path)
            .with_context(|| format!("failed to load debts from {}", path.display()))?,
        None => load_sample_debts().context("failed to load bundled sample debts")?,
    };

    let mut plan = match &args.plan {
        Some(path) => PayoffPlan::load(path)
            .with_context(|| format!("failed to load plan from {}", path.display()))?,
        None => PayoffPlan::default(),
    };
    if let Some(budget) = args.budget {
        plan.monthly_budget = budget;
    }
    if let Some(strategy) = args.strategy {
        plan.strategy = strategy.into();
    }
    if let Some(max_months) = args.max_months {
        plan.max_months = max_months;
    }
    if args.start.is_some() {
        plan.start_date = args.start;
    }
    plan.validate().context("invalid payoff plan")?;

    let config = plan.projection_config();
    let min_total: f64 = debts
        .iter()
        .filter(|d| !d.is_paid_off())
        .map(|d| d.minimum_payment)
        .sum();

    println!("Plan: {} ({} strategy)", plan.name, plan.strategy);
    println!(
        "Debts: {}   Budget: {}/month   Minimums: {}/month",
        debts.len(),
        fmt_money(plan.monthly_budget),
        fmt_money(min_total)
    );
    if plan.monthly_budget < min_total {
        println!("Note: budget is below the combined minimum payments; no extra will be applied.");
    }

    let engine = ProjectionEngine::new(config);
    let result = engine.run(&debts);
    println!();
    print_summary(&result.summary);

    if let Some(path) = &args.output {
        write_schedule_to_path(path, &result.snapshots)
            .with_context(|| format!("failed to write schedule to {}", path.display()))?;
        println!("\nSchedule written to {}", path.display());
    }

    if args.compare {
        println!("\nStrategy comparison:");
        println!("{:<10} {:>10} {:>14} {:>14}", "Strategy", "Months", "Interest", "Debt-free");
        let comparisons = compare_strategies(&debts, engine.config());
        for c in &comparisons {
            let (months, debt_free) = match &c.summary.outcome {
                PayoffOutcome::NothingOwed => ("0".to_string(), "-".to_string()),
                PayoffOutcome::DebtFree { months, debt_free_month } => {
                    (months.to_string(), debt_free_month.format("%b %Y").to_string())
                }
                PayoffOutcome::NotPaidOff { months_simulated, .. } => {
                    (format!(">{}", months_simulated), "Never".to_string())
                }
            };
            println!(
                "{:<10} {:>10} {:>14} {:>14}",
                c.strategy.to_string(),
                months,
                fmt_money(c.summary.total_interest),
                debt_free
            );
        }
        if let Some(best) = cheapest(&comparisons) {
            println!("Least interest: {}", best.strategy);
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

fn print_summary(summary: &PayoffSummary) {
    match &summary.outcome {
        PayoffOutcome::NothingOwed => println!("Nothing owed."),
        PayoffOutcome::DebtFree { months, debt_free_month } => println!(
            "Debt-free in {} ({})",
            fmt_months(*months),
            debt_free_month.format("%b %Y")
        ),
        PayoffOutcome::NotPaidOff { months_simulated, remaining_balance } => println!(
            "Not paid off within {}; {} still owed",
            fmt_months(*months_simulated),
            fmt_money(*remaining_balance)
        ),
    }
    println!("Total interest: {}", fmt_money(summary.total_interest));
    println!("Total paid:     {}", fmt_money(summary.total_paid));

    println!("\n{:<24} {:>10} {:>14}", "Debt", "Paid off", "Interest");
    for debt in &summary.debts {
        let paid_off = debt
            .month
            .map(|m| m.format("%b %Y").to_string())
            .unwrap_or_else(|| "Never".to_string());
        println!("{:<24} {:>10} {:>14}", debt.name, paid_off, fmt_money(debt.interest_paid));
    }
}
