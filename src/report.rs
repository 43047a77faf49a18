//! Display formatting and schedule export
//!
//! Projection figures stay unrounded internally; rounding to cents happens here.

use crate::error::Result;
use crate::projection::MonthlySnapshot;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Row label used for per-month totals in the schedule CSV
pub const TOTAL_ROW_ID: &str = "TOTAL";

/// Format an amount as dollars with thousands separators, e.g. `-$1,234.50`.
/// Non-finite amounts print as `-`.
pub fn fmt_money(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Month count with the right noun, e.g. `1 month`, `15 months`
pub fn fmt_months(months: u32) -> String {
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{} months", months)
    }
}

/// One line of the exported payoff schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub month_index: u32,
    pub month: String,
    pub debt_id: String,
    pub debt_name: String,
    pub starting_balance: f64,
    pub interest: f64,
    pub payment: f64,
    pub ending_balance: f64,
}

/// Flatten snapshots into per-debt rows followed by a total row for each month
pub fn schedule_rows(snapshots: &[MonthlySnapshot]) -> Vec<ScheduleRow> {
    let mut rows = Vec::new();

    for snapshot in snapshots {
        for debt in &snapshot.per_debt {
            rows.push(ScheduleRow {
                month_index: snapshot.month_index,
                month: snapshot.month_label.clone(),
                debt_id: debt.id.clone(),
                debt_name: debt.name.clone(),
                starting_balance: cents(debt.starting_balance),
                interest: cents(debt.interest),
                payment: cents(debt.payment),
                ending_balance: cents(debt.ending_balance),
            });
        }

        let totals = snapshot.totals;
        rows.push(ScheduleRow {
            month_index: snapshot.month_index,
            month: snapshot.month_label.clone(),
            debt_id: TOTAL_ROW_ID.to_string(),
            debt_name: String::new(),
            starting_balance: cents(totals.starting_balance),
            interest: cents(totals.interest),
            payment: cents(totals.payment),
            ending_balance: cents(totals.ending_balance),
        });
    }

    rows
}

/// Write the month-by-month schedule as CSV with a header row
pub fn write_schedule_csv<W: Write>(writer: W, snapshots: &[MonthlySnapshot]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in schedule_rows(snapshots) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_schedule_to_path<P: AsRef<Path>>(path: P, snapshots: &[MonthlySnapshot]) -> Result<()> {
    let file = File::create(path)?;
    write_schedule_csv(file, snapshots)
}

fn cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::{Debt, PayoffStrategy};
    use crate::projection::{ProjectionConfig, ProjectionEngine};
    use chrono::NaiveDate;

    #[test]
    fn test_fmt_money() {
        assert_eq!(fmt_money(0.0), "$0.00");
        assert_eq!(fmt_money(34.77177), "$34.77");
        assert_eq!(fmt_money(1227.6), "$1,227.60");
        assert_eq!(fmt_money(1_234_567.891), "$1,234,567.89");
        assert_eq!(fmt_money(-115.216), "-$115.22");
        assert_eq!(fmt_money(-0.001), "$0.00");
        assert_eq!(fmt_money(999.999), "$1,000.00");
    }

    #[test]
    fn test_fmt_money_non_finite() {
        assert_eq!(fmt_money(f64::NAN), "-");
        assert_eq!(fmt_money(f64::INFINITY), "-");
        assert_eq!(fmt_money(f64::NEG_INFINITY), "-");
    }

    #[test]
    fn test_fmt_months() {
        assert_eq!(fmt_months(0), "0 months");
        assert_eq!(fmt_months(1), "1 month");
        assert_eq!(fmt_months(15), "15 months");
    }

    #[test]
    fn test_schedule_csv() {
        let debts = vec![
            Debt::new("A", "Card A", 1000.0, 30.0, 50.0),
            Debt::new("B", "Card B", 200.0, 10.0, 20.0),
        ];
        let config = ProjectionConfig::new(100.0, PayoffStrategy::Snowball)
            .with_start_month(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let snapshots = ProjectionEngine::new(config).project(&debts);

        let mut out = Vec::new();
        write_schedule_csv(&mut out, &snapshots).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("month_index,month,debt_id,debt_name,starting_balance,interest,payment,ending_balance")
        );
        assert_eq!(lines.next(), Some("0,Jan 2026,B,Card B,200.0,1.67,50.0,151.67"));
        assert_eq!(lines.next(), Some("0,Jan 2026,A,Card A,1000.0,25.0,50.0,975.0"));
        assert_eq!(lines.next(), Some("0,Jan 2026,TOTAL,,1200.0,26.67,100.0,1126.67"));
    }

    #[test]
    fn test_schedule_rows_include_totals() {
        let debts = vec![Debt::new("a", "A", 300.0, 0.0, 100.0)];
        let config = ProjectionConfig::new(100.0, PayoffStrategy::Custom)
            .with_start_month(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let rows = schedule_rows(&ProjectionEngine::new(config).project(&debts));

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[1].debt_id, TOTAL_ROW_ID);
        assert_eq!(rows[5].ending_balance, 0.0);
    }
}
