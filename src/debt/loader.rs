//! Load debt lists from CSV or JSON
//!
//! CSV columns follow the debt record:
//! `id,name,current_balance,original_balance,interest_rate_annual,minimum_payment,due_day,auto_pay,notes`
//! Optional columns may be left empty. JSON input is an array of the same records.

use super::Debt;
use crate::error::{PayoffError, Result};
use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const SAMPLE_DEBTS_CSV: &str = include_str!("../../data/sample_debts.csv");

/// Load and validate debts from a `.csv` or `.json` file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let debts = match extension.as_deref() {
        Some("csv") => load_debts_from_csv_reader(File::open(path)?)?,
        Some("json") => load_debts_from_json_reader(File::open(path)?)?,
        _ => return Err(PayoffError::UnsupportedFormat(path.to_path_buf())),
    };

    info!("Loaded {} debts from {}", debts.len(), path.display());
    Ok(debts)
}

/// Read debts from CSV with a header row
pub fn load_debts_from_csv_reader<R: Read>(reader: R) -> Result<Vec<Debt>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut debts = Vec::new();
    for record in rdr.deserialize() {
        let debt: Debt = record?;
        debts.push(debt);
    }

    validate_debts(&debts)?;
    Ok(debts)
}

/// Read debts from a JSON array
pub fn load_debts_from_json_reader<R: Read>(reader: R) -> Result<Vec<Debt>> {
    let debts: Vec<Debt> = serde_json::from_reader(reader)?;
    validate_debts(&debts)?;
    Ok(debts)
}

/// Bundled sample debt list used by the command-line tools and tests
pub fn load_sample_debts() -> Result<Vec<Debt>> {
    load_debts_from_csv_reader(SAMPLE_DEBTS_CSV.as_bytes())
}

/// Reject records the projector cannot meaningfully simulate.
/// The projector itself does not validate; this is the data-entry boundary.
pub fn validate_debts(debts: &[Debt]) -> Result<()> {
    let mut seen = HashSet::with_capacity(debts.len());

    for debt in debts {
        let invalid = |reason: &str| PayoffError::InvalidDebt {
            id: debt.id.clone(),
            reason: reason.to_string(),
        };

        if debt.id.trim().is_empty() {
            return Err(invalid("id is empty"));
        }
        if !seen.insert(debt.id.as_str()) {
            return Err(invalid("duplicate id"));
        }
        if !debt.current_balance.is_finite() || debt.current_balance < 0.0 {
            return Err(invalid("current_balance must be a non-negative amount"));
        }
        if !debt.interest_rate_annual.is_finite() || debt.interest_rate_annual < 0.0 {
            return Err(invalid("interest_rate_annual must be a non-negative percentage"));
        }
        if !debt.minimum_payment.is_finite() || debt.minimum_payment < 0.0 {
            return Err(invalid("minimum_payment must be a non-negative amount"));
        }
        if !(1..=31).contains(&debt.due_day) {
            return Err(invalid("due_day must be between 1 and 31"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sample_debts() {
        let debts = load_sample_debts().expect("Failed to load sample debts");
        assert_eq!(debts.len(), 4);
        assert!(debts.iter().all(|d| !d.is_paid_off()));

        let card = debts.iter().find(|d| d.id == "visa").expect("visa missing");
        assert_eq!(card.current_balance, 1227.60);
        assert_eq!(card.interest_rate_annual, 33.99);
        assert_eq!(card.minimum_payment, 114.77);
    }

    #[test]
    fn test_csv_optional_columns() {
        let csv = "\
id,name,current_balance,original_balance,interest_rate_annual,minimum_payment,due_day,auto_pay,notes
a, Card A ,1000,,30,50,15,,
b,Card B,200,500,10,20,3,true,paid by checking
";
        let debts = load_debts_from_csv_reader(csv.as_bytes()).expect("Failed to parse");
        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].name, "Card A");
        assert_eq!(debts[0].original_balance, None);
        assert_eq!(debts[0].auto_pay, None);
        assert_eq!(debts[0].due_day, 15);
        assert_eq!(debts[1].original_balance, Some(500.0));
        assert_eq!(debts[1].auto_pay, Some(true));
        assert_eq!(debts[1].notes.as_deref(), Some("paid by checking"));
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"[
            {"id": "a", "name": "A", "current_balance": 1000, "interest_rate_annual": 30, "minimum_payment": 50}
        ]"#;
        let debts = load_debts_from_json_reader(json.as_bytes()).expect("Failed to parse");
        assert_eq!(debts[0].due_day, 1);
        assert_eq!(debts[0].notes, None);
    }

    #[test]
    fn test_rejects_negative_balance() {
        let debts = vec![Debt::new("a", "A", -5.0, 10.0, 10.0)];
        match validate_debts(&debts) {
            Err(PayoffError::InvalidDebt { id, .. }) => assert_eq!(id, "a"),
            other => panic!("expected InvalidDebt, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let debts = vec![
            Debt::new("a", "A", 5.0, 10.0, 10.0),
            Debt::new("a", "Again", 6.0, 10.0, 10.0),
        ];
        assert!(matches!(validate_debts(&debts), Err(PayoffError::InvalidDebt { .. })));
    }

    #[test]
    fn test_rejects_bad_due_day() {
        let mut debt = Debt::new("a", "A", 5.0, 10.0, 10.0);
        debt.due_day = 32;
        assert!(validate_debts(&[debt]).is_err());
    }

    #[test]
    fn test_rejects_nan_rate() {
        let debts = vec![Debt::new("a", "A", 5.0, f64::NAN, 10.0)];
        assert!(validate_debts(&debts).is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_debts("debts.xlsx").unwrap_err();
        assert!(matches!(err, PayoffError::UnsupportedFormat(_)));

        let err = load_debts("missing.csv").unwrap_err();
        assert!(matches!(err, PayoffError::Io(_)));
    }
}
