//! Errors raised at the loading and configuration boundary
//!
//! The projector and impact calculator are pure and never fail; only reading
//! debt lists / plans and validating caller input produce these.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PayoffError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON read failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported debt file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid debt '{id}': {reason}")]
    InvalidDebt { id: String, reason: String },

    #[error("invalid payoff plan: {0}")]
    InvalidPlan(String),
}

pub type Result<T> = std::result::Result<T, PayoffError>;
