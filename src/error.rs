//! Error type shared by the normalizer, the layout step and the CLI.

use crate::model::types::Antibiotic;

/// Errors that can occur while loading a table or building a panel.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// I/O error reading the input table or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Layout override file could not be decoded
    #[error("invalid layout configuration: {0}")]
    Layout(#[from] serde_json::Error),

    /// A required column is absent from the normalized row
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A designated text column was coerced to a number
    #[error("column '{0}' must hold text but was read as a number")]
    ExpectedText(String),

    /// An amount cannot be placed on a logarithmic axis
    #[error("{bacteria}: {antibiotic} amount {amount} cannot be placed on a log axis")]
    InvalidAmount {
        bacteria: String,
        antibiotic: Antibiotic,
        amount: f64,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;
