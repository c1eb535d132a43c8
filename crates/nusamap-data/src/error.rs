//! Error types for dataset ingestion.
//!
//! A load failure is terminal for the session: the caller reports it
//! once and does not proceed to a partial render. There is no retry
//! policy.

use nusamap_core::IndexError;
use thiserror::Error;

/// Errors that can occur while loading the case or boundary datasets.
#[derive(Debug, Error)]
pub enum DataError {
    /// CSV reader or header error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row carried a date not in month/day/year order.
    #[error("row {line}: bad date `{value}` (expected m/d/Y)")]
    BadDate {
        /// The offending cell value
        value: String,
        /// 1-based line number in the source file
        line: u64,
    },

    /// A counter cell was not a non-negative integer.
    #[error("row {line}: bad `{column}` value `{value}`")]
    BadCounter {
        /// Column name as it appears in the header
        column: &'static str,
        /// The offending cell value
        value: String,
        /// 1-based line number in the source file
        line: u64,
    },

    /// Boundary file was not valid JSON of the expected shape.
    #[error("boundary JSON error: {0}")]
    Geo(#[from] serde_json::Error),

    /// Building the case index failed (duplicate rows under `Reject`).
    #[error(transparent)]
    Index(#[from] IndexError),
}
