//! Build errors for calculator sessions.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a calculator session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Seeded history holds {records} records but capacity is {capacity}")]
    HistoryOverCapacity { records: usize, capacity: usize },
}
