use std::fmt;

use thiserror::Error;

use super::config::MAX_COGS;

/// Identifies which cog sequence a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The front chainrings.
    Front,
    /// The rear cassette cogs.
    Rear,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Rear => write!(f, "rear"),
        }
    }
}

/// Errors that can occur during gear selection.
///
/// All failures are immediate and non-retryable; nothing here is transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A cog sequence holds more cogs than a drivetrain supports.
    #[error("{side} cog count {len} exceeds the maximum of {MAX_COGS}")]
    InvalidCogLength { side: Side, len: usize },

    /// A cog sequence is not sorted smallest to largest.
    #[error("{side} cogs are not sorted smallest to largest")]
    CogsNotSorted { side: Side },

    /// A cog has zero teeth.
    #[error("{side} cog has zero teeth")]
    InvalidCog { side: Side },

    /// No gear combination achieves a ratio at or under the desired ratio.
    #[error("no gear combination achieves the desired ratio without exceeding it")]
    InvalidRatio,

    /// A gear selection's indices are out of range for the configuration.
    #[error("gear selection is outside the drivetrain configuration")]
    InvalidGear,
}
