use super::error::{SelectionError, Side};

/// Maximum number of cogs allowed on the front or rear.
pub const MAX_COGS: usize = 13;

/// The cog layout of a drivetrain.
///
/// Both sequences list tooth counts sorted smallest to largest, with at most
/// [`MAX_COGS`] entries each. The configuration is caller-owned and borrowed
/// read-only by every selection operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrivetrainConfig {
    /// Tooth count of each front chainring, sorted smallest to largest.
    pub front_cogs: Vec<u8>,
    /// Tooth count of each rear cassette cog, sorted smallest to largest.
    pub rear_cogs: Vec<u8>,
}

impl DrivetrainConfig {
    /// Checks this configuration for structural validity.
    ///
    /// Runs automatically at the start of every selection operation, so a
    /// malformed configuration fails before any ratio is computed.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::InvalidCogLength`] if a sequence holds more than
    ///   [`MAX_COGS`] cogs.
    /// - [`SelectionError::CogsNotSorted`] if a sequence is not sorted
    ///   smallest to largest.
    /// - [`SelectionError::InvalidCog`] if a cog has zero teeth.
    pub fn validate(&self) -> Result<(), SelectionError> {
        for (side, cogs) in self.sides() {
            if cogs.len() > MAX_COGS {
                return Err(SelectionError::InvalidCogLength {
                    side,
                    len: cogs.len(),
                });
            }
        }
        for (side, cogs) in self.sides() {
            if cogs.windows(2).any(|pair| pair[1] < pair[0]) {
                return Err(SelectionError::CogsNotSorted { side });
            }
        }
        // A zero-toothed cog would make every ratio it appears in infinite
        // or zero, so reject it here rather than at division time.
        for (side, cogs) in self.sides() {
            if cogs.contains(&0) {
                return Err(SelectionError::InvalidCog { side });
            }
        }
        Ok(())
    }

    fn sides(&self) -> [(Side, &[u8]); 2] {
        [
            (Side::Front, self.front_cogs.as_slice()),
            (Side::Rear, self.rear_cogs.as_slice()),
        ]
    }
}
