use crate::support::ratio::GearRatio;

use super::{
    config::DrivetrainConfig,
    error::{SelectionError, Side},
};

/// A physical gear combination: one front cog and one rear cog, identified by
/// zero-based indices into a [`DrivetrainConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearSelection {
    /// Index into the front chainrings.
    pub front: usize,
    /// Index into the rear cassette cogs.
    pub rear: usize,
}

impl GearSelection {
    /// Creates a selection from front and rear cog indices.
    #[must_use]
    pub fn new(front: usize, rear: usize) -> Self {
        Self { front, rear }
    }

    /// Whether both indices are in range for `config`.
    #[must_use]
    pub fn is_within(&self, config: &DrivetrainConfig) -> bool {
        self.front < config.front_cogs.len() && self.rear < config.rear_cogs.len()
    }

    /// The gear ratio this selection achieves in `config`.
    ///
    /// Ratios are derived on demand rather than stored, so a selection stays
    /// valid across configurations that share cog counts.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::InvalidGear`] if either index is out of range.
    /// - [`SelectionError::InvalidCog`] if the selected cog has zero teeth.
    pub fn ratio(&self, config: &DrivetrainConfig) -> Result<GearRatio, SelectionError> {
        if !self.is_within(config) {
            return Err(SelectionError::InvalidGear);
        }

        let front_teeth = config.front_cogs[self.front];
        let rear_teeth = config.rear_cogs[self.rear];
        if front_teeth == 0 {
            return Err(SelectionError::InvalidCog { side: Side::Front });
        }
        if rear_teeth == 0 {
            return Err(SelectionError::InvalidCog { side: Side::Rear });
        }

        Ok(GearRatio::from_cogs(front_teeth, rear_teeth)
            .expect("nonzero tooth counts always form a valid ratio"))
    }
}
