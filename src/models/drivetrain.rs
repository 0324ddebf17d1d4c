//! Bicycle-style drivetrain gear selection.
//!
//! A drivetrain is described by the tooth counts of its front chainrings and
//! rear cassette cogs. The operations here find the gear combination whose
//! ratio is closest to a desired ratio without exceeding it, and compute the
//! one-index shift that moves a current combination toward it. The
//! computational core is in the internal `core` module.

mod core;

pub use core::{
    DrivetrainConfig, GearSelection, MAX_COGS, SelectionError, Side, closest_under, next_gear,
    shift_sequence,
};

use twine_core::Model;
use uom::si::f64::Ratio;

/// Input to the [`GearShift`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftRequest {
    /// The gear ratio to approach without exceeding.
    pub desired_ratio: Ratio,
    /// The gear combination the drivetrain is currently in.
    pub current: GearSelection,
}

/// A model that advances a drivetrain by one shift per call.
///
/// Each call computes the single front-or-rear shift that moves the request's
/// `current` selection toward the combination closest under the desired
/// ratio. Feeding the output back as the next request's `current` walks the
/// drivetrain there one gear at a time; the output equals the input selection
/// once it is reached.
pub struct GearShift<'a> {
    config: &'a DrivetrainConfig,
}

impl<'a> GearShift<'a> {
    /// Creates a gear shift model over a drivetrain configuration.
    #[must_use]
    pub fn new(config: &'a DrivetrainConfig) -> Self {
        Self { config }
    }
}

impl Model for GearShift<'_> {
    type Input = ShiftRequest;
    type Output = GearSelection;
    type Error = SelectionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        next_gear(self.config, input.desired_ratio, input.current)
    }
}
