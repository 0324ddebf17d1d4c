//! The gear ratio quantity.

use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintError, ConstraintResult, StrictlyPositive};

/// A gear ratio achieved by a drivetrain.
///
/// The ratio is the front cog tooth count divided by the rear cog tooth
/// count, so any achieved ratio is strictly positive and finite.
///
/// Desired (requested) ratios are ordinary [`Ratio`] quantities, since a
/// caller may ask for any value; `GearRatio` is reserved for ratios a real
/// gear combination produces.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GearRatio(Constrained<Ratio, StrictlyPositive>);

impl GearRatio {
    /// Creates a [`GearRatio`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is zero, negative, or not a number.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Creates a [`GearRatio`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is zero, negative, or not a number.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Creates a [`GearRatio`] from front and rear cog tooth counts.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either tooth count is zero.
    pub fn from_cogs(front_teeth: u8, rear_teeth: u8) -> ConstraintResult<Self> {
        // Guard the division: a zero rear cog would produce an infinite
        // ratio, which the positivity check alone would not reject.
        if rear_teeth == 0 {
            return Err(ConstraintError::Zero);
        }
        Self::new(f64::from(front_teeth) / f64::from(rear_teeth))
    }
}

impl Deref for GearRatio {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn from_cogs() -> ConstraintResult<()> {
        let gear_ratio = GearRatio::from_cogs(30, 19)?;
        assert_relative_eq!(gear_ratio.get::<ratio>(), 30.0 / 19.0);
        Ok(())
    }

    #[test]
    fn rejects_zero_cogs() {
        assert!(matches!(
            GearRatio::from_cogs(0, 16),
            Err(ConstraintError::Zero)
        ));
        assert!(matches!(
            GearRatio::from_cogs(30, 0),
            Err(ConstraintError::Zero)
        ));
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(GearRatio::new(0.0).is_err());
        assert!(GearRatio::new(-1.6).is_err());
        assert!(GearRatio::new(f64::NAN).is_err());
    }

    #[test]
    fn compares_as_quantity() {
        let low = GearRatio::from_cogs(30, 28).unwrap();
        let high = GearRatio::from_cogs(44, 16).unwrap();
        assert!(low < high);
    }
}
