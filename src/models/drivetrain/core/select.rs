//! Closest-under search and single-step shifting.

use uom::{
    ConstZero,
    si::{f64::Ratio, ratio::ratio},
};

use super::{config::DrivetrainConfig, error::SelectionError, selection::GearSelection};

/// Finds the gear combination whose ratio is closest to `desired` without
/// reaching it.
///
/// Every front/rear pair is evaluated, front ascending outer and rear
/// ascending inner; when two pairs achieve the same ratio the
/// first-encountered one wins.
///
/// # Errors
///
/// - Any [`DrivetrainConfig::validate`] failure, propagated unchanged.
/// - [`SelectionError::InvalidRatio`] if `desired` is below the lowest
///   achievable ratio, or if no combination's ratio falls under it (an empty
///   cog sequence or a NaN target leaves the search empty-handed).
pub fn closest_under(
    config: &DrivetrainConfig,
    desired: Ratio,
) -> Result<GearSelection, SelectionError> {
    config.validate()?;

    let (Some(&front_min), Some(&rear_max)) = (config.front_cogs.first(), config.rear_cogs.last())
    else {
        // An empty side means there is nothing to select.
        return Err(SelectionError::InvalidRatio);
    };

    // Cogs are sorted ascending, so the smallest front cog over the largest
    // rear cog is the lowest ratio this drivetrain can reach.
    if desired < cog_ratio(front_min, rear_max) {
        return Err(SelectionError::InvalidRatio);
    }

    let mut best: Option<(Ratio, GearSelection)> = None;
    for (front, &front_teeth) in config.front_cogs.iter().enumerate() {
        for (rear, &rear_teeth) in config.rear_cogs.iter().enumerate() {
            // Keep the accept condition positive: a NaN target compares
            // false against every candidate and must qualify none of them.
            let candidate = cog_ratio(front_teeth, rear_teeth);
            if candidate < desired && best.is_none_or(|(best_ratio, _)| candidate > best_ratio) {
                best = Some((candidate, GearSelection::new(front, rear)));
            }
        }
    }

    // The lowest-ratio check does not guarantee the search accepted anything
    // (a NaN target slips past every comparison), so report that case
    // explicitly instead of handing back an arbitrary selection.
    match best {
        Some((_, selection)) => Ok(selection),
        None => Err(SelectionError::InvalidRatio),
    }
}

/// Computes the single shift that moves `current` toward the combination
/// closest under `desired`.
///
/// Exactly one index moves per call, by exactly one step: the front shifts
/// first until it matches the target, then the rear. The returned selection
/// equals `current` once the target is reached, which is the caller's signal
/// to stop shifting. Extreme front/rear pairings (cross-chaining) are not
/// avoided.
///
/// # Errors
///
/// - Any [`closest_under`] failure, propagated unchanged.
/// - [`SelectionError::InvalidRatio`] if `desired` is not positive.
/// - [`SelectionError::InvalidGear`] if `current` is out of range for the
///   configuration.
pub fn next_gear(
    config: &DrivetrainConfig,
    desired: Ratio,
    current: GearSelection,
) -> Result<GearSelection, SelectionError> {
    let target = closest_under(config, desired)?;

    // A non-positive target ratio is physically meaningless even when it
    // clears the lowest-ratio check above.
    if desired <= Ratio::ZERO {
        return Err(SelectionError::InvalidRatio);
    }

    if !current.is_within(config) {
        return Err(SelectionError::InvalidGear);
    }

    if target == current {
        return Ok(target);
    }

    let next = if target.front == current.front {
        let rear = if target.rear < current.rear {
            current.rear - 1
        } else {
            current.rear + 1
        };
        GearSelection::new(current.front, rear)
    } else {
        let front = if target.front < current.front {
            current.front - 1
        } else {
            current.front + 1
        };
        GearSelection::new(front, current.rear)
    };

    Ok(next)
}

/// Walks [`next_gear`] to its fixed point, recording every selection visited.
///
/// The returned sequence starts with `start` and ends with the combination
/// closest under `desired`. Iteration is capped at the number of gear
/// combinations, so an unexpectedly non-converging sequence is returned
/// truncated rather than looping forever.
///
/// # Errors
///
/// Propagates any [`next_gear`] failure.
pub fn shift_sequence(
    config: &DrivetrainConfig,
    desired: Ratio,
    start: GearSelection,
) -> Result<Vec<GearSelection>, SelectionError> {
    let cap = config.front_cogs.len() * config.rear_cogs.len();

    let mut sequence = vec![start];
    let mut current = start;
    for _ in 0..cap {
        let next = next_gear(config, desired, current)?;
        if next == current {
            break;
        }
        sequence.push(next);
        current = next;
    }

    Ok(sequence)
}

fn cog_ratio(front_teeth: u8, rear_teeth: u8) -> Ratio {
    Ratio::new::<ratio>(f64::from(front_teeth) / f64::from(rear_teeth))
}
