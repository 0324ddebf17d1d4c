//! Core gear-selection logic.

mod config;
mod error;
mod select;
mod selection;

pub use config::{DrivetrainConfig, MAX_COGS};
pub use error::{SelectionError, Side};
pub use select::{closest_under, next_gear, shift_sequence};
pub use selection::GearSelection;
