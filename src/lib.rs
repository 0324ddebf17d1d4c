//! # Drivetrain Models
//!
//! Gear-selection models for bicycle-style drivetrains: given the tooth
//! counts of the front chainrings and the rear cassette cogs, find the gear
//! combination whose ratio sits closest under a desired ratio, and derive
//! the one-shift-at-a-time sequence that gets there from any starting gear.
//!
//! ## Crate layout
//!
//! - [`models`]: The drivetrain domain model and its operations.
//! - [`support`]: Supporting utilities used by models.
//!
//! The computation layer is pure: every operation borrows a caller-owned
//! configuration, returns a fresh result, and shares no state between calls.
//! Driving actual shift actuators is left to the caller.

pub mod models;
pub mod support;
