//! Rotation scheduler and quality metrics.
//!
//! `RotationScheduler` produces a new period's schedule from the active
//! worker pool and the previous period's schedule (two-phase: primary
//! fill with the anti-repeat rule, then overflow round-robin).
//! `RotationStats` summarizes a schedule's coverage and carry-overs.

mod rotation;
mod stats;

pub use rotation::{is_eligible, RotationScheduler};
pub use stats::RotationStats;
