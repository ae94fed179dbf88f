//! Shift-rotation domain models.
//!
//! Core data types for rotating a worker pool through a fixed
//! station/slot catalog: the static configuration (`Catalog`,
//! `Station`, `SlotTime`), the roster entry (`Worker`), and the
//! generated outcome (`Schedule`, `Assignment`).

mod catalog;
mod schedule;
mod worker;

pub use catalog::{Catalog, SlotTime, Station};
pub use schedule::{Assignment, EditError, EditErrorKind, Schedule};
pub use worker::Worker;
