//! Shift-rotation assignment library.
//!
//! Assigns a pool of workers to the shift-time slots of a fixed station
//! catalog for a new period, using the previous period's schedule to
//! avoid placing a worker at the same station or the same meal time
//! twice in a row. Workers left over after the primary fill are
//! distributed round-robin over the designated overflow station.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Worker`, `Station`, `SlotTime`,
//!   `Catalog`, `Assignment`, `Schedule`, plus the query helpers and
//!   checked manual edits used for interactive adjustment
//! - **`scheduler`**: `RotationScheduler` (two-phase generation) and
//!   `RotationStats` (coverage and carry-over metrics)
//! - **`validation`**: Integrity checks for catalogs and rosters
//!   (duplicate ids, empty stations, overflow placement)
//!
//! # Scope
//!
//! This crate is the decision core only. Roster storage, schedule
//! history, auditing, and any user interface are external collaborators:
//! they hand in a `Vec<Worker>` and an optional previous `Schedule`, and
//! persist the `Schedule` that comes back. Generation is a pure
//! function of its arguments (plus an injectable RNG) and has no error
//! outcomes; manual edits are the only fallible operations.

pub mod models;
pub mod scheduler;
pub mod validation;
