//! Schedule (assignment set) model.
//!
//! A schedule is the outcome of one generation cycle: a set of
//! (station, slot, worker) assignments. At most one assignment exists
//! per (station, slot) key, except on the overflow station, which may
//! hold several workers on the same slot.
//!
//! The schedule also carries the interactive-editing surface: query
//! helpers listing free workers and free slots, and checked manual
//! add/remove operations used between generation cycles.

use serde::{Deserialize, Serialize};

use super::{Catalog, SlotTime, Station, Worker};

/// One (station, slot, worker) triple.
///
/// `worker` is `None` only for rows whose worker was manually removed;
/// generation never emits empty rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Station name (a key of the catalog).
    pub station: String,
    /// Shift-time slot within the station.
    pub slot: SlotTime,
    /// Assigned worker, or `None` after manual removal.
    pub worker: Option<Worker>,
}

impl Assignment {
    /// Creates a filled assignment.
    pub fn new(station: impl Into<String>, slot: SlotTime, worker: Worker) -> Self {
        Self {
            station: station.into(),
            slot,
            worker: Some(worker),
        }
    }

    /// The assigned worker's id, if any.
    pub fn worker_id(&self) -> Option<&str> {
        self.worker.as_ref().map(|w| w.id.as_str())
    }
}

/// A complete schedule for one generation cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments in generation order.
    pub assignments: Vec<Assignment>,
}

/// A rejected manual edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditError {
    /// Error category.
    pub kind: EditErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of rejected manual edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditErrorKind {
    /// The (station, slot) key already holds a worker and the station
    /// is not the overflow station.
    SlotOccupied,
    /// The worker already holds an assignment elsewhere in the schedule.
    WorkerAlreadyScheduled,
    /// The (station, slot) key is not part of the catalog.
    UnknownSlot,
    /// No filled assignment exists at the (station, slot) key.
    AssignmentNotFound,
}

impl EditError {
    fn new(kind: EditErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment without edit checks.
    ///
    /// Used by generation, which enforces the invariants by
    /// construction. Manual edits go through [`Schedule::add_assignment`].
    pub(crate) fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignment rows (filled or emptied).
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule has no rows.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// All rows for a station.
    pub fn assignments_for_station(&self, station: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.station == station)
            .collect()
    }

    /// The worker at a (station, slot) key, if the row exists and is filled.
    pub fn worker_at(&self, station: &str, slot: &SlotTime) -> Option<&Worker> {
        self.assignments
            .iter()
            .find(|a| a.station == station && a.slot == *slot)
            .and_then(|a| a.worker.as_ref())
    }

    /// Whether a row (filled or emptied) exists at the key.
    pub fn occupied(&self, station: &str, slot: &SlotTime) -> bool {
        self.assignments
            .iter()
            .any(|a| a.station == station && a.slot == *slot)
    }

    /// Whether the worker holds any assignment in this schedule.
    pub fn contains_worker(&self, worker_id: &str) -> bool {
        self.assignments
            .iter()
            .any(|a| a.worker_id() == Some(worker_id))
    }

    /// Whether the worker was assigned to the given station.
    pub fn was_at_station(&self, worker_id: &str, station: &str) -> bool {
        self.assignments
            .iter()
            .any(|a| a.station == station && a.worker_id() == Some(worker_id))
    }

    /// Whether the worker held any slot with the given meal label.
    pub fn had_meal(&self, worker_id: &str, meal: &str) -> bool {
        self.assignments
            .iter()
            .any(|a| a.slot.meal == meal && a.worker_id() == Some(worker_id))
    }

    /// Active roster workers not holding any assignment in this schedule.
    pub fn available_workers<'a>(&self, roster: &'a [Worker]) -> Vec<&'a Worker> {
        roster
            .iter()
            .filter(|w| w.active && !self.contains_worker(&w.id))
            .collect()
    }

    /// A station's catalog slots minus those already holding a row
    /// for that station.
    pub fn available_slots<'a>(&self, station: &'a Station) -> Vec<&'a SlotTime> {
        station
            .slots
            .iter()
            .filter(|slot| !self.occupied(&station.name, slot))
            .collect()
    }

    /// Catalog keys with no row in this schedule, in catalog order.
    pub fn unfilled_slots<'a>(&self, catalog: &'a Catalog) -> Vec<(&'a str, &'a SlotTime)> {
        catalog
            .stations
            .iter()
            .flat_map(|station| {
                station
                    .slots
                    .iter()
                    .filter(|slot| !self.occupied(&station.name, slot))
                    .map(|slot| (station.name.as_str(), slot))
            })
            .collect()
    }

    /// Manually places a worker on a (station, slot) key.
    ///
    /// Rejects keys outside the catalog, keys already holding a worker
    /// (unless the station is the overflow station), and workers already
    /// scheduled elsewhere. A row emptied by a previous removal is
    /// refilled in place.
    pub fn add_assignment(
        &mut self,
        catalog: &Catalog,
        station: &str,
        slot: &SlotTime,
        worker: Worker,
    ) -> Result<(), EditError> {
        let Some(catalog_station) = catalog.station(station) else {
            return Err(EditError::new(
                EditErrorKind::UnknownSlot,
                format!("Unknown station: {station}"),
            ));
        };
        if !catalog_station.slots.contains(slot) {
            return Err(EditError::new(
                EditErrorKind::UnknownSlot,
                format!(
                    "Station '{station}' has no slot (meal {}, interval {})",
                    slot.meal, slot.interval
                ),
            ));
        }
        if self.contains_worker(&worker.id) {
            return Err(EditError::new(
                EditErrorKind::WorkerAlreadyScheduled,
                format!("Worker '{}' is already scheduled", worker.id),
            ));
        }

        // Refill an emptied row in place.
        if let Some(row) = self
            .assignments
            .iter_mut()
            .find(|a| a.station == station && a.slot == *slot && a.worker.is_none())
        {
            row.worker = Some(worker);
            return Ok(());
        }

        if !catalog_station.is_overflow && self.worker_at(station, slot).is_some() {
            return Err(EditError::new(
                EditErrorKind::SlotOccupied,
                format!(
                    "Station '{station}' slot (meal {}, interval {}) is occupied",
                    slot.meal, slot.interval
                ),
            ));
        }

        self.push(Assignment::new(station, slot.clone(), worker));
        Ok(())
    }

    /// Manually removes the worker at a (station, slot) key.
    ///
    /// The row is kept with an empty worker so the slot stays visible;
    /// returns the removed worker.
    pub fn remove_assignment(
        &mut self,
        station: &str,
        slot: &SlotTime,
    ) -> Result<Worker, EditError> {
        self.assignments
            .iter_mut()
            .find(|a| a.station == station && a.slot == *slot && a.worker.is_some())
            .and_then(|a| a.worker.take())
            .ok_or_else(|| {
                EditError::new(
                    EditErrorKind::AssignmentNotFound,
                    format!(
                        "No worker at station '{station}' slot (meal {}, interval {})",
                        slot.meal, slot.interval
                    ),
                )
            })
    }
}
