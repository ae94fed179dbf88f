//! Input validation for catalogs and rosters.
//!
//! Checks the static configuration and the worker roster before a
//! generation cycle. Detects:
//! - Duplicate station names, worker ids, or slots within a station
//! - Stations with no slots
//! - Missing, duplicated, or misplaced overflow station
//!
//! Validation is advisory: `RotationScheduler::generate` itself never
//! fails and simply works with whatever catalog it was given.

use std::collections::HashSet;

use crate::models::{Catalog, Worker};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identifier.
    DuplicateId,
    /// A station lists the same (meal, interval) slot twice.
    DuplicateSlot,
    /// A station has no slots.
    EmptyStation,
    /// No station is flagged as the overflow station.
    NoOverflowStation,
    /// More than one station is flagged as the overflow station.
    MultipleOverflowStations,
    /// The overflow station is not last in catalog order.
    OverflowNotLast,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the station catalog.
///
/// Checks:
/// 1. No duplicate station names
/// 2. No duplicate slots within a station
/// 3. Every station has at least one slot
/// 4. Exactly one overflow station, placed last in catalog order
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for station in &catalog.stations {
        if !names.insert(station.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate station name: {}", station.name),
            ));
        }

        if station.slots.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyStation,
                format!("Station '{}' has no slots", station.name),
            ));
        }

        let mut slots = HashSet::new();
        for slot in &station.slots {
            if !slots.insert((slot.meal.as_str(), slot.interval.as_str())) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSlot,
                    format!(
                        "Station '{}' lists slot (meal {}, interval {}) twice",
                        station.name, slot.meal, slot.interval
                    ),
                ));
            }
        }
    }

    let overflow_positions: Vec<usize> = catalog
        .stations
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_overflow)
        .map(|(i, _)| i)
        .collect();

    match overflow_positions.as_slice() {
        [] => errors.push(ValidationError::new(
            ValidationErrorKind::NoOverflowStation,
            "Catalog has no overflow station",
        )),
        [pos] => {
            if *pos != catalog.stations.len() - 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverflowNotLast,
                    format!(
                        "Overflow station '{}' is not last in catalog order",
                        catalog.stations[*pos].name
                    ),
                ));
            }
        }
        _ => errors.push(ValidationError::new(
            ValidationErrorKind::MultipleOverflowStations,
            format!("Catalog has {} overflow stations", overflow_positions.len()),
        )),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the worker roster.
///
/// Checks for duplicate worker ids.
pub fn validate_roster(roster: &[Worker]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for worker in roster {
        if !ids.insert(worker.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", worker.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Station;

    fn valid_catalog() -> Catalog {
        Catalog::new()
            .with_station(Station::new("A").with_slot("m1", "i1"))
            .with_station(Station::new("B").with_slot("m1", "i2").with_slot("m2", "i3"))
            .with_station(Station::overflow("C").with_slot("m1", "i4"))
    }

    #[test]
    fn test_valid_catalog() {
        assert!(validate_catalog(&valid_catalog()).is_ok());
    }

    #[test]
    fn test_duplicate_station_name() {
        let catalog = Catalog::new()
            .with_station(Station::new("A").with_slot("m1", "i1"))
            .with_station(Station::new("A").with_slot("m2", "i2"))
            .with_station(Station::overflow("C").with_slot("m1", "i4"));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_duplicate_slot_in_station() {
        let catalog = Catalog::new()
            .with_station(Station::new("A").with_slot("m1", "i1").with_slot("m1", "i1"))
            .with_station(Station::overflow("C").with_slot("m1", "i4"));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSlot));
    }

    #[test]
    fn test_empty_station() {
        let catalog = Catalog::new()
            .with_station(Station::new("A"))
            .with_station(Station::overflow("C").with_slot("m1", "i4"));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyStation));
    }

    #[test]
    fn test_no_overflow_station() {
        let catalog = Catalog::new().with_station(Station::new("A").with_slot("m1", "i1"));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoOverflowStation));
    }

    #[test]
    fn test_multiple_overflow_stations() {
        let catalog = Catalog::new()
            .with_station(Station::overflow("A").with_slot("m1", "i1"))
            .with_station(Station::overflow("B").with_slot("m1", "i2"));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MultipleOverflowStations));
    }

    #[test]
    fn test_overflow_not_last() {
        let catalog = Catalog::new()
            .with_station(Station::overflow("B").with_slot("m1", "i2"))
            .with_station(Station::new("A").with_slot("m1", "i1"));
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::OverflowNotLast));
    }

    #[test]
    fn test_roster_duplicate_id() {
        let roster = vec![
            Worker::new("W1").with_name("Alice"),
            Worker::new("W1").with_name("Alina"),
        ];
        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_valid_roster() {
        let roster = vec![Worker::new("W1"), Worker::new("W2")];
        assert!(validate_roster(&roster).is_ok());
    }
}
