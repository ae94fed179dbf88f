//! Station/slot catalog model.
//!
//! The catalog is the static staffing configuration: an ordered list of
//! stations, each owning an ordered list of shift-time slots. Exactly
//! one station is flagged as the overflow station; it absorbs every
//! worker not placed elsewhere. The catalog is read-only configuration
//! and is never mutated during a generation cycle.

use serde::{Deserialize, Serialize};

/// One staffing window within a station.
///
/// Both labels are opaque to the algorithm: `meal` drives the
/// anti-repeat rule (a worker should not eat at the same time two
/// periods in a row), `interval` only distinguishes slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotTime {
    /// Meal-break label (e.g. "21:00").
    pub meal: String,
    /// Working-interval label (e.g. "00:00-02:00").
    pub interval: String,
}

impl SlotTime {
    /// Creates a slot time.
    pub fn new(meal: impl Into<String>, interval: impl Into<String>) -> Self {
        Self {
            meal: meal.into(),
            interval: interval.into(),
        }
    }
}

/// A staffed post with a fixed list of shift-time slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Station name, unique within a catalog.
    pub name: String,
    /// Ordered shift-time slots owned by this station.
    pub slots: Vec<SlotTime>,
    /// Whether this station absorbs leftover workers.
    pub is_overflow: bool,
}

impl Station {
    /// Creates a regular (non-overflow) station.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
            is_overflow: false,
        }
    }

    /// Creates an overflow station.
    pub fn overflow(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
            is_overflow: true,
        }
    }

    /// Adds a slot.
    pub fn with_slot(mut self, meal: impl Into<String>, interval: impl Into<String>) -> Self {
        self.slots.push(SlotTime::new(meal, interval));
        self
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// The static, ordered station catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Stations in canonical fill order. The overflow station is
    /// conventionally last (see `validation::validate_catalog`).
    pub stations: Vec<Station>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a station.
    pub fn with_station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }

    /// Looks up a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name == name)
    }

    /// The overflow station, if one is configured.
    pub fn overflow_station(&self) -> Option<&Station> {
        self.stations.iter().find(|s| s.is_overflow)
    }

    /// Non-overflow stations in catalog order.
    pub fn regular_stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter().filter(|s| !s.is_overflow)
    }

    /// Total slot count across non-overflow stations.
    pub fn total_regular_slots(&self) -> usize {
        self.regular_stations().map(Station::slot_count).sum()
    }

    /// Whether (station, slot) is a key of this catalog.
    pub fn contains_slot(&self, station: &str, slot: &SlotTime) -> bool {
        self.station(station)
            .map(|s| s.slots.contains(slot))
            .unwrap_or(false)
    }
}
