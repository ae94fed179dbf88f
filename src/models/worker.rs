//! Worker model.
//!
//! Workers are the people placed into station slots. The roster itself
//! (creation, renaming, deactivation) is owned by an external store;
//! this crate only reads it. Only active workers are eligible for
//! assignment.

use serde::{Deserialize, Serialize};

/// A worker that can be assigned to a station slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Whether this worker may receive new assignments.
    pub active: bool,
}

impl Worker {
    /// Creates a new active worker.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            active: true,
        }
    }

    /// Sets the worker name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the worker as inactive.
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_builder() {
        let w = Worker::new("W1").with_name("Alice");
        assert_eq!(w.id, "W1");
        assert_eq!(w.name, "Alice");
        assert!(w.active);
    }

    #[test]
    fn test_worker_deactivated() {
        let w = Worker::new("W2").with_name("Bob").deactivated();
        assert!(!w.active);
    }
}
