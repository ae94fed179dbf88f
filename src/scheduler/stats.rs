//! Rotation quality metrics.
//!
//! Computes summary figures from a generated schedule: how much of the
//! catalog was covered, how many workers spilled into overflow, and how
//! many carry-overs from the previous period slipped through (only
//! possible via manual edits; generation itself never produces them at
//! regular stations).

use std::collections::HashMap;

use crate::models::{Catalog, Schedule};

/// Summary figures for one generated schedule.
#[derive(Debug, Clone)]
pub struct RotationStats {
    /// Regular (non-overflow) catalog slots holding a worker.
    pub filled_regular_slots: usize,
    /// Total regular slots in the catalog.
    pub total_regular_slots: usize,
    /// Fraction of regular slots filled (1.0 for an empty catalog).
    pub fill_rate: f64,
    /// Workers placed on the overflow station.
    pub overflow_headcount: usize,
    /// Rows emptied by manual removal.
    pub emptied_rows: usize,
    /// Workers holding the same station as in the previous period.
    pub station_repeats: usize,
    /// Workers holding a slot with the same meal label as in the
    /// previous period.
    pub meal_repeats: usize,
    /// Filled headcount per station.
    pub headcount_by_station: HashMap<String, usize>,
}

impl RotationStats {
    /// Computes stats for a schedule against its catalog and the
    /// previous period (if any).
    pub fn calculate(schedule: &Schedule, catalog: &Catalog, previous: Option<&Schedule>) -> Self {
        let total_regular_slots = catalog.total_regular_slots();

        let mut filled_regular_slots = 0;
        for station in catalog.regular_stations() {
            for slot in &station.slots {
                if schedule.worker_at(&station.name, slot).is_some() {
                    filled_regular_slots += 1;
                }
            }
        }

        let fill_rate = if total_regular_slots == 0 {
            1.0
        } else {
            filled_regular_slots as f64 / total_regular_slots as f64
        };

        let overflow_headcount = catalog
            .overflow_station()
            .map(|overflow| {
                schedule
                    .assignments_for_station(&overflow.name)
                    .iter()
                    .filter(|a| a.worker.is_some())
                    .count()
            })
            .unwrap_or(0);

        let emptied_rows = schedule
            .assignments
            .iter()
            .filter(|a| a.worker.is_none())
            .count();

        let mut station_repeats = 0;
        let mut meal_repeats = 0;
        if let Some(previous) = previous {
            for a in &schedule.assignments {
                if let Some(id) = a.worker_id() {
                    if previous.was_at_station(id, &a.station) {
                        station_repeats += 1;
                    }
                    if previous.had_meal(id, &a.slot.meal) {
                        meal_repeats += 1;
                    }
                }
            }
        }

        let mut headcount_by_station: HashMap<String, usize> = HashMap::new();
        for a in &schedule.assignments {
            if a.worker.is_some() {
                *headcount_by_station.entry(a.station.clone()).or_insert(0) += 1;
            }
        }

        Self {
            filled_regular_slots,
            total_regular_slots,
            fill_rate,
            overflow_headcount,
            emptied_rows,
            station_repeats,
            meal_repeats,
            headcount_by_station,
        }
    }

    /// Whether every regular catalog slot is filled.
    pub fn is_fully_covered(&self) -> bool {
        self.filled_regular_slots == self.total_regular_slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use crate::models::{Assignment, SlotTime, Station, Worker};
    use crate::scheduler::RotationScheduler;

    fn small_catalog() -> Catalog {
        Catalog::new()
            .with_station(Station::new("A").with_slot("m1", "i1").with_slot("m2", "i2"))
            .with_station(Station::overflow("B").with_slot("m1", "i3"))
    }

    #[test]
    fn test_full_coverage_stats() {
        let catalog = small_catalog();
        let scheduler = RotationScheduler::new(catalog.clone());
        let pool: Vec<Worker> = (0..4).map(|i| Worker::new(format!("W{i}"))).collect();
        let mut rng = SmallRng::seed_from_u64(9);
        let schedule = scheduler.generate_with(&pool, None, &mut rng);

        let stats = RotationStats::calculate(&schedule, &catalog, None);
        assert_eq!(stats.total_regular_slots, 2);
        assert_eq!(stats.filled_regular_slots, 2);
        assert!(stats.is_fully_covered());
        assert!((stats.fill_rate - 1.0).abs() < 1e-10);
        assert_eq!(stats.overflow_headcount, 2);
        assert_eq!(stats.headcount_by_station["B"], 2);
        assert_eq!(stats.station_repeats, 0);
    }

    #[test]
    fn test_partial_fill_and_emptied_rows() {
        let catalog = small_catalog();
        let mut schedule = Schedule::new();
        schedule.push(Assignment::new(
            "A",
            SlotTime::new("m1", "i1"),
            Worker::new("W1"),
        ));
        schedule.remove_assignment("A", &SlotTime::new("m1", "i1")).unwrap();

        let stats = RotationStats::calculate(&schedule, &catalog, None);
        assert_eq!(stats.filled_regular_slots, 0);
        assert_eq!(stats.emptied_rows, 1);
        assert!(!stats.is_fully_covered());
        assert!((stats.fill_rate - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_repeat_counters() {
        let catalog = small_catalog();

        let mut previous = Schedule::new();
        previous.push(Assignment::new(
            "A",
            SlotTime::new("m1", "i1"),
            Worker::new("W1"),
        ));

        // Manual edit reintroduces W1 at the same station and meal.
        let mut schedule = Schedule::new();
        schedule
            .add_assignment(&catalog, "A", &SlotTime::new("m1", "i1"), Worker::new("W1"))
            .unwrap();

        let stats = RotationStats::calculate(&schedule, &catalog, Some(&previous));
        assert_eq!(stats.station_repeats, 1);
        assert_eq!(stats.meal_repeats, 1);
    }

    #[test]
    fn test_empty_catalog_fill_rate() {
        let stats = RotationStats::calculate(&Schedule::new(), &Catalog::new(), None);
        assert!((stats.fill_rate - 1.0).abs() < 1e-10);
        assert!(stats.is_fully_covered());
    }
}
