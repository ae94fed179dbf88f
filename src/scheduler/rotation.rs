//! Two-phase rotation scheduler.
//!
//! # Algorithm
//!
//! 1. **Primary fill** — walk every non-overflow station in catalog
//!    order and every slot of that station in slot order; pick one
//!    eligible worker uniformly at random from the remaining pool.
//!    A slot with no eligible worker is left unfilled.
//! 2. **Overflow distribution** — every worker still in the pool is
//!    assigned to the overflow station, cycling through its slot list
//!    round-robin. Shared (station, slot) keys are permitted here and
//!    only here.
//!
//! Eligibility is the anti-repeat rule: a worker must not have held the
//! same station, nor any slot with the same meal label, in the previous
//! period's schedule.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{Assignment, Catalog, Schedule, SlotTime, Worker};

/// Whether a worker may take a slot, given the previous period.
///
/// A worker is eligible unless the previous schedule placed them at the
/// same station or at any slot sharing the meal label. Workers absent
/// from the previous schedule are eligible everywhere.
pub fn is_eligible(worker: &Worker, station: &str, slot: &SlotTime, previous: &Schedule) -> bool {
    !previous.was_at_station(&worker.id, station) && !previous.had_meal(&worker.id, &slot.meal)
}

/// Two-phase rotation scheduler over a fixed catalog.
///
/// Each call to [`generate`](RotationScheduler::generate) is fully
/// determined by its arguments (plus the RNG); no state is carried
/// between invocations. It never fails: an empty or exhausted pool
/// simply yields a smaller or overflow-only schedule.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use shift_rotation::models::{Catalog, Station, Worker};
/// use shift_rotation::scheduler::RotationScheduler;
///
/// let catalog = Catalog::new()
///     .with_station(Station::new("EMERGENCY").with_slot("21:00", "00:00-02:00"))
///     .with_station(Station::overflow("COVERAGE").with_slot("21:30", "02:00-04:00"));
/// let workers = vec![
///     Worker::new("W1").with_name("Alice"),
///     Worker::new("W2").with_name("Bob"),
/// ];
///
/// let scheduler = RotationScheduler::new(catalog);
/// let mut rng = SmallRng::seed_from_u64(42);
/// let schedule = scheduler.generate_with(&workers, None, &mut rng);
/// // One worker on EMERGENCY, the other flows into COVERAGE.
/// assert_eq!(schedule.assignment_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RotationScheduler {
    catalog: Catalog,
}

impl RotationScheduler {
    /// Creates a scheduler over a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this scheduler fills.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generates a new schedule using the thread-local RNG.
    pub fn generate(&self, workers: &[Worker], previous: Option<&Schedule>) -> Schedule {
        self.generate_with(workers, previous, &mut rand::rng())
    }

    /// Generates a new schedule with a caller-supplied RNG.
    ///
    /// Tests inject a seeded RNG here; the eligibility rule itself is
    /// unaffected by the RNG choice.
    pub fn generate_with<R: Rng>(
        &self,
        workers: &[Worker],
        previous: Option<&Schedule>,
        rng: &mut R,
    ) -> Schedule {
        let empty = Schedule::new();
        let previous = previous.unwrap_or(&empty);

        let mut pool: Vec<&Worker> = workers.iter().filter(|w| w.active).collect();
        let mut schedule = Schedule::new();

        // Phase 1: primary fill, slots handled independently.
        for station in self.catalog.regular_stations() {
            for slot in &station.slots {
                let eligible: Vec<usize> = pool
                    .iter()
                    .enumerate()
                    .filter(|(_, w)| is_eligible(w, &station.name, slot, previous))
                    .map(|(i, _)| i)
                    .collect();

                if let Some(&idx) = eligible.choose(rng) {
                    let worker = pool.swap_remove(idx);
                    schedule.push(Assignment::new(&station.name, slot.clone(), worker.clone()));
                }
            }
        }

        // Phase 2: distribute the leftover pool round-robin.
        if let Some(overflow) = self.catalog.overflow_station() {
            if !overflow.slots.is_empty() {
                for (i, worker) in pool.iter().enumerate() {
                    let slot = overflow.slots[i % overflow.slots.len()].clone();
                    schedule.push(Assignment::new(&overflow.name, slot, (*worker).clone()));
                }
            }
        }

        schedule
    }
}
