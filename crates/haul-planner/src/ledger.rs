//! Cargo ledger shared by both strategies.
//!
//! Objectives live in a single arena, each tagged with where it currently is.
//! A tag only ever moves forward: pending, then in the hold, then completed.

use std::collections::BTreeSet;

use haul_core::{Objective, Stop};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CargoStatus {
    Pending,
    /// `loaded_seq` orders deliveries by load time.
    InHold { loaded_seq: usize },
    Completed { stop_number: usize },
}

#[derive(Debug)]
struct Entry {
    objective: Objective,
    status: CargoStatus,
}

/// What a visit is allowed to do at its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    Collect,
    Deliver,
    Exchange,
}

impl Visit {
    fn collects(self) -> bool {
        matches!(self, Visit::Collect | Visit::Exchange)
    }

    fn delivers(self) -> bool {
        matches!(self, Visit::Deliver | Visit::Exchange)
    }
}

/// Stops produced by a strategy.
#[derive(Debug, Default)]
pub(crate) struct Itinerary {
    pub stops: Vec<Stop>,
    /// Delivery-only stops emitted after a nearest-neighbor tour.
    pub drain_stops: usize,
}

#[derive(Debug)]
pub(crate) struct CargoLedger {
    entries: Vec<Entry>,
    stops: Vec<Stop>,
    current_location: String,
    loads: usize,
}

impl CargoLedger {
    pub fn new(objectives: Vec<Objective>, start_location: &str) -> Self {
        let entries = objectives
            .into_iter()
            .map(|objective| Entry {
                objective,
                status: CargoStatus::Pending,
            })
            .collect();

        Self {
            entries,
            stops: Vec::new(),
            current_location: start_location.to_string(),
            loads: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_location(&self) -> &str {
        &self.current_location
    }

    pub fn has_pending(&self) -> bool {
        self.entries.iter().any(|e| e.status == CargoStatus::Pending)
    }

    pub fn hold_is_empty(&self) -> bool {
        !self
            .entries
            .iter()
            .any(|e| matches!(e.status, CargoStatus::InHold { .. }))
    }

    /// True while anything remains to pick up or deliver.
    pub fn has_work(&self) -> bool {
        self.entries
            .iter()
            .any(|e| !matches!(e.status, CargoStatus::Completed { .. }))
    }

    pub fn hold_scu(&self) -> u64 {
        self.held().map(|e| u64::from(e.objective.scu_amount)).sum()
    }

    /// Distinct collection points of pending objectives.
    pub fn pickup_locations(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter(|e| e.status == CargoStatus::Pending)
            .map(|e| e.objective.collect_from.clone())
            .collect()
    }

    /// Distinct delivery points of held objectives.
    pub fn delivery_locations(&self) -> BTreeSet<String> {
        self.held().map(|e| e.objective.deliver_to.clone()).collect()
    }

    /// Every collection and delivery point.
    pub fn all_locations(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .flat_map(|e| [e.objective.collect_from.clone(), e.objective.deliver_to.clone()])
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, CargoStatus::Completed { .. }))
            .count()
    }

    /// Move to `location` and act there.
    ///
    /// Deliveries are applied before pickups. A stop is emitted only when
    /// something was loaded or unloaded; the current location advances
    /// either way.
    pub fn visit(&mut self, location: &str, visit: Visit) -> Option<&Stop> {
        self.current_location = location.to_string();
        let stop_number = self.stops.len() + 1;
        let cargo_before = self.hold_scu();

        let mut unloading: Vec<(usize, usize)> = Vec::new();
        let mut loading: Vec<usize> = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            match entry.status {
                CargoStatus::InHold { loaded_seq }
                    if visit.delivers() && entry.objective.delivers_to(location) =>
                {
                    unloading.push((loaded_seq, index));
                }
                CargoStatus::Pending
                    if visit.collects() && entry.objective.collects_at(location) =>
                {
                    loading.push(index);
                }
                _ => {}
            }
        }

        if unloading.is_empty() && loading.is_empty() {
            return None;
        }
        unloading.sort_unstable();

        let mut deliveries = Vec::with_capacity(unloading.len());
        for (_, index) in unloading {
            let entry = &mut self.entries[index];
            entry.status = CargoStatus::Completed { stop_number };
            deliveries.push(entry.objective.clone());
        }

        let mut pickups = Vec::with_capacity(loading.len());
        for index in loading {
            let entry = &mut self.entries[index];
            entry.status = CargoStatus::InHold {
                loaded_seq: self.loads,
            };
            self.loads += 1;
            pickups.push(entry.objective.clone());
        }

        let stop = Stop {
            stop_number,
            location: location.to_string(),
            pickups,
            deliveries,
            cargo_before,
            cargo_after: self.hold_scu(),
        };
        debug!(
            "Stop {} at {}: {} pickups, {} deliveries, cargo {} -> {} SCU",
            stop.stop_number,
            stop.location,
            stop.pickups.len(),
            stop.deliveries.len(),
            stop.cargo_before,
            stop.cargo_after
        );

        self.stops.push(stop);
        self.stops.last()
    }

    pub fn into_itinerary(self, drain_stops: usize) -> Itinerary {
        Itinerary {
            stops: self.stops,
            drain_stops,
        }
    }

    fn held(&self) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, CargoStatus::InHold { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haul_core::ObjectiveId;

    fn objective(id: usize, from: &str, to: &str, scu_amount: u32) -> Objective {
        Objective {
            id: ObjectiveId(id),
            mission_id: None,
            collect_from: from.into(),
            deliver_to: to.into(),
            scu_amount,
            reward: 0,
        }
    }

    #[test]
    fn test_visit_moves_status_forward() {
        let mut ledger = CargoLedger::new(
            vec![objective(0, "A", "B", 10), objective(1, "B", "C", 4)],
            "A",
        );
        assert_eq!(ledger.pickup_locations().len(), 2);

        let stop = ledger.visit("A", Visit::Collect).cloned().unwrap();
        assert_eq!(stop.stop_number, 1);
        assert_eq!(stop.cargo_after, 10);
        assert_eq!(ledger.delivery_locations().into_iter().collect::<Vec<_>>(), vec!["B"]);

        let stop = ledger.visit("B", Visit::Exchange).cloned().unwrap();
        assert_eq!(stop.deliveries[0].id, ObjectiveId(0));
        assert_eq!(stop.pickups[0].id, ObjectiveId(1));
        assert_eq!((stop.cargo_before, stop.cargo_after), (10, 4));
        assert_eq!(ledger.completed_count(), 1);
        assert!(!ledger.has_pending());
        assert!(ledger.has_work());
    }

    #[test]
    fn test_idle_visit_emits_nothing() {
        let mut ledger = CargoLedger::new(vec![objective(0, "A", "B", 10)], "Start");
        assert!(ledger.visit("B", Visit::Exchange).is_none());
        assert_eq!(ledger.current_location(), "B");
        assert!(ledger.visit("A", Visit::Deliver).is_none());
        assert!(ledger.hold_is_empty());
        assert!(ledger.into_itinerary(0).stops.is_empty());
    }

    #[test]
    fn test_deliveries_follow_load_order() {
        let mut ledger = CargoLedger::new(
            vec![objective(0, "B", "D", 1), objective(1, "A", "D", 2)],
            "A",
        );
        ledger.visit("A", Visit::Collect);
        ledger.visit("B", Visit::Collect);
        let stop = ledger.visit("D", Visit::Deliver).cloned().unwrap();
        let order: Vec<usize> = stop.deliveries.iter().map(|o| o.id.0).collect();
        assert_eq!(order, vec![1, 0]);
        assert!(!ledger.has_work());
    }

    #[test]
    fn test_all_locations() {
        let ledger = CargoLedger::new(
            vec![objective(0, "A", "B", 1), objective(1, "B", "C", 1)],
            "X",
        );
        assert_eq!(
            ledger.all_locations().into_iter().collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }
}
