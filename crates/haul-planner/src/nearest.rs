//! Nearest-neighbor (proximity) strategy.
//!
//! Tours every location that takes part in any objective, always moving to
//! the nearest unvisited one and loading or unloading whatever is possible
//! on arrival. Cargo still held when the tour ends is drained by visiting
//! the nearest remaining delivery points.

use std::collections::BTreeSet;

use haul_core::Objective;
use tracing::{debug, warn};

use crate::ledger::{CargoLedger, Itinerary, Visit};
use crate::proximity::NearestLocationResolver;

pub(crate) fn build(
    resolver: &NearestLocationResolver,
    objectives: Vec<Objective>,
    start_location: &str,
) -> Itinerary {
    let mut ledger = CargoLedger::new(objectives, start_location);
    if ledger.is_empty() {
        return Itinerary::default();
    }

    let all_locations = ledger.all_locations();
    let mut visited: BTreeSet<String> = BTreeSet::new();
    let mut current = start_location.to_string();

    loop {
        ledger.visit(&current, Visit::Exchange);
        visited.insert(current.clone());

        let unvisited: BTreeSet<String> = all_locations.difference(&visited).cloned().collect();
        if unvisited.is_empty() {
            break;
        }
        current = resolver.find_nearest(&current, &unvisited);
        debug!("Touring to {} ({} locations left)", current, unvisited.len() - 1);
    }

    // Every collection point was toured, so nothing can still be pending.
    debug_assert!(!ledger.has_pending());

    let mut drain_stops = 0;
    while !ledger.hold_is_empty() {
        let candidates = ledger.delivery_locations();
        let next = resolver.find_nearest(ledger.current_location(), &candidates);
        if let Some(stop) = ledger.visit(&next, Visit::Deliver) {
            warn!(
                "Drain stop {} at {}: {} deliveries left over from the tour",
                stop.stop_number,
                stop.location,
                stop.deliveries.len()
            );
            drain_stops += 1;
        }
    }

    debug!(
        "Nearest-neighbor route delivered {} objectives, {} drain stops",
        ledger.completed_count(),
        drain_stops
    );
    ledger.into_itinerary(drain_stops)
}
