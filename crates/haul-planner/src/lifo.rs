//! Delivery-priority (LIFO) strategy.
//!
//! Held cargo is always discharged before more is acquired: while the hold
//! is non-empty the next stop is the nearest delivery point of held cargo,
//! and only an empty hold sends the hauler to the nearest pickup.

use haul_core::Objective;
use tracing::debug;

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

    ledger.visit(start_location, Visit::Collect);

    // Candidate sets are never empty here: a non-empty hold has delivery
    // points and an empty hold with work left has pending pickups.
    while ledger.has_work() {
        let candidates = if ledger.hold_is_empty() {
            ledger.pickup_locations()
        } else {
            ledger.delivery_locations()
        };
        let next = resolver.find_nearest(ledger.current_location(), &candidates);
        debug!("Heading from {} to {}", ledger.current_location(), next);
        ledger.visit(&next, Visit::Exchange);
    }

    debug!("LIFO route delivered {} objectives", ledger.completed_count());
    ledger.into_itinerary(0)
}
