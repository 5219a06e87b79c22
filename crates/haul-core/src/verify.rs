//! Route invariant checks.

use std::collections::{HashMap, HashSet};

use crate::error::RouteViolation;
use crate::objective::{Objective, ObjectiveId};
use crate::stop::Stop;

/// Check a stop sequence against the objectives it was planned from.
///
/// Verifies, in order: stop numbering is exactly `1..=N`; each stop starts
/// with the cargo the previous one ended with (zero for the first); each
/// stop's after-total equals before minus deliveries plus pickups and never
/// drops below zero; every objective is picked up once and delivered once,
/// strictly after its pickup; no stop moves an unknown objective.
///
/// Returns the first violation found.
pub fn verify_route(objectives: &[Objective], stops: &[Stop]) -> Result<(), RouteViolation> {
    let known: HashSet<ObjectiveId> = objectives.iter().map(|objective| objective.id).collect();
    let mut picked_up: HashMap<ObjectiveId, usize> = HashMap::new();
    let mut delivered: HashMap<ObjectiveId, usize> = HashMap::new();
    let mut hold = 0u64;

    for (position, stop) in stops.iter().enumerate() {
        let stop_number = position + 1;
        if stop.stop_number != stop_number {
            return Err(RouteViolation::StopNumbering {
                position,
                expected: stop_number,
                found: stop.stop_number,
            });
        }

        if stop.cargo_before != hold {
            return Err(RouteViolation::CargoDiscontinuity {
                stop_number,
                expected: hold,
                found: stop.cargo_before,
            });
        }

        let expected = stop.cargo_before as i64 - stop.scu_delivered() as i64
            + stop.scu_picked_up() as i64;
        if expected < 0 {
            return Err(RouteViolation::NegativeCargo {
                stop_number,
                cargo: expected,
            });
        }
        if expected as u64 != stop.cargo_after {
            return Err(RouteViolation::CargoMismatch {
                stop_number,
                expected,
                found: stop.cargo_after,
            });
        }

        for objective in &stop.deliveries {
            if !known.contains(&objective.id) {
                return Err(RouteViolation::UnknownObjective {
                    id: objective.id,
                    stop_number,
                });
            }
            if let Some(first) = delivered.insert(objective.id, stop_number) {
                return Err(RouteViolation::DuplicateDelivery {
                    id: objective.id,
                    first,
                    second: stop_number,
                });
            }
        }

        for objective in &stop.pickups {
            if !known.contains(&objective.id) {
                return Err(RouteViolation::UnknownObjective {
                    id: objective.id,
                    stop_number,
                });
            }
            if let Some(first) = picked_up.insert(objective.id, stop_number) {
                return Err(RouteViolation::DuplicatePickup {
                    id: objective.id,
                    first,
                    second: stop_number,
                });
            }
        }

        hold = stop.cargo_after;
    }

    for objective in objectives {
        let id = objective.id;
        let pickup_stop = picked_up
            .get(&id)
            .copied()
            .ok_or(RouteViolation::MissingPickup { id })?;
        let delivery_stop = delivered
            .get(&id)
            .copied()
            .ok_or(RouteViolation::MissingDelivery { id })?;

        if delivery_stop <= pickup_stop {
            return Err(RouteViolation::DeliveredBeforePickup {
                id,
                pickup_stop,
                delivery_stop,
            });
        }
    }

    Ok(())
}
