//! Error types for route planning.

use thiserror::Error;

use crate::objective::ObjectiveId;
use crate::route::RouteStrategy;

/// Main error type for hauling route operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HaulError {
    /// Mission or configuration input was not valid JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Planner configuration was rejected.
    #[error("Invalid planner configuration: {0}")]
    InvalidConfig(String),

    /// A route strategy name did not match any known strategy.
    #[error("Unknown route strategy: {0}")]
    UnknownStrategy(String),

    /// A planned route broke one of its invariants.
    #[error("{strategy} route violated an invariant: {violation}")]
    InvariantViolated {
        strategy: RouteStrategy,
        violation: RouteViolation,
    },
}

impl HaulError {
    /// Returns the broken route invariant, if this error carries one.
    pub fn violation(&self) -> Option<&RouteViolation> {
        match self {
            HaulError::InvariantViolated { violation, .. } => Some(violation),
            _ => None,
        }
    }
}

/// A single broken route invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteViolation {
    /// Stop numbers are not exactly `1..=N`.
    #[error("stop at position {position} is numbered {found}, expected {expected}")]
    StopNumbering {
        position: usize,
        expected: usize,
        found: usize,
    },

    /// A stop does not start with the cargo the previous stop ended with.
    #[error("stop {stop_number} starts with {found} SCU, previous stop ended with {expected}")]
    CargoDiscontinuity {
        stop_number: usize,
        expected: u64,
        found: u64,
    },

    /// A stop's after-total does not match its pickups and deliveries.
    #[error("stop {stop_number} ends with {found} SCU, expected {expected}")]
    CargoMismatch {
        stop_number: usize,
        expected: i64,
        found: u64,
    },

    /// A stop unloads more cargo than the hold contains.
    #[error("stop {stop_number} would leave {cargo} SCU in the hold")]
    NegativeCargo { stop_number: usize, cargo: i64 },

    /// An objective appears in more than one pickup list.
    #[error("objective {id} picked up at stops {first} and {second}")]
    DuplicatePickup {
        id: ObjectiveId,
        first: usize,
        second: usize,
    },

    /// An objective appears in more than one delivery list.
    #[error("objective {id} delivered at stops {first} and {second}")]
    DuplicateDelivery {
        id: ObjectiveId,
        first: usize,
        second: usize,
    },

    /// An objective never appears in a pickup list.
    #[error("objective {id} is never picked up")]
    MissingPickup { id: ObjectiveId },

    /// An objective never appears in a delivery list.
    #[error("objective {id} is never delivered")]
    MissingDelivery { id: ObjectiveId },

    /// An objective is delivered at or before the stop that loads it.
    #[error("objective {id} delivered at stop {delivery_stop} but picked up at stop {pickup_stop}")]
    DeliveredBeforePickup {
        id: ObjectiveId,
        pickup_stop: usize,
        delivery_stop: usize,
    },

    /// A stop references an objective that was never extracted.
    #[error("stop {stop_number} references unknown objective {id}")]
    UnknownObjective { id: ObjectiveId, stop_number: usize },

    /// The route emitted more stops than the configured limit.
    #[error("route has {stops} stops, limit is {limit}")]
    StopLimitExceeded { limit: usize, stops: usize },
}

/// Convenience Result type for hauling route operations.
pub type Result<T> = std::result::Result<T, HaulError>;

impl From<serde_json::Error> for HaulError {
    fn from(err: serde_json::Error) -> Self {
        HaulError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_accessor() {
        let err = HaulError::InvariantViolated {
            strategy: RouteStrategy::Lifo,
            violation: RouteViolation::MissingDelivery { id: ObjectiveId(3) },
        };
        assert_eq!(
            err.violation(),
            Some(&RouteViolation::MissingDelivery { id: ObjectiveId(3) })
        );
        assert!(HaulError::InvalidConfig("x".into()).violation().is_none());
    }

    #[test]
    fn test_error_messages() {
        let err = HaulError::InvariantViolated {
            strategy: RouteStrategy::NearestNeighbor,
            violation: RouteViolation::NegativeCargo {
                stop_number: 4,
                cargo: -10,
            },
        };
        assert_eq!(
            err.to_string(),
            "nearest_neighbor route violated an invariant: stop 4 would leave -10 SCU in the hold"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err: HaulError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, HaulError::Serialization(_)));
    }
}
