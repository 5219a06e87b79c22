//! # Haul Core
//!
//! Core data model for cargo hauling routes.
//!
//! This crate provides the fundamental building blocks:
//! - [`MissionRecord`] - Mission input as received from a host application
//! - [`Objective`] - One pickup-then-deliver unit of cargo work
//! - [`Stop`] - One visited location with its cargo activity
//! - [`Route`] - An ordered itinerary with summary totals
//! - [`verify_route`] - Checks the cargo and ordering invariants of a route
//! - [`HaulError`] - Error types

pub mod error;
pub mod mission;
pub mod objective;
pub mod route;
pub mod stop;
pub mod verify;

// Re-exports for convenience
pub use error::{HaulError, Result, RouteViolation};
pub use mission::{parse_missions, MissionId, MissionRecord, ObjectiveRecord, UNKNOWN_LOCATION};
pub use objective::{Objective, ObjectiveId};
pub use route::{Route, RouteStrategy, RouteSummary};
pub use stop::Stop;
pub use verify::verify_route;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{HaulError, Result, RouteViolation};
    pub use crate::mission::{MissionId, MissionRecord, ObjectiveRecord};
    pub use crate::objective::{Objective, ObjectiveId};
    pub use crate::route::{Route, RouteStrategy, RouteSummary};
    pub use crate::stop::Stop;
}
