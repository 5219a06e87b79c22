//! # Haul Planner
//!
//! Greedy route planning for pickup-and-delivery hauling missions.
//!
//! Two strategies turn a batch of missions into an ordered list of stops:
//! - LIFO: always discharge held cargo before acquiring more
//! - Nearest neighbor: tour every participating location in proximity order
//!
//! Location proximity is supplied by a [`ProximityRanker`]. Without one the
//! planner falls back to lexicographic order.

pub mod extract;
mod ledger;
mod lifo;
mod nearest;
pub mod planner;
pub mod proximity;
pub mod tiers;

pub use extract::{extract_objectives, extract_objectives_from_json};
pub use planner::{PlannerConfig, RoutePlanner};
pub use proximity::{LexicalOrder, NearestLocationResolver, ProximityRanker};
pub use tiers::{LocationGroup, LocationKind, PlanetSystem, ProximityGroups, TieredProximity};
