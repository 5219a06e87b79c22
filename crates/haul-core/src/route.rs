//! Planned routes and their summary totals.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HaulError;
use crate::mission::MissionId;
use crate::stop::Stop;

/// Strategy used to order the stops of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteStrategy {
    /// Deliver held cargo before acquiring more (default).
    #[default]
    Lifo,
    /// Tour every participating location in nearest-unvisited order.
    NearestNeighbor,
}

impl RouteStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStrategy::Lifo => "lifo",
            RouteStrategy::NearestNeighbor => "nearest_neighbor",
        }
    }
}

impl fmt::Display for RouteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteStrategy {
    type Err = HaulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lifo" => Ok(RouteStrategy::Lifo),
            "nearest_neighbor" | "proximity" => Ok(RouteStrategy::NearestNeighbor),
            _ => Err(HaulError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Totals over a route, for display by a host application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub stop_count: usize,
    pub objective_count: usize,
    /// Distinct mission identifiers across all pickups.
    pub mission_count: usize,
    pub total_scu: u64,
    /// Mission rewards, each identified mission counted once.
    pub total_reward: i64,
    /// Largest hold total after any stop.
    pub peak_cargo: u64,
    /// Distinct stop locations.
    pub locations_visited: usize,
    /// Delivery-only stops emitted after a nearest-neighbor tour.
    pub drain_stops: usize,
}

impl RouteSummary {
    /// Compute totals from a stop sequence.
    ///
    /// Objectives without a mission identifier each contribute their reward,
    /// since there is no way to tell which of them share a mission.
    pub fn from_stops(stops: &[Stop]) -> Self {
        let mut missions: HashSet<&MissionId> = HashSet::new();
        let mut locations: BTreeSet<&str> = BTreeSet::new();
        let mut summary = RouteSummary {
            stop_count: stops.len(),
            ..Default::default()
        };

        for stop in stops {
            locations.insert(stop.location.as_str());
            summary.peak_cargo = summary.peak_cargo.max(stop.cargo_after);

            for objective in &stop.pickups {
                summary.objective_count += 1;
                summary.total_scu += u64::from(objective.scu_amount);
                match &objective.mission_id {
                    Some(id) => {
                        if missions.insert(id) {
                            summary.total_reward += objective.reward;
                        }
                    }
                    None => summary.total_reward += objective.reward,
                }
            }
        }

        summary.mission_count = missions.len();
        summary.locations_visited = locations.len();
        summary
    }
}

/// An ordered itinerary produced by one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Unique identifier for this route.
    pub id: Uuid,

    /// Strategy that produced the stops.
    pub strategy: RouteStrategy,

    /// Where the hauler starts.
    pub start_location: String,

    /// Ordered stops.
    pub stops: Vec<Stop>,

    /// Totals over the stops.
    pub summary: RouteSummary,

    /// Timestamp when the route was planned.
    pub created_at: DateTime<Utc>,
}

impl Route {
    /// Wrap a stop sequence into a route and compute its summary.
    pub fn new(
        strategy: RouteStrategy,
        start_location: impl Into<String>,
        stops: Vec<Stop>,
    ) -> Self {
        let summary = RouteSummary::from_stops(&stops);
        Self {
            id: Uuid::new_v4(),
            strategy,
            start_location: start_location.into(),
            stops,
            summary,
            created_at: Utc::now(),
        }
    }

    /// Record how many trailing stops came from the drain phase.
    pub fn with_drain_stops(mut self, drain_stops: usize) -> Self {
        self.summary.drain_stops = drain_stops;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Stop locations in visiting order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.stops.iter().map(|stop| stop.location.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{Objective, ObjectiveId};

    fn objective(id: usize, mission: Option<&str>, scu_amount: u32, reward: i64) -> Objective {
        Objective {
            id: ObjectiveId(id),
            mission_id: mission.map(MissionId::from),
            collect_from: "A".into(),
            deliver_to: "B".into(),
            scu_amount,
            reward,
        }
    }

    fn stop(
        stop_number: usize,
        location: &str,
        pickups: Vec<Objective>,
        deliveries: Vec<Objective>,
        before: u64,
        after: u64,
    ) -> Stop {
        Stop {
            stop_number,
            location: location.into(),
            pickups,
            deliveries,
            cargo_before: before,
            cargo_after: after,
        }
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("lifo".parse::<RouteStrategy>().unwrap(), RouteStrategy::Lifo);
        assert_eq!(
            "Proximity".parse::<RouteStrategy>().unwrap(),
            RouteStrategy::NearestNeighbor
        );
        assert_eq!(
            "nearest_neighbor".parse::<RouteStrategy>().unwrap(),
            RouteStrategy::NearestNeighbor
        );
        assert!(matches!(
            "fastest".parse::<RouteStrategy>(),
            Err(HaulError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_strategy_serde() {
        let json = serde_json::to_string(&RouteStrategy::NearestNeighbor).unwrap();
        assert_eq!(json, "\"nearest_neighbor\"");
        assert_eq!(RouteStrategy::default(), RouteStrategy::Lifo);
    }

    #[test]
    fn test_summary_counts_mission_reward_once() {
        let a = objective(0, Some("M1"), 10, 5000);
        let b = objective(1, Some("M1"), 6, 5000);
        let c = objective(2, None, 4, 700);
        let stops = vec![
            stop(1, "A", vec![a.clone(), b.clone(), c.clone()], vec![], 0, 20),
            stop(2, "B", vec![], vec![a, b, c], 20, 0),
        ];

        let summary = RouteSummary::from_stops(&stops);
        assert_eq!(summary.stop_count, 2);
        assert_eq!(summary.objective_count, 3);
        assert_eq!(summary.mission_count, 1);
        assert_eq!(summary.total_scu, 20);
        assert_eq!(summary.total_reward, 5700);
        assert_eq!(summary.peak_cargo, 20);
        assert_eq!(summary.locations_visited, 2);
        assert_eq!(summary.drain_stops, 0);
    }

    #[test]
    fn test_route_wraps_stops() {
        let route = Route::new(RouteStrategy::Lifo, "A", Vec::new()).with_drain_stops(0);
        assert!(route.is_empty());
        assert_eq!(route.summary, RouteSummary::default());
        assert_eq!(route.start_location, "A");
    }
}
