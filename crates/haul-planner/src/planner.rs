//! Route planner and configuration.

use std::collections::BTreeSet;
use std::sync::Arc;

use haul_core::{
    verify_route, HaulError, MissionRecord, Objective, Result, Route, RouteStrategy,
    RouteViolation, Stop,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::extract::extract_objectives;
use crate::ledger::Itinerary;
use crate::proximity::{NearestLocationResolver, ProximityRanker};
use crate::{lifo, nearest};

/// Configuration for the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Strategy used by [`RoutePlanner::plan`].
    pub strategy: RouteStrategy,

    /// Check every planned route against its invariants.
    pub verify_routes: bool,

    /// Maximum number of stops a planned route may have.
    pub max_stops: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: RouteStrategy::Lifo,
            verify_routes: true,
            max_stops: 10_000,
        }
    }
}

impl PlannerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(json)
            .map_err(|err| HaulError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_stops == 0 {
            return Err(HaulError::InvalidConfig(
                "max_stops must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Plans hauling routes with a configurable strategy.
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    config: PlannerConfig,
    resolver: NearestLocationResolver,
}

impl RoutePlanner {
    /// Create a planner with default configuration and lexical tie-breaking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a planner with custom configuration.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            config,
            resolver: NearestLocationResolver::default(),
        }
    }

    /// Use `ranker` to decide which location is nearest.
    pub fn with_ranker(mut self, ranker: Arc<dyn ProximityRanker>) -> Self {
        self.resolver = NearestLocationResolver::new(ranker);
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PlannerConfig) {
        self.config = config;
    }

    pub fn extract_objectives(&self, missions: &[MissionRecord]) -> Vec<Objective> {
        extract_objectives(missions)
    }

    pub fn find_nearest(&self, current: &str, candidates: &BTreeSet<String>) -> String {
        self.resolver.find_nearest(current, candidates)
    }

    /// Stops for the delivery-priority strategy.
    pub fn build_lifo_route(&self, missions: &[MissionRecord], start_location: &str) -> Vec<Stop> {
        self.build(RouteStrategy::Lifo, extract_objectives(missions), start_location)
            .stops
    }

    /// Stops for the nearest-neighbor strategy.
    pub fn build_proximity_route(
        &self,
        missions: &[MissionRecord],
        start_location: &str,
    ) -> Vec<Stop> {
        self.build(
            RouteStrategy::NearestNeighbor,
            extract_objectives(missions),
            start_location,
        )
        .stops
    }

    /// Plan a route with the configured strategy.
    pub fn plan(&self, missions: &[MissionRecord], start_location: &str) -> Result<Route> {
        self.plan_with(self.config.strategy, missions, start_location)
    }

    /// Plan a route with an explicit strategy.
    pub fn plan_with(
        &self,
        strategy: RouteStrategy,
        missions: &[MissionRecord],
        start_location: &str,
    ) -> Result<Route> {
        let objectives = extract_objectives(missions);
        info!(
            "Planning {} route for {} objectives from {}",
            strategy,
            objectives.len(),
            start_location
        );

        let itinerary = self.build(strategy, objectives.clone(), start_location);
        self.check(strategy, &objectives, &itinerary.stops)?;

        let route = Route::new(strategy, start_location, itinerary.stops)
            .with_drain_stops(itinerary.drain_stops);
        info!(
            "Planned {} route {} with {} stops, peak cargo {} SCU",
            strategy, route.id, route.summary.stop_count, route.summary.peak_cargo
        );
        Ok(route)
    }

    fn build(
        &self,
        strategy: RouteStrategy,
        objectives: Vec<Objective>,
        start_location: &str,
    ) -> Itinerary {
        match strategy {
            RouteStrategy::Lifo => lifo::build(&self.resolver, objectives, start_location),
            RouteStrategy::NearestNeighbor => {
                nearest::build(&self.resolver, objectives, start_location)
            }
        }
    }

    fn check(
        &self,
        strategy: RouteStrategy,
        objectives: &[Objective],
        stops: &[Stop],
    ) -> Result<()> {
        let violation = if stops.len() > self.config.max_stops {
            Some(RouteViolation::StopLimitExceeded {
                limit: self.config.max_stops,
                stops: stops.len(),
            })
        } else if self.config.verify_routes {
            verify_route(objectives, stops).err()
        } else {
            None
        };

        match violation {
            Some(violation) => {
                warn!("Rejecting {} route: {}", strategy, violation);
                Err(HaulError::InvariantViolated {
                    strategy,
                    violation,
                })
            }
            None => Ok(()),
        }
    }
}
