//! Nearest-location resolution.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

/// Orders locations by ascending distance from an origin.
///
/// Implementations are consulted only for candidate sets of two or more
/// locations and should return a total ordering of `locations`. The resolver
/// consumes the first element.
pub trait ProximityRanker: Send + Sync {
    fn order_by_proximity(&self, locations: &BTreeSet<String>, origin: &str) -> Vec<String>;
}

/// Ranker with no notion of distance: lexicographic order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalOrder;

impl ProximityRanker for LexicalOrder {
    fn order_by_proximity(&self, locations: &BTreeSet<String>, _origin: &str) -> Vec<String> {
        locations.iter().cloned().collect()
    }
}

/// Picks the next destination from a candidate set.
#[derive(Clone)]
pub struct NearestLocationResolver {
    ranker: Arc<dyn ProximityRanker>,
}

impl NearestLocationResolver {
    /// Create a resolver backed by the given ranker.
    pub fn new(ranker: Arc<dyn ProximityRanker>) -> Self {
        Self { ranker }
    }

    /// Create a resolver that breaks ties lexicographically.
    pub fn lexical() -> Self {
        Self::new(Arc::new(LexicalOrder))
    }

    /// Resolve the candidate nearest to `current`.
    ///
    /// An empty candidate set returns `current` unchanged, so callers must
    /// only pass non-empty sets when they need to make progress. A single
    /// candidate is returned without consulting the ranker.
    pub fn find_nearest(&self, current: &str, candidates: &BTreeSet<String>) -> String {
        let mut iter = candidates.iter();
        let (first, second) = (iter.next(), iter.next());
        match (first, second) {
            (None, _) => {
                debug!("No candidates to resolve from {}", current);
                current.to_string()
            }
            (Some(only), None) => only.clone(),
            (Some(lowest), Some(_)) => {
                let ordered = self.ranker.order_by_proximity(candidates, current);
                if let Some(nearest) = ordered
                    .first()
                    .filter(|location| candidates.contains(*location))
                {
                    return nearest.clone();
                }

                warn!(
                    "Proximity ranker led with {:?}, which is not a candidate from {}",
                    ordered.first(),
                    current
                );
                ordered
                    .into_iter()
                    .find(|location| candidates.contains(location))
                    .unwrap_or_else(|| lowest.clone())
            }
        }
    }
}

impl Default for NearestLocationResolver {
    fn default() -> Self {
        Self::lexical()
    }
}

impl fmt::Debug for NearestLocationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NearestLocationResolver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn set(locations: &[&str]) -> BTreeSet<String> {
        locations.iter().map(|l| l.to_string()).collect()
    }

    /// Ranks by a fixed preference list, counting calls.
    struct Fixed {
        order: Vec<&'static str>,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(order: &[&'static str]) -> Self {
            Self {
                order: order.to_vec(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ProximityRanker for Fixed {
        fn order_by_proximity(&self, _locations: &BTreeSet<String>, _origin: &str) -> Vec<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.order.iter().map(|l| l.to_string()).collect()
        }
    }

    #[test]
    fn test_lexical_tie_break() {
        let resolver = NearestLocationResolver::default();
        assert_eq!(resolver.find_nearest("Start", &set(&["Z", "A"])), "A");
    }

    #[test]
    fn test_empty_candidates_return_current() {
        let resolver = NearestLocationResolver::lexical();
        assert_eq!(resolver.find_nearest("Here", &BTreeSet::new()), "Here");
    }

    #[test]
    fn test_single_candidate_skips_ranker() {
        let ranker = Arc::new(Fixed::new(&["Elsewhere"]));
        let resolver = NearestLocationResolver::new(ranker.clone());
        assert_eq!(resolver.find_nearest("Here", &set(&["Only"])), "Only");
        assert_eq!(ranker.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_ranker_first_element_wins() {
        let ranker = Arc::new(Fixed::new(&["Z", "M", "A"]));
        let resolver = NearestLocationResolver::new(ranker.clone());
        assert_eq!(resolver.find_nearest("Here", &set(&["A", "M", "Z"])), "Z");
        assert_eq!(ranker.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_ranker_outside_candidates() {
        let resolver = NearestLocationResolver::new(Arc::new(Fixed::new(&["Nowhere", "M"])));
        assert_eq!(resolver.find_nearest("Here", &set(&["A", "M"])), "M");

        let resolver = NearestLocationResolver::new(Arc::new(Fixed::new(&[])));
        assert_eq!(resolver.find_nearest("Here", &set(&["Z", "M"])), "M");
    }
}
