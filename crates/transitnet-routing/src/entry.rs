use serde::{Deserialize, Serialize};
use transitnet_core::{Cost, StopId, INFINITY};

/// One row of a routing table: the best next hop toward some destination and
/// the total travel cost via that hop.
///
/// An entry with no next hop carries the cost [`INFINITY`] and means "no
/// known route". The two fields always agree: `next` is `None` exactly when
/// the cost is infinite, and a routed entry never carries the sentinel cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingEntry {
    next: Option<StopId>,
    cost: Cost,
}

impl RoutingEntry {
    /// The sentinel entry for a destination with no known route.
    pub fn no_route() -> Self {
        Self {
            next: None,
            cost: INFINITY,
        }
    }

    /// Create an entry routing via `next` at the given cost.
    ///
    /// A missing next hop or a sentinel cost degrades to [`Self::no_route`],
    /// so the next-hop/cost agreement cannot be violated from outside.
    pub fn new(next: Option<StopId>, cost: Cost) -> Self {
        match next {
            Some(next) if cost != INFINITY => Self {
                next: Some(next),
                cost,
            },
            _ => Self::no_route(),
        }
    }

    /// Travel cost to the destination, or [`INFINITY`] when no route is known.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Next stop toward the destination, or `None` when no route is known.
    pub fn next(&self) -> Option<StopId> {
        self.next
    }

    /// Returns true if this entry is the no-route sentinel.
    pub fn is_unreachable(&self) -> bool {
        self.next.is_none()
    }
}

impl Default for RoutingEntry {
    fn default() -> Self {
        Self::no_route()
    }
}
