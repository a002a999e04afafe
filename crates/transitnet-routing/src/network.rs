use std::collections::HashMap;

use transitnet_core::{Cost, Stop, StopId};

use crate::error::RoutingError;
use crate::table::RoutingTable;

/// A stop in the arena together with its adjacency and routing state.
#[derive(Debug, Clone)]
struct StopRecord {
    stop: Stop,
    neighbours: Vec<StopId>,
    table: RoutingTable,
}

/// The transport network: an arena of stops indexed by [`StopId`].
///
/// The stop graph may be cyclic, but because stops refer to each other by id
/// there are no ownership cycles. Each stop owns exactly one
/// [`RoutingTable`]; table-local queries live on the table itself, while the
/// operations that walk the whole network (neighbour registration, entry
/// transfer, traversal, synchronisation) live here and take ids.
///
/// Symmetric adjacency is the caller's responsibility: [`add_neighbour`]
/// registers one direction only. Use [`link`] for a two-way edge.
///
/// [`add_neighbour`]: Network::add_neighbour
/// [`link`]: Network::link
#[derive(Debug, Clone, Default)]
pub struct Network {
    stops: Vec<StopRecord>,
    by_name: HashMap<String, StopId>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new stop. Stop names are unique within a network.
    pub fn add_stop(&mut self, name: &str, x: i32, y: i32) -> Result<StopId, RoutingError> {
        let stop = Stop::new(name, x, y)?;
        if self.by_name.contains_key(stop.name()) {
            return Err(RoutingError::DuplicateStop {
                name: stop.name().to_string(),
            });
        }

        let id = StopId(self.stops.len() as u32);
        self.by_name.insert(stop.name().to_string(), id);
        self.stops.push(StopRecord {
            stop,
            neighbours: Vec::new(),
            table: RoutingTable::new(id),
        });
        tracing::debug!(stop = %id, name, "registered stop");
        Ok(id)
    }

    /// Number of stops in the network.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if no stops have been registered.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Look up a stop by id.
    pub fn stop(&self, id: StopId) -> Result<&Stop, RoutingError> {
        self.record(id).map(|record| &record.stop)
    }

    /// Look up a stop id by name.
    pub fn stop_by_name(&self, name: &str) -> Option<StopId> {
        self.by_name.get(name).copied()
    }

    /// The routing table owned by the given stop.
    pub fn table(&self, id: StopId) -> Result<&RoutingTable, RoutingError> {
        self.record(id).map(|record| &record.table)
    }

    /// The stops directly reachable from the given stop, in registration
    /// order.
    pub fn neighbours(&self, id: StopId) -> Result<&[StopId], RoutingError> {
        self.record(id).map(|record| record.neighbours.as_slice())
    }

    /// Register `neighbour` as directly reachable from `stop` and propagate
    /// the change through the network.
    ///
    /// The direct edge costs the Manhattan distance between the two stops and
    /// routes straight to the neighbour. The entry is installed even when the
    /// table already held an entry for the neighbour; it is not compared
    /// against the existing cost. The synchronisation pass that follows
    /// re-relaxes every table from there.
    pub fn add_neighbour(&mut self, stop: StopId, neighbour: StopId) -> Result<(), RoutingError> {
        let cost = self.stop(stop)?.distance_to(self.stop(neighbour)?);

        let record = &mut self.stops[stop.index()];
        if !record.neighbours.contains(&neighbour) {
            record.neighbours.push(neighbour);
        }
        record.table.set_direct(neighbour, cost);
        tracing::debug!(stop = %stop, neighbour = %neighbour, cost, "registered direct edge");

        self.synchronise(stop)
    }

    /// Register the edge on both endpoints.
    pub fn link(&mut self, a: StopId, b: StopId) -> Result<(), RoutingError> {
        self.add_neighbour(a, b)?;
        self.add_neighbour(b, a)
    }

    /// Propagate `from`'s routing knowledge into `to`'s table.
    ///
    /// For every destination `from` knows, proposes the route "via `from`, at
    /// `from`'s cost to the destination plus `from`'s cost to `to`". Only
    /// strictly cheaper proposals are accepted; this is one Bellman-Ford
    /// relaxation applied along one edge in one direction.
    ///
    /// `to` must be a neighbour of `from`.
    ///
    /// Returns true if any proposal changed `to`'s table.
    pub fn transfer_entries(&mut self, from: StopId, to: StopId) -> Result<bool, RoutingError> {
        if !self.record(from)?.neighbours.contains(&to) {
            return Err(RoutingError::NotNeighbours {
                stop: from,
                neighbour: to,
            });
        }

        // `to` came out of a neighbour list, so it is a valid arena id.
        let from_table = &self.stops[from.index()].table;
        let cost_to_other = from_table.cost_to(to);
        let proposals: Vec<(StopId, Cost)> = from_table
            .destinations()
            .map(|destination| {
                let candidate = from_table.cost_to(destination).saturating_add(cost_to_other);
                (destination, candidate)
            })
            .collect();

        let to_table = &mut self.stops[to.index()].table;
        let mut changed = false;
        for (destination, candidate) in proposals {
            changed |= to_table.add_or_update_entry(destination, candidate, from);
        }

        if changed {
            tracing::trace!(from = %from, to = %to, "transfer updated neighbour table");
        }
        Ok(changed)
    }

    /// Every stop reachable from `origin` by following neighbour edges,
    /// each exactly once.
    ///
    /// Depth-first search with an explicit stack: pop a stop, push each of
    /// its neighbours that has not been seen yet, then append the popped stop
    /// to the seen list. The returned order is pop order.
    pub fn traverse(&self, origin: StopId) -> Result<Vec<StopId>, RoutingError> {
        self.record(origin)?;

        let mut seen: Vec<StopId> = Vec::new();
        let mut stack: Vec<StopId> = vec![origin];

        while let Some(current) = stack.pop() {
            for &neighbour in &self.stops[current.index()].neighbours {
                if !seen.contains(&neighbour) {
                    stack.push(neighbour);
                }
            }
            if !seen.contains(&current) {
                seen.push(current);
            }
        }

        Ok(seen)
    }

    /// Drive the component reachable from `origin` to convergence.
    ///
    /// Each pass walks every reachable stop and transfers its entries to each
    /// of its neighbours. If any transfer in the pass changed a table, the
    /// whole pass repeats; the loop ends on the first pass with no changes.
    /// Termination is guaranteed: costs are non-negative, only ever decrease,
    /// and the stop set is finite, so the tables cannot change forever.
    pub fn synchronise(&mut self, origin: StopId) -> Result<(), RoutingError> {
        let mut passes = 0u32;
        loop {
            passes += 1;
            let mut changed = false;
            for stop in self.traverse(origin)? {
                let neighbours = self.stops[stop.index()].neighbours.clone();
                for neighbour in neighbours {
                    changed |= self.transfer_entries(stop, neighbour)?;
                }
            }
            if !changed {
                break;
            }
        }
        tracing::debug!(origin = %origin, passes, "network synchronised");
        Ok(())
    }

    fn record(&self, id: StopId) -> Result<&StopRecord, RoutingError> {
        self.stops
            .get(id.index())
            .ok_or(RoutingError::UnknownStop { id })
    }
}
