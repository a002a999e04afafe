use indexmap::IndexMap;
use transitnet_core::{Cost, StopId, INFINITY};

use crate::entry::RoutingEntry;

/// One stop's routing table: the best known route to every destination it has
/// heard of so far.
///
/// The table belongs to exactly one home stop and always contains the
/// self-entry (cost 0, next hop = the home stop itself). Once a destination
/// is known its stored cost only ever decreases; [`add_or_update_entry`] is
/// the single place that rule is enforced, so the stored costs are
/// monotonically tightening estimates of the true shortest path.
///
/// Entries keep insertion order, so enumeration is deterministic.
///
/// [`add_or_update_entry`]: RoutingTable::add_or_update_entry
#[derive(Debug, Clone)]
pub struct RoutingTable {
    home: StopId,
    entries: IndexMap<StopId, RoutingEntry>,
}

impl RoutingTable {
    /// Create the routing table for `home`, seeded with its self-entry.
    pub fn new(home: StopId) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(home, RoutingEntry::new(Some(home), 0));
        Self { home, entries }
    }

    /// The stop this table routes for.
    pub fn home(&self) -> StopId {
        self.home
    }

    /// Cost of the best known route to `destination`, or [`INFINITY`] if the
    /// destination is not in the table.
    pub fn cost_to(&self, destination: StopId) -> Cost {
        self.entries
            .get(&destination)
            .map_or(INFINITY, |entry| entry.cost())
    }

    /// Next stop on the best known route to `destination`, or `None` if the
    /// destination is not in the table.
    pub fn next_stop(&self, destination: StopId) -> Option<StopId> {
        self.entries.get(&destination).and_then(|entry| entry.next())
    }

    /// Snapshot of every known destination and its cost, in table order.
    pub fn costs(&self) -> IndexMap<StopId, Cost> {
        self.entries
            .iter()
            .map(|(destination, entry)| (*destination, entry.cost()))
            .collect()
    }

    /// Destinations currently known to this table, in table order.
    pub fn destinations(&self) -> impl Iterator<Item = StopId> + '_ {
        self.entries.keys().copied()
    }

    /// Number of destinations in the table. At least 1: the self-entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false in practice; the self-entry is seeded at construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The relaxation primitive: propose routing to `destination` via
    /// `intermediate` at `new_cost`.
    ///
    /// An unknown destination is inserted as proposed. A known destination is
    /// replaced only when the proposal is strictly cheaper; an equal or worse
    /// proposal leaves the table untouched.
    ///
    /// Returns true if the table changed.
    pub fn add_or_update_entry(
        &mut self,
        destination: StopId,
        new_cost: Cost,
        intermediate: StopId,
    ) -> bool {
        if !self.entries.contains_key(&destination) {
            self.entries
                .insert(destination, RoutingEntry::new(Some(intermediate), new_cost));
            return true;
        }

        if new_cost < self.cost_to(destination) {
            self.entries
                .insert(destination, RoutingEntry::new(Some(intermediate), new_cost));
            return true;
        }

        false
    }

    /// Install the direct-edge entry for `neighbour`, unconditionally.
    ///
    /// Unlike [`add_or_update_entry`] this does not compare against an
    /// existing entry: re-registering a neighbour resets its route to the
    /// direct edge even if a multi-hop route was already recorded. The next
    /// synchronisation pass re-relaxes from there.
    ///
    /// [`add_or_update_entry`]: RoutingTable::add_or_update_entry
    pub(crate) fn set_direct(&mut self, neighbour: StopId, cost: Cost) {
        self.entries
            .insert(neighbour, RoutingEntry::new(Some(neighbour), cost));
    }
}
