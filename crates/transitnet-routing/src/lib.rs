//! Transitnet routing — distance-vector routing over the stop network.
//!
//! This crate provides:
//! - [`RoutingEntry`] — a (next-hop, cost) pair, or the no-route sentinel.
//! - [`RoutingTable`] — one stop's best known route to every destination,
//!   with the accept-only-cheaper relaxation rule.
//! - [`Network`] — the arena of stops, neighbour-to-neighbour entry transfer,
//!   reachability traversal, and the synchronisation fixpoint loop that
//!   drives the whole network to convergence (Bellman-Ford in RIP style,
//!   simulated synchronously in one process).

pub mod entry;
pub mod error;
pub mod network;
pub mod table;

// Re-exports for convenience.
pub use entry::RoutingEntry;
pub use error::RoutingError;
pub use network::Network;
pub use table::RoutingTable;
