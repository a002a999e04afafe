//! End-to-end convergence scenarios driving the public crate APIs.

use transitnet_core::{StopId, INFINITY};
use transitnet_routing::Network;

/// A(0,0) — B(1,1) — C(1,-1), no direct A—C edge.
fn branch_line() -> (Network, StopId, StopId, StopId) {
    let mut network = Network::new();
    let a = network.add_stop("A", 0, 0).unwrap();
    let b = network.add_stop("B", 1, 1).unwrap();
    let c = network.add_stop("C", 1, -1).unwrap();
    network.link(a, b).unwrap();
    network.link(b, c).unwrap();
    (network, a, b, c)
}

#[test]
fn test_branch_line_converges_through_middle_stop() {
    let (network, a, b, c) = branch_line();

    let table = network.table(a).unwrap();
    assert_eq!(table.cost_to(b), 2);
    assert_eq!(table.cost_to(c), 4);
    assert_eq!(table.next_stop(c), Some(b));
}

#[test]
fn test_new_direct_edge_shortens_route() {
    let (mut network, a, _b, c) = branch_line();

    network.link(a, c).unwrap();

    let table = network.table(a).unwrap();
    assert_eq!(table.cost_to(c), 2);
    assert_eq!(table.next_stop(c), Some(c));
}

#[test]
fn test_chain_propagates_hop_by_hop() {
    let mut network = Network::new();
    let a = network.add_stop("A", 0, 0).unwrap();
    let b = network.add_stop("B", 2, 0).unwrap();
    let c = network.add_stop("C", 5, 0).unwrap();
    let d = network.add_stop("D", 5, 3).unwrap();
    network.link(a, b).unwrap();
    network.link(b, c).unwrap();
    network.link(c, d).unwrap();

    // End-to-end cost is the sum of the edge costs.
    assert_eq!(network.table(a).unwrap().cost_to(d), 2 + 3 + 3);

    // Following next hops from table to table walks the chain.
    assert_eq!(network.table(a).unwrap().next_stop(d), Some(b));
    assert_eq!(network.table(b).unwrap().next_stop(d), Some(c));
    assert_eq!(network.table(c).unwrap().next_stop(d), Some(d));
}

#[test]
fn test_ring_offers_equal_cost_routes() {
    let mut network = Network::new();
    let a = network.add_stop("A", 0, 0).unwrap();
    let b = network.add_stop("B", 0, 5).unwrap();
    let c = network.add_stop("C", 5, 5).unwrap();
    let d = network.add_stop("D", 5, 0).unwrap();
    network.link(a, b).unwrap();
    network.link(b, c).unwrap();
    network.link(c, d).unwrap();
    network.link(d, a).unwrap();

    // Opposite corners cost 10 around either side of the ring.
    assert_eq!(network.table(a).unwrap().cost_to(c), 10);
    assert_eq!(network.table(c).unwrap().cost_to(a), 10);

    // The winning next hop is one of the two ring directions, and an equal
    // cost proposal never displaces it.
    let first = network.table(a).unwrap().next_stop(c).unwrap();
    assert!(first == b || first == d);
    network.synchronise(a).unwrap();
    assert_eq!(network.table(a).unwrap().next_stop(c), Some(first));
}

#[test]
fn test_synchronise_is_idempotent_from_any_origin() {
    let (mut network, a, b, c) = branch_line();

    let snapshot = |network: &Network| {
        [a, b, c]
            .iter()
            .map(|&id| network.table(id).unwrap().costs())
            .collect::<Vec<_>>()
    };

    let converged = snapshot(&network);
    for origin in [a, b, c] {
        network.synchronise(origin).unwrap();
        assert_eq!(snapshot(&network), converged);
    }
}

#[test]
fn test_disconnected_components_stay_isolated() {
    let mut network = Network::new();
    let a = network.add_stop("A", 0, 0).unwrap();
    let b = network.add_stop("B", 1, 1).unwrap();
    let c = network.add_stop("C", 10, 10).unwrap();
    let d = network.add_stop("D", 11, 11).unwrap();
    network.link(a, b).unwrap();
    network.link(c, d).unwrap();

    assert_eq!(network.table(a).unwrap().cost_to(c), INFINITY);
    assert_eq!(network.table(a).unwrap().next_stop(c), None);
    assert_eq!(network.table(d).unwrap().cost_to(b), INFINITY);

    assert_eq!(network.traverse(a).unwrap(), vec![a, b]);
    assert_eq!(network.traverse(c).unwrap(), vec![c, d]);
}

#[test]
fn test_bridging_two_components_propagates_everywhere() {
    let mut network = Network::new();
    let a = network.add_stop("A", 0, 0).unwrap();
    let b = network.add_stop("B", 1, 1).unwrap();
    let c = network.add_stop("C", 10, 10).unwrap();
    let d = network.add_stop("D", 11, 11).unwrap();
    network.link(a, b).unwrap();
    network.link(c, d).unwrap();

    network.link(b, c).unwrap();

    // Every stop now reaches every other, including stops that were not an
    // endpoint of the new edge.
    assert_eq!(network.table(a).unwrap().cost_to(d), 2 + 18 + 2);
    assert_eq!(network.table(a).unwrap().next_stop(d), Some(b));
    assert_eq!(network.table(d).unwrap().cost_to(a), 22);
    assert_eq!(network.table(d).unwrap().next_stop(a), Some(c));
    assert_eq!(network.traverse(a).unwrap().len(), 4);
}
