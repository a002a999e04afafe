//! The JSON network description consumed by every subcommand.
//!
//! ```json
//! {
//!   "stops": [{ "name": "A", "x": 0, "y": 0 }, ...],
//!   "links": [["A", "B"], ...]
//! }
//! ```
//!
//! Links are symmetric: each pair is registered on both endpoints.

use std::path::Path;

use serde::Deserialize;
use transitnet_core::StopId;
use transitnet_routing::Network;

#[derive(Debug, Deserialize)]
pub struct NetworkFile {
    pub stops: Vec<StopDef>,
    #[serde(default)]
    pub links: Vec<[String; 2]>,
}

/// One stop declaration in the description file.
#[derive(Debug, Deserialize)]
pub struct StopDef {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

/// Load a description file and build the converged network from it.
pub fn load(path: &Path) -> anyhow::Result<Network> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
    let file: NetworkFile = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("malformed network description {}: {e}", path.display()))?;
    build(&file)
}

/// Build the network: register every stop, then link every declared edge.
/// Each link triggers a synchronisation pass, so the result is converged.
pub fn build(file: &NetworkFile) -> anyhow::Result<Network> {
    let mut network = Network::new();
    for stop in &file.stops {
        network.add_stop(&stop.name, stop.x, stop.y)?;
    }
    for [a, b] in &file.links {
        let a = resolve(&network, a)?;
        let b = resolve(&network, b)?;
        network.link(a, b)?;
    }
    Ok(network)
}

/// Resolve a stop name from the description, failing with a user-facing
/// message for unknown names.
pub fn resolve(network: &Network, name: &str) -> anyhow::Result<StopId> {
    network
        .stop_by_name(name)
        .ok_or_else(|| anyhow::anyhow!("no stop named {name:?} in the network description"))
}
