//! `transitnet route` — show the converged route between two stops.

use clap::Args;
use std::path::PathBuf;

use transitnet_core::INFINITY;

use crate::network_file;

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Path to the JSON network description.
    #[arg(short, long, default_value = "network.json")]
    pub network: PathBuf,

    /// Name of the departure stop.
    pub from: String,

    /// Name of the destination stop.
    pub to: String,
}

pub fn run(args: &RouteArgs) -> anyhow::Result<()> {
    let network = network_file::load(&args.network)?;
    let from = network_file::resolve(&network, &args.from)?;
    let to = network_file::resolve(&network, &args.to)?;

    let cost = network.table(from)?.cost_to(to);
    if cost == INFINITY {
        println!("no route from {} to {}", args.from, args.to);
        return Ok(());
    }

    // Follow next hops from table to table to print the full path. The hop
    // bound guards against a description-building bug turning this into a
    // spin.
    let mut path = vec![network.stop(from)?.name().to_string()];
    let mut current = from;
    for _ in 0..network.len() {
        if current == to {
            break;
        }
        let next = network
            .table(current)?
            .next_stop(to)
            .ok_or_else(|| anyhow::anyhow!("route to {} broke at {}", args.to, current))?;
        path.push(network.stop(next)?.name().to_string());
        current = next;
    }
    anyhow::ensure!(current == to, "route from {} to {} does not converge", args.from, args.to);

    println!("{}  (cost {cost})", path.join(" -> "));
    Ok(())
}
