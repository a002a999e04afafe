//! `transitnet traverse` — list the stops reachable from a stop.

use clap::Args;
use std::path::PathBuf;

use crate::network_file;

#[derive(Args, Debug)]
pub struct TraverseArgs {
    /// Path to the JSON network description.
    #[arg(short, long, default_value = "network.json")]
    pub network: PathBuf,

    /// Name of the stop to start from.
    pub stop: String,
}

pub fn run(args: &TraverseArgs) -> anyhow::Result<()> {
    let network = network_file::load(&args.network)?;
    let id = network_file::resolve(&network, &args.stop)?;

    let order = network.traverse(id)?;
    println!(
        "{} stop(s) reachable from {}:",
        order.len(),
        network.stop(id)?.name()
    );
    for stop in order {
        println!("  {}", network.stop(stop)?);
    }
    Ok(())
}
