//! `transitnet table` — print a stop's converged routing table.

use clap::Args;
use std::path::PathBuf;

use crate::network_file;

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Path to the JSON network description.
    #[arg(short, long, default_value = "network.json")]
    pub network: PathBuf,

    /// Name of the stop whose routing table to print.
    pub stop: String,
}

pub fn run(args: &TableArgs) -> anyhow::Result<()> {
    let network = network_file::load(&args.network)?;
    let id = network_file::resolve(&network, &args.stop)?;
    let table = network.table(id)?;

    println!("routing table for {}", network.stop(id)?);
    for (destination, cost) in table.costs() {
        let name = network.stop(destination)?.name();
        let via = match table.next_stop(destination) {
            Some(next) => network.stop(next)?.name(),
            None => "-",
        };
        println!("  {name:<16} cost {cost:>6}  via {via}");
    }
    Ok(())
}
