//! Workloads command implementation.

use console::style;

use couplet_eval::Workload;

/// List the available workload generators.
pub fn execute() {
    println!("{}", style("Available workloads:").bold());
    println!();
    for workload in Workload::all() {
        println!(
            "  {:<20} {}",
            style(workload.name()).cyan(),
            workload.description()
        );
    }
    println!();
    println!(
        "Use with: {}",
        style("couplet compare --workload <name> --n-qubits <n>").green()
    );
}
