//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - topology comparison benchmarks for quantum circuits",
        style("Couplet").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  couplet-ir       Circuit intermediate representation");
    println!("  couplet-compile  Topology models and SWAP routing");
    println!("  couplet-eval     Workloads, comparison, and reporting");
    println!("  couplet-cli      Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hiq-lab/couplet").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
