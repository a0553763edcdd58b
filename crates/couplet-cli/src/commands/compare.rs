//! Compare command implementation.

use anyhow::Result;
use console::style;
use std::path::Path;

use couplet_compile::{PassCompiler, TopologyModel};
use couplet_eval::{ComparisonReport, ExportConfig, compare, render_csv, render_table, to_json};

use super::common::{build_circuit, parse_topology, parse_workload};

/// Execute the compare command.
#[allow(clippy::cast_possible_truncation)]
pub fn execute(
    workload: &str,
    n_qubits: u32,
    layers: u32,
    seed: u64,
    baseline: &str,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let workload = parse_workload(workload)?;
    let circuit = build_circuit(workload, n_qubits, layers, seed)?;

    // Ancilla-carrying workloads use more qubits than the problem size.
    let total_qubits = circuit.num_qubits() as u32;
    let baseline_model = parse_topology(baseline, total_qubits)?;
    if matches!(baseline_model, TopologyModel::AllToAll { .. }) {
        anyhow::bail!("The baseline arm must be a constrained topology (linear or grid)");
    }
    let reference_model = TopologyModel::all_to_all(total_qubits);

    println!(
        "{} Comparing {} ({} qubits, {} ops) on {} vs {}",
        style("→").cyan().bold(),
        style(circuit.name()).green(),
        circuit.num_qubits(),
        circuit.num_ops(),
        style(&baseline_model).yellow(),
        style(&reference_model).yellow()
    );

    let result = compare(&PassCompiler::new(), &circuit, &baseline_model, &reference_model)?;
    let report = ComparisonReport::new(result);

    match format.to_lowercase().as_str() {
        "table" => print!("{}", render_table(&report.result)),
        "csv" => print!("{}", render_csv(&report.result)),
        "json" => println!("{}", to_json(&report, &ExportConfig::default())?),
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, csv, json"),
    }

    if let Some(path) = output {
        couplet_eval::write_report(&report, Path::new(path), &ExportConfig::default())?;
        println!("{} Report written to {}", style("✓").green().bold(), style(path).green());
    }

    Ok(())
}
