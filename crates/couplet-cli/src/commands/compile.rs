//! Compile command implementation.

use anyhow::Result;
use console::style;
use std::fs;

use couplet_compile::{CompileBackend, PassCompiler};
use couplet_eval::{TopologySummary, render_summaries_csv};

use super::common::{build_circuit, parse_topology, parse_workload};

/// Execute the compile command: one workload, one topology arm.
#[allow(clippy::cast_possible_truncation)]
pub fn execute(
    workload: &str,
    n_qubits: u32,
    topology: &str,
    layers: u32,
    seed: u64,
    output: Option<&str>,
) -> Result<()> {
    let workload = parse_workload(workload)?;
    let circuit = build_circuit(workload, n_qubits, layers, seed)?;
    let model = parse_topology(topology, circuit.num_qubits() as u32)?;

    println!(
        "{} Compiling {} ({} qubits, {} ops) for {}",
        style("→").cyan().bold(),
        style(circuit.name()).green(),
        circuit.num_qubits(),
        circuit.num_ops(),
        style(&model).yellow()
    );

    let compiled = PassCompiler::new().compile(&circuit, &model)?;

    println!("{} Compilation complete", style("✓").green().bold());
    println!("  topology:    {}", compiled.topology);
    println!("  total gates: {}", compiled.total_ops);
    println!("  routing ops: {}", compiled.routing_ops);
    println!("  depth:       {}", compiled.depth);

    if let Some(path) = output {
        let summary = TopologySummary {
            topology: compiled.topology.clone(),
            total_ops: compiled.total_ops,
            routing_ops: compiled.routing_ops,
            depth: compiled.depth,
        };
        fs::write(path, render_summaries_csv(&[summary]))
            .map_err(|e| anyhow::anyhow!("Failed to write {path}: {e}"))?;
        println!("  output:      {}", style(path).green());
    }

    Ok(())
}
