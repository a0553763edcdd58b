//! Shared helpers for CLI commands.

use anyhow::Result;

use couplet_compile::TopologyModel;
use couplet_eval::{Workload, WorkloadSpec};
use couplet_ir::Circuit;

/// Parse a workload name, listing the alternatives on failure.
pub fn parse_workload(name: &str) -> Result<Workload> {
    Workload::from_name(name).ok_or_else(|| {
        let available: Vec<_> = Workload::all().iter().map(|w| w.name()).collect();
        anyhow::anyhow!(
            "Unknown workload: '{name}'. Available: {}",
            available.join(", ")
        )
    })
}

/// Parse a topology model name for a circuit of `n` qubits.
pub fn parse_topology(name: &str, n: u32) -> Result<TopologyModel> {
    TopologyModel::from_name(name, n)
        .ok_or_else(|| anyhow::anyhow!("Unknown topology: '{name}'. Available: linear, grid, all-to-all"))
}

/// Build the circuit for a workload invocation.
pub fn build_circuit(workload: Workload, n_qubits: u32, layers: u32, seed: u64) -> Result<Circuit> {
    let circuit = WorkloadSpec::new(workload, n_qubits)
        .with_layers(layers)
        .with_seed(seed)
        .build()?;
    Ok(circuit)
}
