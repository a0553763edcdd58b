//! Comparative compilation of one circuit under two topology models.

use serde::{Deserialize, Serialize};
use tracing::info;

use couplet_compile::{CompileBackend, CompiledCircuit, TopologyModel};
use couplet_ir::Circuit;

use crate::error::{EvalError, EvalResult};

/// Per-topology metrics of one compiled arm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySummary {
    /// Topology model name.
    pub topology: String,
    /// Total operation count, routing included.
    pub total_ops: usize,
    /// Routing SWAPs inserted by compilation.
    pub routing_ops: usize,
    /// Circuit depth.
    pub depth: usize,
}

impl From<&CompiledCircuit> for TopologySummary {
    fn from(compiled: &CompiledCircuit) -> Self {
        Self {
            topology: compiled.topology.clone(),
            total_ops: compiled.total_ops,
            routing_ops: compiled.routing_ops,
            depth: compiled.depth,
        }
    }
}

/// The paired result of compiling one logical circuit under two models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Name of the logical circuit.
    pub circuit: String,
    /// Number of qubits in the logical circuit.
    pub num_qubits: usize,
    /// Operation count of the logical circuit.
    pub logical_ops: usize,
    /// The constrained arm (first model).
    pub baseline: TopologySummary,
    /// The second arm, conventionally all-to-all.
    pub reference: TopologySummary,
    /// baseline depth / reference depth.
    pub depth_ratio: f64,
    /// baseline total ops − reference total ops.
    pub gate_delta: i64,
}

/// Compile `circuit` under both models and derive comparative metrics.
///
/// Both arms are compiled from the same shared circuit reference; the
/// circuit is never cloned into a mutable intermediate, so the original
/// is guaranteed unchanged. Each arm is checked against the equivalence
/// invariant: ignoring routing SWAPs, the compiled operation sequence
/// must equal the logical one.
pub fn compare(
    backend: &dyn CompileBackend,
    circuit: &Circuit,
    baseline: &TopologyModel,
    reference: &TopologyModel,
) -> EvalResult<ComparisonResult> {
    let baseline_arm = backend.compile(circuit, baseline)?;
    let reference_arm = backend.compile(circuit, reference)?;

    for arm in [&baseline_arm, &reference_arm] {
        if !arm.matches_logical(circuit) {
            return Err(EvalError::Equivalence(format!(
                "backend '{}' changed the logical operation sequence under '{}'",
                backend.name(),
                arm.topology
            )));
        }
    }

    let depth_ratio = ratio(baseline_arm.depth, reference_arm.depth);
    let gate_delta = baseline_arm.total_ops as i64 - reference_arm.total_ops as i64;

    info!(
        circuit = circuit.name(),
        baseline = %baseline,
        reference = %reference,
        depth_ratio,
        gate_delta,
        "comparison complete"
    );

    Ok(ComparisonResult {
        circuit: circuit.name().to_string(),
        num_qubits: circuit.num_qubits(),
        logical_ops: circuit.num_ops(),
        baseline: TopologySummary::from(&baseline_arm),
        reference: TopologySummary::from(&reference_arm),
        depth_ratio,
        gate_delta,
    })
}

fn ratio(a: usize, b: usize) -> f64 {
    match (a, b) {
        (0, 0) => 1.0,
        (_, 0) => f64::INFINITY,
        (a, b) => a as f64 / b as f64,
    }
}
