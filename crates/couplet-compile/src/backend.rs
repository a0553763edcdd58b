//! The compilation capability seam.
//!
//! Everything downstream of circuit construction talks to a
//! [`CompileBackend`], so the comparison logic never depends on a
//! specific compilation pipeline. [`PassCompiler`] is the in-tree
//! implementation; tests substitute deterministic fakes.

use tracing::debug;

use couplet_ir::Circuit;

use crate::compiled::CompiledCircuit;
use crate::error::CompileResult;
use crate::manager::PassManagerBuilder;
use crate::passes::RoutingStats;
use crate::topology::TopologyModel;

/// A capability that maps a logical circuit onto a topology model.
///
/// Implementations must be pure: the same circuit and model always yield
/// the same compiled artifact, and the input circuit is never mutated.
pub trait CompileBackend {
    /// Name of this backend, used in error context.
    fn name(&self) -> &str;

    /// Compile `circuit` under `model`.
    fn compile(&self, circuit: &Circuit, model: &TopologyModel) -> CompileResult<CompiledCircuit>;
}

/// Default backend: the in-tree layout + routing pass pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassCompiler;

impl PassCompiler {
    /// Create a new pass-pipeline compiler.
    pub fn new() -> Self {
        Self
    }
}

impl CompileBackend for PassCompiler {
    fn name(&self) -> &str {
        "pass-pipeline"
    }

    fn compile(&self, circuit: &Circuit, model: &TopologyModel) -> CompileResult<CompiledCircuit> {
        let (pm, mut props) = PassManagerBuilder::new().with_model(model).build();

        let mut dag = circuit.clone().into_dag();
        pm.run(&mut dag, &mut props)?;

        if let Some(stats) = props.get::<RoutingStats>() {
            debug!(
                topology = model.name(),
                inserted_swaps = stats.inserted_swaps,
                "compiled circuit"
            );
        }

        Ok(CompiledCircuit::from_circuit(
            model.name(),
            Circuit::from_dag(circuit.name(), dag),
        ))
    }
}
