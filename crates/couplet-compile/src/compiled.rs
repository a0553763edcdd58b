//! The compiled-circuit artifact and its metrics.

use couplet_ir::Circuit;

use crate::passes::ROUTE_LABEL;

/// A circuit after compilation under a topology model, with the metrics
/// the comparison pipeline consumes.
///
/// Read-only artifact of a single compilation call: the operation
/// sequence (original ops plus inserted routing SWAPs), total operation
/// count, routing-only count, and depth.
#[derive(Debug, Clone)]
pub struct CompiledCircuit {
    /// Name of the topology model this circuit was compiled for.
    pub topology: String,
    /// The compiled circuit.
    pub circuit: Circuit,
    /// Total operation count, routing included.
    pub total_ops: usize,
    /// Number of routing SWAPs inserted by compilation.
    pub routing_ops: usize,
    /// Circuit depth (longest dependency chain).
    pub depth: usize,
}

impl CompiledCircuit {
    /// Wrap a compiled circuit, measuring its metrics.
    ///
    /// Routing operations are recognized by the [`ROUTE_LABEL`] gate
    /// label, so a backend only has to tag what it inserts.
    pub fn from_circuit(topology: impl Into<String>, circuit: Circuit) -> Self {
        let total_ops = circuit.num_ops();
        let routing_ops = circuit
            .dag()
            .topological_ops()
            .filter(|(_, inst)| inst.has_label(ROUTE_LABEL))
            .count();
        let depth = circuit.depth();

        Self {
            topology: topology.into(),
            circuit,
            total_ops,
            routing_ops,
            depth,
        }
    }

    /// Operation name sequence with routing SWAPs filtered out, in
    /// topological order.
    pub fn logical_op_names(&self) -> Vec<String> {
        self.circuit
            .dag()
            .topological_ops()
            .filter(|(_, inst)| !inst.has_label(ROUTE_LABEL))
            .map(|(_, inst)| inst.name().to_string())
            .collect()
    }

    /// Check the equivalence invariant against the logical circuit:
    /// ignoring routing SWAPs, every qubit must carry the same operation
    /// sequence it carried before compilation.
    ///
    /// The check is per-wire rather than over a global topological order,
    /// since the relative order of operations on disjoint qubits is not
    /// semantically meaningful.
    pub fn matches_logical(&self, logical: &Circuit) -> bool {
        if self.circuit.num_qubits() != logical.num_qubits() {
            return false;
        }

        logical.dag().qubits().all(|q| {
            let compiled: Vec<&str> = self
                .circuit
                .dag()
                .ops_on_qubit(q)
                .into_iter()
                .filter(|inst| !inst.has_label(ROUTE_LABEL))
                .map(|inst| inst.name())
                .collect();
            let expected: Vec<&str> = logical
                .dag()
                .ops_on_qubit(q)
                .into_iter()
                .map(|inst| inst.name())
                .collect();
            compiled == expected
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use couplet_ir::{Gate, QubitId, StandardGate};

    #[test]
    fn test_metrics_from_plain_circuit() {
        let circuit = Circuit::bell().unwrap();
        let compiled = CompiledCircuit::from_circuit("all-to-all", circuit);

        assert_eq!(compiled.total_ops, 4);
        assert_eq!(compiled.routing_ops, 0);
        assert_eq!(compiled.depth, 3);
        assert_eq!(compiled.logical_op_names().len(), 4);
    }

    #[test]
    fn test_route_label_counted() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit
            .gate(
                Gate::standard(StandardGate::Swap).with_label(ROUTE_LABEL),
                [QubitId(0), QubitId(1)],
            )
            .unwrap();
        circuit.cx(QubitId(1), QubitId(2)).unwrap();

        let compiled = CompiledCircuit::from_circuit("linear", circuit);
        assert_eq!(compiled.total_ops, 2);
        assert_eq!(compiled.routing_ops, 1);
        assert_eq!(compiled.logical_op_names(), vec!["cx"]);
    }

    #[test]
    fn test_matches_logical() {
        let mut logical = Circuit::with_size("test", 3, 0);
        logical.h(QubitId(0)).unwrap();
        logical.cx(QubitId(1), QubitId(2)).unwrap();

        // Same ops plus a routing SWAP: equivalent.
        let mut routed = Circuit::with_size("test", 3, 0);
        routed.h(QubitId(0)).unwrap();
        routed
            .gate(
                Gate::standard(StandardGate::Swap).with_label(ROUTE_LABEL),
                [QubitId(1), QubitId(2)],
            )
            .unwrap();
        routed.cx(QubitId(1), QubitId(2)).unwrap();
        assert!(CompiledCircuit::from_circuit("linear", routed).matches_logical(&logical));

        // Dropped gate: not equivalent.
        let mut lossy = Circuit::with_size("test", 3, 0);
        lossy.h(QubitId(0)).unwrap();
        assert!(!CompiledCircuit::from_circuit("linear", lossy).matches_logical(&logical));

        // Unlabeled extra SWAP: not equivalent.
        let mut padded = Circuit::with_size("test", 3, 0);
        padded.h(QubitId(0)).unwrap();
        padded.swap(QubitId(1), QubitId(2)).unwrap();
        padded.cx(QubitId(1), QubitId(2)).unwrap();
        assert!(!CompiledCircuit::from_circuit("linear", padded).matches_logical(&logical));
    }
}
