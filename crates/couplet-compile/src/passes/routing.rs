//! Routing pass: SWAP insertion for connectivity constraints.

use couplet_ir::{CircuitDag, Gate, Instruction, StandardGate};
use tracing::debug;

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Gate label marking SWAPs inserted by routing, so routing cost stays
/// separable from SWAPs the logical circuit contains (e.g. QFT bit
/// reversal).
pub const ROUTE_LABEL: &str = "route";

/// Routing statistics published to the [`PropertySet`] after the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingStats {
    /// Number of SWAP gates inserted.
    pub inserted_swaps: usize,
}

/// Shortest-path SWAP routing.
///
/// Walks the circuit in program order and rebuilds it on a fresh DAG.
/// For each gate whose operands are not mutually reachable under the
/// coupling map, SWAPs are inserted along a BFS shortest path: a gate at
/// physical distance `d` costs `d − 1` SWAPs. The layout permutation
/// persists — there is no swap-back, so repeated non-adjacent
/// interactions compound routing cost across the circuit.
///
/// Convention for gates on more than two qubits: consecutive operand
/// pairs are routed in order (`q0↔q1`, then `q1↔q2`, …), i.e. operands
/// are pulled into a chain.
pub struct SwapRouting;

impl Pass for SwapRouting {
    fn name(&self) -> &str {
        "SwapRouting"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, dag: &mut CircuitDag, properties: &mut PropertySet) -> CompileResult<()> {
        let mut routed = CircuitDag::new();
        for qubit in dag.qubits() {
            routed.add_qubit(qubit);
        }
        for clbit in dag.clbits() {
            routed.add_clbit(clbit);
        }
        routed.set_level(dag.level());

        let mut inserted = 0usize;
        {
            let coupling_map = properties
                .coupling_map
                .as_ref()
                .ok_or(CompileError::MissingCouplingMap)?;
            let layout = properties
                .layout
                .as_mut()
                .ok_or(CompileError::MissingLayout)?;

            let ops: Vec<Instruction> = dag.topological_ops().map(|(_, i)| i.clone()).collect();

            for instruction in ops {
                // Barriers synchronize wires without physical interaction.
                let needs_routing = instruction.qubits.len() >= 2 && !instruction.is_barrier();

                if needs_routing {
                    for pair in 0..instruction.qubits.len() - 1 {
                        let l0 = instruction.qubits[pair];
                        let l1 = instruction.qubits[pair + 1];
                        let p0 = layout.get_physical(l0).ok_or(CompileError::MissingLayout)?;
                        let p1 = layout.get_physical(l1).ok_or(CompileError::MissingLayout)?;

                        if coupling_map.is_connected(p0, p1) {
                            continue;
                        }

                        let path = coupling_map.shortest_path(p0, p1).ok_or(
                            CompileError::UnreachableTopology {
                                qubit1: p0,
                                qubit2: p1,
                            },
                        )?;

                        // One SWAP per hop, stopping one edge short: the
                        // final edge is where the gate itself executes.
                        for hop in path.windows(2).take(path.len() - 2) {
                            let (a, b) = (hop[0], hop[1]);
                            let la = layout.get_logical(a);
                            let lb = layout.get_logical(b);
                            layout.swap_physical(a, b);

                            // An empty target slot is a pure relabeling;
                            // only occupied pairs cost a gate.
                            if let (Some(la), Some(lb)) = (la, lb) {
                                routed.apply(Instruction::gate(
                                    Gate::standard(StandardGate::Swap).with_label(ROUTE_LABEL),
                                    [la, lb],
                                ))?;
                                inserted += 1;
                            }
                        }
                    }
                }

                routed.apply(instruction)?;
            }
        }

        debug!(inserted_swaps = inserted, "routing complete");
        properties.insert(RoutingStats {
            inserted_swaps: inserted,
        });

        *dag = routed;
        Ok(())
    }

    fn should_run(&self, _dag: &CircuitDag, properties: &PropertySet) -> bool {
        properties.coupling_map.is_some() && properties.layout.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::TrivialLayout;
    use crate::topology::TopologyModel;
    use couplet_ir::{Circuit, QubitId};

    fn route(circuit: Circuit, model: &TopologyModel) -> (CircuitDag, PropertySet) {
        let mut dag = circuit.into_dag();
        let mut props = PropertySet::new().with_coupling_map(model.coupling_map());
        TrivialLayout.run(&mut dag, &mut props).unwrap();
        SwapRouting.run(&mut dag, &mut props).unwrap();
        (dag, props)
    }

    fn count_route_swaps(dag: &CircuitDag) -> usize {
        dag.topological_ops()
            .filter(|(_, inst)| inst.has_label(ROUTE_LABEL))
            .count()
    }

    #[test]
    fn test_adjacent_pair_needs_no_swaps() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();

        let (dag, props) = route(circuit, &TopologyModel::linear(2));
        assert_eq!(dag.num_ops(), 2);
        assert_eq!(count_route_swaps(&dag), 0);
        assert_eq!(
            props.get::<RoutingStats>(),
            Some(&RoutingStats { inserted_swaps: 0 })
        );
    }

    #[test]
    fn test_distance_pins_swap_count() {
        // Linear 0-1-2-3, gate on (0,3): distance 3, so 2 routing SWAPs.
        let mut circuit = Circuit::with_size("test", 4, 0);
        circuit.cx(QubitId(0), QubitId(3)).unwrap();

        let (dag, props) = route(circuit, &TopologyModel::linear(4));
        assert_eq!(count_route_swaps(&dag), 2);
        assert_eq!(
            props.get::<RoutingStats>(),
            Some(&RoutingStats { inserted_swaps: 2 })
        );
        // 2 SWAPs + the original CX
        assert_eq!(dag.num_ops(), 3);
    }

    #[test]
    fn test_swaps_precede_their_gate() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.cx(QubitId(0), QubitId(2)).unwrap();

        let (dag, _) = route(circuit, &TopologyModel::linear(3));
        assert_eq!(dag.op_names(), vec!["swap", "cx"]);
        // SWAP then CX on a shared wire: sequential layers
        assert_eq!(dag.depth(), 2);
    }

    #[test]
    fn test_all_to_all_inserts_nothing() {
        let circuit = Circuit::qft(6).unwrap();
        let logical_ops = circuit.num_ops();

        let (dag, _) = route(circuit, &TopologyModel::all_to_all(6));
        assert_eq!(dag.num_ops(), logical_ops);
        assert_eq!(count_route_swaps(&dag), 0);
    }

    #[test]
    fn test_logical_swaps_not_counted_as_routing() {
        // QFT contains its own SWAP gates; under all-to-all none of them
        // may be attributed to routing.
        let circuit = Circuit::qft(4).unwrap();
        let (dag, props) = route(circuit, &TopologyModel::all_to_all(4));

        let total_swaps = dag
            .topological_ops()
            .filter(|(_, inst)| inst.name() == "swap")
            .count();
        assert_eq!(total_swaps, 2); // bit-reversal swaps
        assert_eq!(count_route_swaps(&dag), 0);
        assert_eq!(
            props.get::<RoutingStats>(),
            Some(&RoutingStats { inserted_swaps: 0 })
        );
    }

    #[test]
    fn test_permutation_persists_between_gates() {
        // After routing (0,2) on a 3-line, qubit 0 sits in the middle, so
        // a following (0,1) gate is already adjacent.
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.cx(QubitId(0), QubitId(2)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();

        let (dag, _) = route(circuit, &TopologyModel::linear(3));
        assert_eq!(count_route_swaps(&dag), 1);
        assert_eq!(dag.num_ops(), 3);
    }

    #[test]
    fn test_unreachable_topology() {
        let mut circuit = Circuit::with_size("test", 4, 0);
        circuit.cx(QubitId(0), QubitId(3)).unwrap();
        let mut dag = circuit.into_dag();

        // Disconnected map: {0,1} and {2,3}
        let map = crate::topology::CouplingMap::from_edges(4, [(0, 1), (2, 3)]);
        let mut props = PropertySet::new().with_coupling_map(map);
        TrivialLayout.run(&mut dag, &mut props).unwrap();

        let result = SwapRouting.run(&mut dag, &mut props);
        assert!(matches!(
            result,
            Err(CompileError::UnreachableTopology { .. })
        ));
    }

    #[test]
    fn test_grid_routing_shorter_than_linear() {
        // On a 3x3 grid qubits 0 and 8 are 4 hops apart; on a 9-line they
        // are 8 apart. Grid routing must insert fewer SWAPs.
        let mut circuit = Circuit::with_size("test", 9, 0);
        circuit.cx(QubitId(0), QubitId(8)).unwrap();

        let (grid_dag, _) = route(circuit.clone(), &TopologyModel::grid(3, 3));
        let (line_dag, _) = route(circuit, &TopologyModel::linear(9));

        assert_eq!(count_route_swaps(&grid_dag), 3);
        assert_eq!(count_route_swaps(&line_dag), 7);
    }

    #[test]
    fn test_three_qubit_gate_chain_routing() {
        // CCX(0,1,2) on a line: operands are already a chain.
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.ccx(QubitId(0), QubitId(1), QubitId(2)).unwrap();

        let (dag, _) = route(circuit, &TopologyModel::linear(3));
        assert_eq!(count_route_swaps(&dag), 0);

        // CCX(0,2,4): both consecutive pairs are 2 apart, one SWAP each.
        let mut circuit = Circuit::with_size("test", 5, 0);
        circuit.ccx(QubitId(0), QubitId(2), QubitId(4)).unwrap();

        let (dag, _) = route(circuit, &TopologyModel::linear(5));
        assert_eq!(count_route_swaps(&dag), 2);
    }

    #[test]
    fn test_barrier_not_routed() {
        let mut circuit = Circuit::with_size("test", 4, 0);
        circuit.barrier_all().unwrap();

        let (dag, _) = route(circuit, &TopologyModel::linear(4));
        assert_eq!(count_route_swaps(&dag), 0);
        assert_eq!(dag.num_ops(), 1);
    }
}
