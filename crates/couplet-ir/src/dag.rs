//! DAG-based circuit representation.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex as PetNodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// Node index type for the circuit DAG.
pub type NodeIndex = PetNodeIndex<u32>;

/// A node in the circuit DAG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DagNode {
    /// Input node for a wire.
    In(WireId),
    /// Output node for a wire.
    Out(WireId),
    /// Operation node containing an instruction.
    Op(Instruction),
}

impl DagNode {
    /// Get the instruction if this is an operation node.
    #[inline]
    pub fn instruction(&self) -> Option<&Instruction> {
        match self {
            DagNode::Op(inst) => Some(inst),
            _ => None,
        }
    }
}

/// Identifier for a wire in the DAG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireId {
    /// A quantum wire.
    Qubit(QubitId),
    /// A classical wire.
    Clbit(ClbitId),
}

impl From<QubitId> for WireId {
    fn from(q: QubitId) -> Self {
        WireId::Qubit(q)
    }
}

impl From<ClbitId> for WireId {
    fn from(c: ClbitId) -> Self {
        WireId::Clbit(c)
    }
}

/// An edge in the circuit DAG representing a wire segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DagEdge {
    /// The wire this edge belongs to.
    pub wire: WireId,
}

/// The abstraction level of a circuit in the compilation pipeline.
///
/// Circuits start at the `Logical` level and are lowered to `Physical`
/// by the layout and routing passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CircuitLevel {
    /// Logical level: qubits are abstract, no physical mapping applied.
    #[default]
    Logical,
    /// Physical level: qubits are mapped to device positions.
    Physical,
}

/// Bookkeeping for a single wire: its terminal nodes and the current
/// front (the last node before the output).
#[derive(Debug, Clone, Copy)]
struct WireEnds {
    input: NodeIndex,
    output: NodeIndex,
    /// Last node on this wire before `output`. Enables O(1) appends.
    front: NodeIndex,
}

/// DAG-based circuit representation.
///
/// Nodes are wire inputs, wire outputs, or operations; edges are wire
/// segments. Each wire forms a path from its input node through the
/// operations touching it to its output node, so operation dependencies
/// and circuit depth fall out of the graph structure.
#[derive(Debug, Clone)]
pub struct CircuitDag {
    /// The underlying graph.
    graph: DiGraph<DagNode, DagEdge, u32>,
    /// Per-wire endpoints and append front.
    wires: FxHashMap<WireId, WireEnds>,
    /// Qubits in insertion order.
    qubit_order: Vec<QubitId>,
    /// Classical bits in insertion order.
    clbit_order: Vec<ClbitId>,
    /// Number of operation nodes.
    num_ops: usize,
    /// Abstraction level of the circuit.
    level: CircuitLevel,
}

impl CircuitDag {
    /// Create a new empty circuit DAG.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::default(),
            wires: FxHashMap::default(),
            qubit_order: vec![],
            clbit_order: vec![],
            num_ops: 0,
            level: CircuitLevel::Logical,
        }
    }

    fn add_wire(&mut self, wire: WireId) {
        let in_node = self.graph.add_node(DagNode::In(wire));
        let out_node = self.graph.add_node(DagNode::Out(wire));
        self.graph.add_edge(in_node, out_node, DagEdge { wire });
        self.wires.insert(
            wire,
            WireEnds {
                input: in_node,
                output: out_node,
                front: in_node,
            },
        );
    }

    /// Add a qubit to the circuit. Re-adding an existing qubit is a no-op.
    pub fn add_qubit(&mut self, qubit: QubitId) {
        let wire = WireId::Qubit(qubit);
        if self.wires.contains_key(&wire) {
            return;
        }
        self.add_wire(wire);
        self.qubit_order.push(qubit);
    }

    /// Add a classical bit to the circuit.
    pub fn add_clbit(&mut self, clbit: ClbitId) {
        let wire = WireId::Clbit(clbit);
        if self.wires.contains_key(&wire) {
            return;
        }
        self.add_wire(wire);
        self.clbit_order.push(clbit);
    }

    /// Check whether a qubit exists in this circuit.
    #[inline]
    pub fn has_qubit(&self, qubit: QubitId) -> bool {
        self.wires.contains_key(&WireId::Qubit(qubit))
    }

    /// Append an instruction to the end of the circuit.
    ///
    /// Validates gate arity, operand existence, and operand uniqueness
    /// before threading the operation onto its wires.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<NodeIndex> {
        let gate_name = match &instruction.kind {
            InstructionKind::Gate(gate) => Some(gate.name().to_string()),
            _ => None,
        };

        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits();
            let got = u32::try_from(instruction.qubits.len()).unwrap_or(u32::MAX);
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }

        for &qubit in &instruction.qubits {
            if !self.wires.contains_key(&WireId::Qubit(qubit)) {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }
        for &clbit in &instruction.clbits {
            if !self.wires.contains_key(&WireId::Clbit(clbit)) {
                return Err(IrError::ClbitNotFound {
                    clbit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        let touched: Vec<WireId> = instruction
            .qubits
            .iter()
            .map(|&q| WireId::Qubit(q))
            .chain(instruction.clbits.iter().map(|&c| WireId::Clbit(c)))
            .collect();

        let op_node = self.graph.add_node(DagNode::Op(instruction));
        self.num_ops += 1;

        for wire in touched {
            let ends = self.wires[&wire];

            // Unhook the segment from the current front to the output.
            let edge_id = self
                .graph
                .edges_directed(ends.front, Direction::Outgoing)
                .find(|e| e.weight().wire == wire && e.target() == ends.output)
                .map(|e| e.id())
                .ok_or_else(|| {
                    IrError::InvalidDag(format!("missing front-to-output segment on {wire:?}"))
                })?;
            self.graph.remove_edge(edge_id);

            self.graph.add_edge(ends.front, op_node, DagEdge { wire });
            self.graph.add_edge(op_node, ends.output, DagEdge { wire });

            self.wires
                .get_mut(&wire)
                .expect("wire validated above")
                .front = op_node;
        }

        Ok(op_node)
    }

    /// Iterate over operations in topological order.
    pub fn topological_ops(&self) -> impl Iterator<Item = (NodeIndex, &Instruction)> {
        petgraph::algo::toposort(&self.graph, None)
            .expect("DAG must be acyclic — cycle detected in circuit graph")
            .into_iter()
            .filter_map(|idx| match &self.graph[idx] {
                DagNode::Op(inst) => Some((idx, inst)),
                _ => None,
            })
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Operation name sequence in topological order.
    ///
    /// Structural fingerprint used by equivalence and mutation checks.
    pub fn op_names(&self) -> Vec<String> {
        self.topological_ops()
            .map(|(_, inst)| inst.name().to_string())
            .collect()
    }

    /// Get an instruction by node index.
    #[inline]
    pub fn get_instruction(&self, node: NodeIndex) -> Option<&Instruction> {
        self.graph.node_weight(node).and_then(|n| n.instruction())
    }

    /// Operations touching a qubit, in wire order.
    ///
    /// Walks the qubit's wire chain from input to output, so the order is
    /// a structural property of the circuit — unlike the order of
    /// unrelated operations, which a topological sort may permute.
    pub fn ops_on_qubit(&self, qubit: QubitId) -> Vec<&Instruction> {
        let wire = WireId::Qubit(qubit);
        let Some(ends) = self.wires.get(&wire) else {
            return vec![];
        };

        let mut ops = vec![];
        let mut current = ends.input;
        while current != ends.output {
            let next = self
                .graph
                .edges_directed(current, Direction::Outgoing)
                .find(|e| e.weight().wire == wire)
                .map(|e| e.target())
                .expect("wire chain must reach its output node");
            if let Some(inst) = self.graph[next].instruction() {
                ops.push(inst);
            }
            current = next;
        }
        ops
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubit_order.len()
    }

    /// Get the number of classical bits.
    #[inline]
    pub fn num_clbits(&self) -> usize {
        self.clbit_order.len()
    }

    /// Get the number of operations.
    #[inline]
    pub fn num_ops(&self) -> usize {
        self.num_ops
    }

    /// Calculate the circuit depth.
    ///
    /// Depth is the longest chain of operations through the wire graph:
    /// the minimum number of execution layers if operations on disjoint
    /// qubit sets run concurrently.
    pub fn depth(&self) -> usize {
        let mut depths: FxHashMap<NodeIndex, usize> =
            FxHashMap::with_capacity_and_hasher(self.graph.node_count(), Default::default());
        let mut max_depth = 0usize;

        for node in petgraph::algo::toposort(&self.graph, None)
            .expect("DAG must be acyclic — cycle detected in circuit graph")
        {
            let pred_depth = self
                .graph
                .edges_directed(node, Direction::Incoming)
                .map(|e| depths.get(&e.source()).copied().unwrap_or(0))
                .max()
                .unwrap_or(0);

            let node_depth = if matches!(self.graph[node], DagNode::Op(_)) {
                pred_depth + 1
            } else {
                pred_depth
            };

            max_depth = max_depth.max(node_depth);
            depths.insert(node, node_depth);
        }

        max_depth
    }

    /// Iterate over qubits in insertion order.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.qubit_order.iter().copied()
    }

    /// Iterate over classical bits in insertion order.
    pub fn clbits(&self) -> impl Iterator<Item = ClbitId> + '_ {
        self.clbit_order.iter().copied()
    }

    /// Get the abstraction level of this circuit.
    pub fn level(&self) -> CircuitLevel {
        self.level
    }

    /// Set the abstraction level of this circuit.
    pub fn set_level(&mut self, level: CircuitLevel) {
        self.level = level;
    }

    /// Get a reference to the underlying graph.
    pub fn graph(&self) -> &DiGraph<DagNode, DagEdge, u32> {
        &self.graph
    }
}

impl Default for CircuitDag {
    fn default() -> Self {
        Self::new()
    }
}
