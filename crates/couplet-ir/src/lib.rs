//! Couplet Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Couplet. It is the foundation the topology compiler and the
//! comparison tooling build on.
//!
//! # Overview
//!
//! Circuits are held as a DAG (Directed Acyclic Graph): nodes are wire
//! endpoints or operations, edges are wire segments. Dependencies between
//! operations and circuit depth — the two quantities the comparison
//! pipeline cares about — fall directly out of this structure. The
//! high-level [`Circuit`] API provides a builder pattern on top.
//!
//! # Core Components
//!
//! - **Qubits and classical bits**: [`QubitId`], [`ClbitId`]
//! - **Gates**: [`StandardGate`] plus [`Gate`] metadata (labels mark
//!   compiler-inserted routing operations)
//! - **Parameters**: [`ParameterExpression`] for symbolic angles in
//!   variational circuits
//! - **Instructions**: [`Instruction`] combining gates with operands
//! - **DAG**: [`CircuitDag`] internal graph representation
//! - **Circuit**: [`Circuit`] high-level builder
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use couplet_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
//! ```

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod qubit;

pub use circuit::Circuit;
pub use dag::{CircuitDag, CircuitLevel, DagEdge, DagNode, NodeIndex, WireId};
pub use error::{IrError, IrResult};
pub use gate::{Gate, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use parameter::{ParamOp, ParameterExpression};
pub use qubit::{ClbitId, QubitId};
