//! Couplet Topology Compilation
//!
//! This crate maps logical circuits onto connectivity models. It
//! implements a pass-based architecture: each pass performs one
//! transformation or analysis on the circuit DAG, sharing state through
//! a [`PropertySet`].
//!
//! # Architecture
//!
//! ```text
//! Logical Circuit
//!       │
//!       ▼
//! ┌─────────────┐
//! │ PassManager │ ◄── PropertySet (coupling map, layout)
//! └─────────────┘
//!       │
//!       ├── TrivialLayout   (logical i → physical i)
//!       └── SwapRouting     (shortest-path SWAP insertion)
//!       │
//!       ▼
//! CompiledCircuit (total_ops, routing_ops, depth)
//! ```
//!
//! # Example
//!
//! ```rust
//! use couplet_compile::{CompileBackend, PassCompiler, TopologyModel};
//! use couplet_ir::Circuit;
//!
//! let circuit = Circuit::qft(5).unwrap();
//! let backend = PassCompiler::new();
//!
//! let linear = backend.compile(&circuit, &TopologyModel::linear(5)).unwrap();
//! let full = backend.compile(&circuit, &TopologyModel::all_to_all(5)).unwrap();
//!
//! assert_eq!(full.routing_ops, 0);
//! assert!(linear.total_ops >= full.total_ops);
//! ```
//!
//! # Routing convention
//!
//! A two-qubit gate whose operands sit at physical distance `d` costs
//! `d − 1` SWAPs, inserted along a BFS shortest path immediately before
//! the gate. The induced qubit permutation persists for the rest of the
//! circuit. Inserted SWAPs carry the [`passes::ROUTE_LABEL`] gate label
//! so they stay distinguishable from logical SWAPs.

pub mod backend;
pub mod compiled;
pub mod error;
pub mod manager;
pub mod pass;
pub mod passes;
pub mod property;
pub mod topology;

pub use backend::{CompileBackend, PassCompiler};
pub use compiled::CompiledCircuit;
pub use error::{CompileError, CompileResult};
pub use manager::{PassManager, PassManagerBuilder};
pub use pass::{Pass, PassKind};
pub use property::{Layout, PropertySet};
pub use topology::{CouplingMap, TopologyModel};
