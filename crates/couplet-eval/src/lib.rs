//! Couplet Evaluator: workloads, topology comparison, and reporting.
//!
//! This crate is the top of the comparison pipeline:
//!
//! ```text
//! WorkloadSpec ──build──► Circuit
//!                           │
//!              ┌── compile (baseline model) ──┐
//!              │                              │
//!              └── compile (reference model) ─┤
//!                                             ▼
//!                                     ComparisonResult
//!                                             │
//!                          table / CSV / JSON report
//! ```
//!
//! The workload generators reproduce the circuit families of the demo
//! suite (QFT, integer comparator, variational ansatz, QAOA Max-Cut,
//! Heisenberg evolution, Steane encoding, …); [`compare`] runs a
//! [`CompileBackend`](couplet_compile::CompileBackend) once per topology
//! arm and derives the comparative metrics; the report module renders
//! them.
//!
//! # Example
//!
//! ```rust
//! use couplet_compile::{PassCompiler, TopologyModel};
//! use couplet_eval::{Workload, WorkloadSpec, compare, render_table};
//!
//! let circuit = WorkloadSpec::new(Workload::Qft, 6).build().unwrap();
//! let result = compare(
//!     &PassCompiler::new(),
//!     &circuit,
//!     &TopologyModel::linear(6),
//!     &TopologyModel::all_to_all(6),
//! )
//! .unwrap();
//!
//! assert_eq!(result.reference.routing_ops, 0);
//! println!("{}", render_table(&result));
//! ```

pub mod compare;
pub mod error;
pub mod export;
pub mod graph;
pub mod report;
pub mod workload;

pub use compare::{ComparisonResult, TopologySummary, compare};
pub use error::{EvalError, EvalResult};
pub use export::{ExportConfig, to_json, write_report};
pub use graph::Graph;
pub use report::{ComparisonReport, SCHEMA_VERSION, render_csv, render_summaries_csv, render_table};
pub use workload::{Workload, WorkloadSpec};
