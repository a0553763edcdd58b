//! Error types for the compilation crate.

use couplet_ir::IrError;
use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// A routing pass ran without a coupling map in the property set.
    #[error("No coupling map available for routing")]
    MissingCouplingMap,

    /// A pass required a qubit layout that has not been computed.
    #[error("No qubit layout available")]
    MissingLayout,

    /// The circuit does not fit on the topology model.
    #[error("Circuit requires {required} qubits but the topology provides {available}")]
    CircuitTooLarge {
        /// Number of qubits the circuit uses.
        required: usize,
        /// Number of physical qubits the topology provides.
        available: u32,
    },

    /// The topology's adjacency graph is disconnected between two qubits
    /// that need to interact.
    #[error("No routing path between physical qubits {qubit1} and {qubit2}: topology is disconnected")]
    UnreachableTopology {
        /// First physical qubit.
        qubit1: u32,
        /// Second physical qubit.
        qubit2: u32,
    },

    /// An external compilation backend failed. Propagated unchanged.
    #[error("Compilation backend '{backend}' failed: {message}")]
    Backend {
        /// Name of the backend that failed.
        backend: String,
        /// Backend-reported failure message.
        message: String,
    },

    /// An underlying IR operation failed.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
