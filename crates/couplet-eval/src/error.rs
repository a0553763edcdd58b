//! Evaluator error types.

use thiserror::Error;

use couplet_compile::CompileError;
use couplet_ir::IrError;

/// Result type for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while building workloads, comparing
/// compilations, or exporting reports.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Bad problem size or malformed graph input. Surfaced immediately,
    /// never retried.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Compilation failed; includes unreachable topologies and backend
    /// failures, propagated unchanged.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// A compiled arm does not match the logical circuit once routing
    /// operations are ignored.
    #[error("Compiled circuit diverges from its logical circuit: {0}")]
    Equivalence(String),

    /// I/O error while writing a report.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("Export error: {0}")]
    Export(String),
}

impl From<IrError> for EvalError {
    fn from(e: IrError) -> Self {
        EvalError::Compile(CompileError::Ir(e))
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(e: serde_json::Error) -> Self {
        EvalError::Export(e.to_string())
    }
}
