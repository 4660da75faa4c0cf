//! Graph-subsystem error type.

use thiserror::Error;

use af_core::CoreError;

/// Why a link was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeFault {
    #[error("a room cannot be linked to itself")]
    SelfLink,

    #[error("room `{0}` is not defined")]
    UnknownRoom(String),
}

/// Errors produced by `af-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid link {from}-{to}: {fault}")]
    InvalidEdge {
        from:  String,
        to:    String,
        fault: EdgeFault,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("start or end room is not defined")]
    EndpointsUndefined,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
