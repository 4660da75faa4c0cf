use af_core::CoreError;
use af_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("start or end room is not defined (start `{start}`, end `{end}`)")]
    EndpointsUndefined { start: String, end: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type SimResult<T> = Result<T, SimError>;
