use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoveError {
    /// The movement columns and the registry disagree on row count — some
    /// code path mutated one without the other.  Structural misuse, not a
    /// runtime condition to recover from; surfaced before any dispatch so an
    /// undersized buffer is never handed to the probe batch.
    #[error("movement columns hold {columns} rows but the registry holds {registry}")]
    ColumnsOutOfSync { registry: usize, columns: usize },
}

pub type MoveResult<T> = Result<T, MoveError>;
