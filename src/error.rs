use thiserror::Error;

pub type Result<T> = std::result::Result<T, AggregateError>;

/// Failure produced by a single service retrieval.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("retrieval failed: {0}")]
    Retrieval(String),
    #[error("task aborted before resolving: {0}")]
    Aborted(String),
}

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("services and messages lists must have the same length")]
    ArgumentMismatch,
    #[error("service '{service}' failed")]
    ServiceFailure {
        service: String,
        #[source]
        source: ServiceError,
    },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
