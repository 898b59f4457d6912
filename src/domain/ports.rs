use crate::error::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

/// A remote-like collaborator exposing one asynchronous retrieval operation.
///
/// Implementations own their transport, timeouts and retries; the aggregation
/// layer only sees the resolved value or failure reason.
#[async_trait]
pub trait Service: Send + Sync {
    /// Opaque identifier, used to attribute a failure to a specific service.
    fn id(&self) -> &str;

    /// Resolves exactly once with the retrieved value for `input`.
    async fn retrieve(&self, input: &str) -> Result<String, ServiceError>;
}

/// Shared handle to a service, cloneable into spawned tasks.
pub type ServiceRef = Arc<dyn Service>;
