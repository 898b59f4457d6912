use crate::domain::ports::Service;
use crate::error::ServiceError;
use async_trait::async_trait;
use std::time::Duration;

/// A service that always replies with a fixed value.
///
/// Stands in for a healthy remote collaborator; used by the CLI plan runner
/// and as a test double.
pub struct CannedService {
    id: String,
    reply: String,
}

impl CannedService {
    pub fn new(id: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Service for CannedService {
    fn id(&self) -> &str {
        &self.id
    }

    async fn retrieve(&self, _input: &str) -> Result<String, ServiceError> {
        Ok(self.reply.clone())
    }
}

/// A service that always fails, optionally after a delay.
pub struct FailingService {
    id: String,
    reason: String,
    delay: Duration,
}

impl FailingService {
    pub fn new(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::with_delay(id, reason, Duration::ZERO)
    }

    pub fn with_delay(
        id: impl Into<String>,
        reason: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            id: id.into(),
            reason: reason.into(),
            delay,
        }
    }
}

#[async_trait]
impl Service for FailingService {
    fn id(&self) -> &str {
        &self.id
    }

    async fn retrieve(&self, _input: &str) -> Result<String, ServiceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Err(ServiceError::Retrieval(self.reason.clone()))
    }
}

/// A service that sleeps before replying, for exercising concurrency.
pub struct DelayedService {
    id: String,
    reply: String,
    delay: Duration,
}

impl DelayedService {
    pub fn new(id: impl Into<String>, reply: impl Into<String>, delay: Duration) -> Self {
        Self {
            id: id.into(),
            reply: reply.into(),
            delay,
        }
    }
}

#[async_trait]
impl Service for DelayedService {
    fn id(&self) -> &str {
        &self.id
    }

    async fn retrieve(&self, _input: &str) -> Result<String, ServiceError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.reply.clone())
    }
}
