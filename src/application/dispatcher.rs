use crate::domain::outcome::Outcome;
use crate::domain::ports::ServiceRef;
use crate::error::ServiceError;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle to one in-flight retrieval.
///
/// Resolves exactly once; the outcome is never overwritten and the task is
/// never retried or cancelled by this module.
pub struct Task {
    service: String,
    handle: JoinHandle<Result<String, ServiceError>>,
}

impl Task {
    /// Waits for the task to resolve and returns its outcome.
    ///
    /// A task that panicked or was cancelled by the runtime resolves to a
    /// failure outcome rather than propagating the panic.
    pub async fn outcome(self) -> Outcome {
        let result = match self.handle.await {
            Ok(result) => result,
            Err(join_err) => Err(ServiceError::Aborted(join_err.to_string())),
        };
        Outcome {
            service: self.service,
            result,
        }
    }
}

/// Starts one retrieval per (service, message) pair.
///
/// Every task begins running as soon as it is spawned; a failure in one task
/// never cancels or delays its siblings, and no outcome is inspected here.
/// Callers must ensure both slices have equal length before dispatching.
pub fn dispatch(services: &[ServiceRef], messages: &[String]) -> Vec<Task> {
    tracing::debug!(tasks = services.len(), "dispatching retrievals");
    services
        .iter()
        .zip(messages)
        .map(|(service, message)| {
            let service = Arc::clone(service);
            let message = message.clone();
            let id = service.id().to_string();
            let handle = tokio::spawn(async move { service.retrieve(&message).await });
            Task {
                service: id,
                handle,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Service;
    use crate::infrastructure::local::{CannedService, FailingService};
    use async_trait::async_trait;

    struct PanickyService;

    #[async_trait]
    impl Service for PanickyService {
        fn id(&self) -> &str {
            "PANIC"
        }

        async fn retrieve(&self, _input: &str) -> Result<String, ServiceError> {
            panic!("worker gave up")
        }
    }

    #[tokio::test]
    async fn test_dispatch_one_task_per_pair() {
        let services: Vec<ServiceRef> = vec![
            Arc::new(CannedService::new("S1", "A")),
            Arc::new(CannedService::new("S2", "B")),
        ];
        let messages = vec!["m1".to_string(), "m2".to_string()];

        let tasks = dispatch(&services, &messages);
        assert_eq!(tasks.len(), 2);

        let first = tasks.into_iter().next().unwrap().outcome().await;
        assert_eq!(first.service, "S1");
        assert_eq!(first.result, Ok("A".to_string()));
    }

    #[tokio::test]
    async fn test_failure_outcome_names_service() {
        let services: Vec<ServiceRef> = vec![Arc::new(FailingService::new("BAD", "boom"))];
        let messages = vec!["m".to_string()];

        let outcome = dispatch(&services, &messages)
            .into_iter()
            .next()
            .unwrap()
            .outcome()
            .await;

        assert_eq!(outcome.service, "BAD");
        assert_eq!(
            outcome.result,
            Err(ServiceError::Retrieval("boom".to_string()))
        );
    }

    #[tokio::test]
    async fn test_panicking_service_becomes_aborted_outcome() {
        let services: Vec<ServiceRef> = vec![Arc::new(PanickyService)];
        let messages = vec!["m".to_string()];

        let outcome = dispatch(&services, &messages)
            .into_iter()
            .next()
            .unwrap()
            .outcome()
            .await;

        assert_eq!(outcome.service, "PANIC");
        assert!(matches!(outcome.result, Err(ServiceError::Aborted(_))));
    }

    #[tokio::test]
    async fn test_sibling_unaffected_by_failure() {
        let services: Vec<ServiceRef> = vec![
            Arc::new(FailingService::new("BAD", "boom")),
            Arc::new(CannedService::new("OK", "fine")),
        ];
        let messages = vec!["a".to_string(), "b".to_string()];

        let mut tasks = dispatch(&services, &messages).into_iter();
        let _ = tasks.next().unwrap().outcome().await;
        let sibling = tasks.next().unwrap().outcome().await;
        assert_eq!(sibling.result, Ok("fine".to_string()));
    }
}
