use crate::application::dispatcher::{self, Task};
use crate::domain::outcome::Outcome;
use crate::domain::ports::ServiceRef;
use crate::error::{AggregateError, Result};

/// Waits for every dispatched task to resolve, in index order.
///
/// All tasks are already running, so awaiting the handles sequentially still
/// takes only as long as the slowest task. No policy combines anything before
/// this barrier has passed.
async fn resolve_all(tasks: Vec<Task>) -> Vec<Outcome> {
    let mut outcomes = Vec::with_capacity(tasks.len());
    for task in tasks {
        outcomes.push(task.outcome().await);
    }
    outcomes
}

/// Atomic policy: if any service fails, the whole aggregation fails.
///
/// Every task still runs to completion before the result resolves; when
/// several tasks fail, the reported failure is the one at the lowest index,
/// not the chronologically first. On success the values are joined with a
/// single space, in the original index order.
pub async fn run_fail_fast(services: &[ServiceRef], messages: &[String]) -> Result<String> {
    if services.len() != messages.len() {
        return Err(AggregateError::ArgumentMismatch);
    }

    let outcomes = resolve_all(dispatcher::dispatch(services, messages)).await;

    let mut values = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome.result {
            Ok(value) => values.push(value),
            Err(source) => {
                return Err(AggregateError::ServiceFailure {
                    service: outcome.service,
                    source,
                });
            }
        }
    }
    Ok(values.join(" "))
}

/// Best-effort policy: failures are dropped, successes are kept.
///
/// Never fails. Returns the successful values in their original relative
/// order; the result is empty when every task failed or the input lists'
/// lengths do not match (in which case nothing is dispatched).
pub async fn run_fail_partial(services: &[ServiceRef], messages: &[String]) -> Vec<String> {
    if services.len() != messages.len() {
        return Vec::new();
    }

    let outcomes = resolve_all(dispatcher::dispatch(services, messages)).await;

    outcomes
        .into_iter()
        .filter_map(|outcome| match outcome.result {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(service = %outcome.service, %error, "dropping failed retrieval");
                None
            }
        })
        .collect()
}

/// Fallback policy: each failure is replaced with `fallback`.
///
/// Never fails. Joins one token per dispatched task with single spaces, in
/// the original index order; a length mismatch yields the empty string with
/// nothing dispatched.
pub async fn run_fail_soft(
    services: &[ServiceRef],
    messages: &[String],
    fallback: &str,
) -> String {
    if services.len() != messages.len() {
        return String::new();
    }

    let outcomes = resolve_all(dispatcher::dispatch(services, messages)).await;

    let tokens: Vec<String> = outcomes
        .into_iter()
        .map(|outcome| match outcome.result {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(service = %outcome.service, %error, "substituting fallback");
                fallback.to_string()
            }
        })
        .collect();
    tokens.join(" ")
}
