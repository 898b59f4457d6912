use crate::domain::ports::ServiceRef;
use crate::error::{AggregateError, Result};
use crate::infrastructure::local::{CannedService, FailingService};
use serde::Deserialize;
use std::io::Read;
use std::sync::Arc;

/// How a planned service behaves when invoked.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    Ok,
    Fail,
}

/// One row of a fan-out plan.
///
/// `reply` is the canned value for `ok` rows and the failure reason for
/// `fail` rows; `message` is the input sent to the service.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PlanEntry {
    pub service: String,
    pub behavior: Behavior,
    pub reply: String,
    pub message: String,
}

/// Reads fan-out plans from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<PlanEntry>`,
/// trimming whitespace and tolerating flexible record lengths.
pub struct PlanReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PlanReader<R> {
    /// Creates a new `PlanReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes plan entries.
    pub fn entries(self) -> impl Iterator<Item = Result<PlanEntry>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(AggregateError::from))
    }
}

/// Turns plan entries into the paired service and message lists the
/// aggregator expects, backed by in-process stub services.
pub fn build_requests(entries: &[PlanEntry]) -> (Vec<ServiceRef>, Vec<String>) {
    let services = entries
        .iter()
        .map(|entry| match entry.behavior {
            Behavior::Ok => {
                Arc::new(CannedService::new(&entry.service, &entry.reply)) as ServiceRef
            }
            Behavior::Fail => {
                Arc::new(FailingService::new(&entry.service, &entry.reply)) as ServiceRef
            }
        })
        .collect();
    let messages = entries.iter().map(|entry| entry.message.clone()).collect();
    (services, messages)
}
