use crate::error::ServiceError;

/// The resolved result of one dispatched task.
///
/// Written exactly once when the task finishes and read exactly once by the
/// aggregation policy; `service` names the originating service so failures
/// can be attributed.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub service: String,
    pub result: Result<String, ServiceError>,
}
