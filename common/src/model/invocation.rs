use serde::{Deserialize, Serialize};

/// Raw answer of the invocation endpoint, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResponse {
    pub status: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationStatus {
    Success,
    ServerError,
    TimedOut,
}

/// Outcome shown to the operator.
///
/// `text` is what gets displayed whether the call worked or not; `status`
/// only records which path produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResult {
    pub text: String,
    pub status: InvocationStatus,
}
