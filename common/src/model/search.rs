use serde::Serialize;

/// A node referencing the searched component, with its owning process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub process: String,
    pub node: String,
    pub category: String,
}
