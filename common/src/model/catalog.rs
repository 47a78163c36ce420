use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_name: String,
}

/// One invokable entry of the flattened service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub name: String,
    pub categories: Vec<String>,
    pub parameters: Vec<ParameterDescriptor>,
    pub return_type_name: String,
    pub processing_type: String,
}
