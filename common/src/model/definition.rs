use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Services of one processing type, keyed by service name.
pub type ServiceMap = IndexMap<String, ServiceDefinition>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub ref_clazz_name: String,
}

impl TypeRef {
    pub fn new(ref_clazz_name: impl Into<String>) -> Self {
        Self {
            ref_clazz_name: ref_clazz_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub name: String,
    pub typ: TypeRef,
}

impl ParameterDefinition {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            typ: TypeRef::new(type_name),
        }
    }
}

/// A backend service as registered for a processing type.
///
/// The service name and processing type are the keys of the maps it is delivered in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
    pub return_type: TypeRef,
}

/// Response of the process definition endpoint.
///
/// Kept as raw JSON below `processDefinition`: the catalog decodes each
/// processing type's services tolerantly so one malformed map cannot sink the rest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinitionData {
    #[serde(default)]
    pub process_definition: Option<Value>,
}

impl ProcessDefinitionData {
    pub fn services(&self) -> Option<&Value> {
        self.process_definition
            .as_ref()
            .and_then(|definition| definition.get("services"))
    }
}
