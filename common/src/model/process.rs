//! # Process Graph Model
//!
//! Processes arrive from the backend as JSON. Only the fields needed to locate
//! component usages are modelled; everything else is ignored on decode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    #[serde(default)]
    pub process_category: String,
    #[serde(default)]
    pub processing_type: Option<String>,
    #[serde(default)]
    pub is_subprocess: bool,
    /// The displayable graph. Listings may omit it, in which case the process has no nodes.
    #[serde(default)]
    pub json: Option<ProcessGraph>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Process {
    pub fn nodes(&self) -> &[Node] {
        self.json
            .as_ref()
            .map(|graph| graph.nodes.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Filter,
    Switch,
    Split,
    Variable,
    VariableBuilder,
    Enricher,
    Processor,
    Source,
    Sink,
    SubprocessInput,
    SubprocessOutput,
    SubprocessInputDefinition,
    SubprocessOutputDefinition,
    CustomNode,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceRef {
    #[serde(default)]
    pub id: Option<String>,
}

/// Reference carried by sources, sinks and sub-process inputs.
///
/// Sources and sinks name their component in `typ`, sub-process inputs in `id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeRef {
    #[serde(default)]
    pub typ: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceRef>,
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<NodeRef>,
    #[serde(default, rename = "nodeType", skip_serializing_if = "Option::is_none")]
    pub node_type_name: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            node_type,
            service: None,
            reference: None,
            node_type_name: None,
        }
    }

    pub fn with_service(mut self, service_id: impl Into<String>) -> Self {
        self.service = Some(ServiceRef {
            id: Some(service_id.into()),
        });
        self
    }

    pub fn with_ref_typ(mut self, typ: impl Into<String>) -> Self {
        self.reference.get_or_insert_with(NodeRef::default).typ = Some(typ.into());
        self
    }

    pub fn with_ref_id(mut self, id: impl Into<String>) -> Self {
        self.reference.get_or_insert_with(NodeRef::default).id = Some(id.into());
        self
    }

    pub fn with_custom_type(mut self, node_type_name: impl Into<String>) -> Self {
        self.node_type_name = Some(node_type_name.into());
        self
    }

    /// Identifier of the component this node uses, if any.
    ///
    /// Built-in node kinds map to fixed component names; service, source, sink,
    /// sub-process and custom nodes name their component in a nested field.
    pub fn component_id(&self) -> Option<&str> {
        match self.node_type {
            NodeType::Filter => Some("filter"),
            NodeType::Switch => Some("switch"),
            NodeType::Split => Some("split"),
            NodeType::Variable => Some("variable"),
            NodeType::VariableBuilder => Some("mapVariable"),
            NodeType::Enricher | NodeType::Processor => {
                self.service.as_ref().and_then(|service| service.id.as_deref())
            }
            NodeType::Source | NodeType::Sink => {
                self.reference.as_ref().and_then(|reference| reference.typ.as_deref())
            }
            NodeType::SubprocessInput => {
                self.reference.as_ref().and_then(|reference| reference.id.as_deref())
            }
            NodeType::CustomNode => self.node_type_name.as_deref(),
            NodeType::SubprocessOutput
            | NodeType::SubprocessInputDefinition
            | NodeType::SubprocessOutputDefinition
            | NodeType::Unknown => None,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
