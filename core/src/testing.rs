//! In-memory [`AdminApi`] and fixtures for unit tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::{Value, json};

use flowadmin_common::error::ApiError;
use flowadmin_common::model::binding::ParameterBinding;
use flowadmin_common::model::catalog::{ParameterDescriptor, ServiceDescriptor};
use flowadmin_common::model::definition::ProcessDefinitionData;
use flowadmin_common::model::invocation::InvocationResponse;
use flowadmin_common::model::process::{Node, Process, ProcessGraph};
use flowadmin_common::ports::AdminApi;

pub fn process(id: &str, category: &str, nodes: Vec<Node>) -> Process {
    Process {
        id: id.to_string(),
        process_category: category.to_string(),
        processing_type: Some("streaming".to_string()),
        is_subprocess: false,
        json: Some(ProcessGraph { nodes }),
    }
}

pub fn descriptor(name: &str, processing_type: &str, parameters: &[&str]) -> ServiceDescriptor {
    ServiceDescriptor {
        name: name.to_string(),
        categories: vec!["Category1".to_string()],
        parameters: parameters
            .iter()
            .map(|parameter| ParameterDescriptor {
                name: parameter.to_string(),
                type_name: "java.lang.String".to_string(),
            })
            .collect(),
        return_type_name: "java.lang.String".to_string(),
        processing_type: processing_type.to_string(),
    }
}

/// Raw `services` object with one parameterless service per name.
pub fn services_json(names: &[&str]) -> Value {
    let entries: serde_json::Map<String, Value> = names
        .iter()
        .map(|name| {
            (
                name.to_string(),
                json!({
                    "categories": ["Category1"],
                    "parameters": [],
                    "returnType": {"refClazzName": "java.lang.String"}
                }),
            )
        })
        .collect();
    Value::Object(entries)
}

pub type SentInvocation = (String, String, Vec<ParameterBinding>);

#[derive(Default)]
pub struct MockAdminApi {
    pub processes: Vec<Process>,
    pub sub_processes: Vec<Process>,
    pub component_ids: Vec<String>,
    pub unused_components: Vec<String>,
    pub services: IndexMap<String, Value>,
    pub failing: HashSet<&'static str>,
    pub response: Option<InvocationResponse>,
    pub delay: Option<Duration>,
    pub invocations: AtomicUsize,
    pub definition_requests: Mutex<Vec<(String, bool, Value)>>,
    pub sent: Mutex<Option<SentInvocation>>,
}

impl MockAdminApi {
    pub fn with_response(mut self, response: InvocationResponse) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_services(mut self, processing_type: &str, services: Value) -> Self {
        self.services.insert(processing_type.to_string(), services);
        self
    }

    /// Makes the named operation fail with a transport error.
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn failing_invocation(self) -> Self {
        self.failing("invoke_service")
    }

    pub fn last_invocation(&self) -> Option<SentInvocation> {
        self.sent.lock().ok().and_then(|sent| sent.clone())
    }

    fn check(&self, operation: &'static str) -> Result<(), ApiError> {
        if self.failing.contains(operation) {
            return Err(ApiError::Transport(format!("{operation} unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl AdminApi for MockAdminApi {
    async fn fetch_processes(&self) -> Result<Vec<Process>, ApiError> {
        self.check("fetch_processes")?;
        Ok(self.processes.clone())
    }

    async fn fetch_sub_processes(&self) -> Result<Vec<Process>, ApiError> {
        self.check("fetch_sub_processes")?;
        Ok(self.sub_processes.clone())
    }

    async fn fetch_component_ids(&self) -> Result<Vec<String>, ApiError> {
        self.check("fetch_component_ids")?;
        Ok(self.component_ids.clone())
    }

    async fn fetch_unused_components(&self) -> Result<Vec<String>, ApiError> {
        self.check("fetch_unused_components")?;
        Ok(self.unused_components.clone())
    }

    async fn fetch_process_definition_data(
        &self,
        processing_type: &str,
        is_subprocess: bool,
        options: &Value,
    ) -> Result<ProcessDefinitionData, ApiError> {
        self.check("fetch_process_definition_data")?;
        if let Ok(mut requests) = self.definition_requests.lock() {
            requests.push((processing_type.to_string(), is_subprocess, options.clone()));
        }
        Ok(ProcessDefinitionData {
            process_definition: self
                .services
                .get(processing_type)
                .map(|services| json!({ "services": services })),
        })
    }

    async fn invoke_service(
        &self,
        processing_type: &str,
        service_name: &str,
        bindings: &[ParameterBinding],
    ) -> Result<InvocationResponse, ApiError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut sent) = self.sent.lock() {
            *sent = Some((processing_type.to_string(), service_name.to_string(), bindings.to_vec()));
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.check("invoke_service")?;
        Ok(self
            .response
            .clone()
            .unwrap_or_else(|| InvocationResponse::new(200, "")))
    }
}

/// Lets a test keep a handle on the mock after boxing it into a service.
pub struct Shared(pub Arc<MockAdminApi>);

#[async_trait]
impl AdminApi for Shared {
    async fn fetch_processes(&self) -> Result<Vec<Process>, ApiError> {
        self.0.fetch_processes().await
    }

    async fn fetch_sub_processes(&self) -> Result<Vec<Process>, ApiError> {
        self.0.fetch_sub_processes().await
    }

    async fn fetch_component_ids(&self) -> Result<Vec<String>, ApiError> {
        self.0.fetch_component_ids().await
    }

    async fn fetch_unused_components(&self) -> Result<Vec<String>, ApiError> {
        self.0.fetch_unused_components().await
    }

    async fn fetch_process_definition_data(
        &self,
        processing_type: &str,
        is_subprocess: bool,
        options: &Value,
    ) -> Result<ProcessDefinitionData, ApiError> {
        self.0
            .fetch_process_definition_data(processing_type, is_subprocess, options)
            .await
    }

    async fn invoke_service(
        &self,
        processing_type: &str,
        service_name: &str,
        bindings: &[ParameterBinding],
    ) -> Result<InvocationResponse, ApiError> {
        self.0.invoke_service(processing_type, service_name, bindings).await
    }
}
