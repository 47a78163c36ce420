//! # Outbound Ports
//!
//! Contracts for everything the admin core needs from the backend.
//!
//! ## Rules
//! 1. Only traits live here.
//! 2. Signatures use [`crate::model`] types, never transport types.
//! 3. Implementations live in adapter crates (`flowadmin-client`) or in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::model::binding::ParameterBinding;
use crate::model::definition::ProcessDefinitionData;
use crate::model::invocation::InvocationResponse;
use crate::model::process::Process;

#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn fetch_processes(&self) -> Result<Vec<Process>, ApiError>;

    async fn fetch_sub_processes(&self) -> Result<Vec<Process>, ApiError>;

    async fn fetch_component_ids(&self) -> Result<Vec<String>, ApiError>;

    async fn fetch_unused_components(&self) -> Result<Vec<String>, ApiError>;

    async fn fetch_process_definition_data(
        &self,
        processing_type: &str,
        is_subprocess: bool,
        options: &Value,
    ) -> Result<ProcessDefinitionData, ApiError>;

    /// Calls a service once with the given bindings.
    ///
    /// Any HTTP status is a successful call here; only transport problems are errors.
    async fn invoke_service(
        &self,
        processing_type: &str,
        service_name: &str,
        bindings: &[ParameterBinding],
    ) -> Result<InvocationResponse, ApiError>;
}
