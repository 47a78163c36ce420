//! # Admin Service
//!
//! Startup loading for the admin views.
//!
//! The service gathers, through the [`AdminApi`] port:
//! 1. **Processes**: regular processes followed by sub-processes, for component search.
//! 2. **Component ids**: every component the backend knows.
//! 3. **Unused components**: components no process references.
//! 4. **Catalog**: service definitions of every configured processing type.
//!
//! Each load is available on its own and propagates its failure.
//! [`AdminService::load_snapshot`] runs them together and degrades a failed
//! piece to empty instead.

use futures::future::try_join_all;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, error};

use flowadmin_common::config::Config;
use flowadmin_common::error::{AdminError, ApiError};
use flowadmin_common::model::catalog::ServiceDescriptor;
use flowadmin_common::model::definition::ServiceMap;
use flowadmin_common::model::process::Process;
use flowadmin_common::model::search::SearchHit;
use flowadmin_common::ports::AdminApi;
use flowadmin_common::success;

use crate::catalog;
use crate::invocation::InvocationController;
use crate::search;

/// Everything the admin views render, loaded once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminSnapshot {
    pub processes: Vec<Process>,
    pub component_ids: Vec<String>,
    pub unused_components: Vec<String>,
    pub catalog: Vec<ServiceDescriptor>,
    pub failures: Vec<LoadFailure>,
}

/// A piece of the snapshot that could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub what: &'static str,
    pub error: ApiError,
}

pub struct AdminService {
    api: Box<dyn AdminApi>,
    config: Config,
}

impl AdminService {
    pub fn new(api: Box<dyn AdminApi>, config: Config) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &dyn AdminApi {
        self.api.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Processes followed by sub-processes, fetched concurrently.
    pub async fn load_processes(&self) -> Result<Vec<Process>, ApiError> {
        let (mut processes, sub_processes) =
            tokio::try_join!(self.api.fetch_processes(), self.api.fetch_sub_processes())?;

        processes.extend(sub_processes.into_iter().map(|mut sub_process| {
            sub_process.is_subprocess = true;
            sub_process
        }));
        debug!(count = processes.len(), "loaded processes");
        Ok(processes)
    }

    pub async fn load_component_ids(&self) -> Result<Vec<String>, ApiError> {
        self.api.fetch_component_ids().await
    }

    pub async fn load_unused_components(&self) -> Result<Vec<String>, ApiError> {
        self.api.fetch_unused_components().await
    }

    /// Builds the catalog once every processing type's definitions have arrived.
    ///
    /// Any failed fetch fails the whole load so a partial catalog is never returned.
    pub async fn load_catalog(&self) -> Result<Vec<ServiceDescriptor>, ApiError> {
        let options: Value = Value::Object(serde_json::Map::new());
        let fetches = self.config.processing_types.iter().map(|processing_type| {
            let options = &options;
            async move {
                let data = self
                    .api
                    .fetch_process_definition_data(processing_type, false, options)
                    .await?;
                Ok::<_, ApiError>((processing_type.clone(), data))
            }
        });

        let services: IndexMap<String, ServiceMap> = try_join_all(fetches)
            .await?
            .into_iter()
            .map(|(processing_type, data)| {
                let services = catalog::decode_services(&processing_type, data.services());
                (processing_type, services)
            })
            .collect();

        let catalog = catalog::build(&services);
        success!("Catalog ready with {} services", catalog.len());
        Ok(catalog)
    }

    /// Loads every piece concurrently, leaving failed pieces empty.
    pub async fn load_snapshot(&self) -> AdminSnapshot {
        let (processes, component_ids, unused_components, catalog) = tokio::join!(
            self.load_processes(),
            self.load_component_ids(),
            self.load_unused_components(),
            self.load_catalog(),
        );

        let mut failures: Vec<LoadFailure> = Vec::new();
        AdminSnapshot {
            processes: settle("processes", processes, &mut failures),
            component_ids: settle("component ids", component_ids, &mut failures),
            unused_components: settle("unused components", unused_components, &mut failures),
            catalog: settle("service catalog", catalog, &mut failures),
            failures,
        }
    }

    pub fn search(&self, snapshot: &AdminSnapshot, component_id: Option<&str>) -> Vec<SearchHit> {
        search::search(&snapshot.processes, component_id)
    }

    /// A controller over the snapshot's catalog, first service selected.
    pub fn controller(&self, snapshot: &AdminSnapshot) -> InvocationController {
        InvocationController::new(snapshot.catalog.clone())
    }

    /// Loads only the catalog and hands it to a fresh controller.
    pub async fn load_controller(&self) -> Result<InvocationController, AdminError> {
        let catalog = self.load_catalog().await?;
        Ok(InvocationController::new(catalog))
    }
}

fn settle<T: Default>(what: &'static str, loaded: Result<T, ApiError>, failures: &mut Vec<LoadFailure>) -> T {
    loaded.unwrap_or_else(|e| {
        error!("Failed to load {what}: {e}");
        failures.push(LoadFailure { what, error: e });
        T::default()
    })
}
