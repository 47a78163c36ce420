//! HTTP implementation of the [`AdminApi`] port.
//!
//! All paths are relative to the API base url, e.g. `http://localhost:8081/api`.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use flowadmin_common::config::Config;
use flowadmin_common::error::ApiError;
use flowadmin_common::model::binding::ParameterBinding;
use flowadmin_common::model::definition::ProcessDefinitionData;
use flowadmin_common::model::invocation::InvocationResponse;
use flowadmin_common::model::process::Process;
use flowadmin_common::ports::AdminApi;

#[derive(Debug, Clone)]
pub struct HttpAdminApi {
    client: Client,
    base_url: Url,
}

impl HttpAdminApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidUrl(format!("unsupported scheme: {base_url}")));
        }
        let base_url: Url = base_url
            .parse()
            .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, ApiError> {
        Self::new(&cfg.api_url)
    }

    /// Appends percent-encoded `segments` to the base url.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url: Url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url: Url = self.endpoint(segments)?;
        debug!(%url, "GET");
        let response: Response = self.client.get(url.clone()).send().await.map_err(transport)?;
        read_json(response, &url).await
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(ApiError::Status {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body: String = response.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{url}: {e}")))
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn fetch_processes(&self) -> Result<Vec<Process>, ApiError> {
        self.get_json(&["processes"]).await
    }

    async fn fetch_sub_processes(&self) -> Result<Vec<Process>, ApiError> {
        self.get_json(&["subProcesses"]).await
    }

    async fn fetch_component_ids(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(&["processDefinitionData", "componentIds"]).await
    }

    async fn fetch_unused_components(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(&["app", "unusedComponents"]).await
    }

    async fn fetch_process_definition_data(
        &self,
        processing_type: &str,
        is_subprocess: bool,
        options: &Value,
    ) -> Result<ProcessDefinitionData, ApiError> {
        let mut url: Url = self.endpoint(&["processDefinitionData", processing_type])?;
        url.query_pairs_mut()
            .append_pair("isSubprocess", &is_subprocess.to_string());

        debug!(%url, "POST");
        let response: Response = self
            .client
            .post(url.clone())
            .json(options)
            .send()
            .await
            .map_err(transport)?;
        read_json(response, &url).await
    }

    async fn invoke_service(
        &self,
        processing_type: &str,
        service_name: &str,
        bindings: &[ParameterBinding],
    ) -> Result<InvocationResponse, ApiError> {
        let url: Url = self.endpoint(&["service", processing_type, service_name])?;
        info!(%url, parameters = bindings.len(), "invoking service");

        let response: Response = self
            .client
            .post(url)
            .json(bindings)
            .send()
            .await
            .map_err(transport)?;

        let status: u16 = response.status().as_u16();
        let body: String = response.text().await.map_err(transport)?;
        Ok(InvocationResponse::new(status, body))
    }
}
