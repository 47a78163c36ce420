//! A mock admin backend serving a small fixed data set.

use flowadmin_client::HttpAdminApi;
use flowadmin_common::config::Config;
use flowadmin_core::admin::AdminService;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn config(server: &MockServer) -> Config {
    Config {
        api_url: format!("{}/api", server.uri()),
        ..Config::default()
    }
}

pub fn admin_service(server: &MockServer) -> anyhow::Result<AdminService> {
    let cfg: Config = config(server);
    let api: HttpAdminApi = HttpAdminApi::from_config(&cfg)?;
    Ok(AdminService::new(Box::new(api), cfg))
}

fn service(parameters: &[(&str, &str)]) -> Value {
    let parameters: Vec<Value> = parameters
        .iter()
        .map(|(name, typ)| json!({"name": name, "typ": {"refClazzName": typ}}))
        .collect();
    json!({
        "categories": ["Category1"],
        "parameters": parameters,
        "returnType": {"refClazzName": "java.lang.String"}
    })
}

async fn get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{route}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn definitions(server: &MockServer, processing_type: &str, services: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/api/processDefinitionData/{processing_type}")))
        .and(query_param("isSubprocess", "false"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"processDefinition": {"services": services}})),
        )
        .mount(server)
        .await;
}

/// Mounts every read endpoint with healthy data.
pub async fn mount_reads(server: &MockServer) {
    get(
        server,
        "processes",
        json!([
            {
                "id": "fraud-detection",
                "processCategory": "Fraud",
                "processingType": "streaming",
                "json": {"nodes": [
                    {"id": "in", "type": "Source", "ref": {"typ": "kafka-json"}},
                    {"id": "lookup", "type": "Enricher", "service": {"id": "clientService"}},
                    {"id": "mystery", "type": "SomethingNew"}
                ]}
            },
            {"id": "draft", "processCategory": "Default"}
        ]),
    )
    .await;
    get(
        server,
        "subProcesses",
        json!([
            {
                "id": "shared-lookup",
                "processCategory": "Fraud",
                "json": {"nodes": [
                    {"id": "again", "type": "Enricher", "service": {"id": "clientService"}}
                ]}
            }
        ]),
    )
    .await;
    get(server, "processDefinitionData/componentIds", json!(["clientService", "kafka-json", "filter"])).await;
    get(server, "app/unusedComponents", json!(["filter"])).await;

    definitions(
        server,
        "streaming",
        json!({
            "zeta": service(&[]),
            "clientService": service(&[("clientId", "java.lang.String")])
        }),
    )
    .await;
    definitions(
        server,
        "request-response",
        json!({
            "alpha": service(&[("a", "java.lang.Long"), ("b", "java.lang.String")]),
            "clientService": service(&[])
        }),
    )
    .await;
}
