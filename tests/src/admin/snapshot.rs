#![cfg(test)]
use flowadmin_common::error::ApiError;
use flowadmin_common::model::search::SearchHit;
use flowadmin_core::admin::{AdminService, AdminSnapshot};
use flowadmin_core::search::{self, HitColumn};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::backend;

/// Loads every view from an HTTP backend and checks what the admin page renders.
#[tokio::test]
async fn snapshot_loads_every_view() {
    let server: MockServer = MockServer::start().await;
    backend::mount_reads(&server).await;
    let service: AdminService = backend::admin_service(&server).expect("valid api url");

    let snapshot: AdminSnapshot = service.load_snapshot().await;

    assert!(snapshot.failures.is_empty(), "unexpected failures: {:?}", snapshot.failures);
    assert_eq!(snapshot.processes.len(), 3);
    assert!(snapshot.processes[2].is_subprocess);
    assert_eq!(snapshot.component_ids, vec!["clientService", "kafka-json", "filter"]);
    assert_eq!(snapshot.unused_components, vec!["filter"]);

    let catalog: Vec<(&str, &str)> = snapshot
        .catalog
        .iter()
        .map(|entry| (entry.name.as_str(), entry.processing_type.as_str()))
        .collect();
    assert_eq!(
        catalog,
        vec![
            ("alpha", "request-response"),
            ("clientService", "streaming"),
            ("clientService", "request-response"),
            ("zeta", "streaming"),
        ]
    );
}

#[tokio::test]
async fn search_spans_processes_and_subprocesses() {
    let server: MockServer = MockServer::start().await;
    backend::mount_reads(&server).await;
    let service: AdminService = backend::admin_service(&server).expect("valid api url");

    let snapshot: AdminSnapshot = service.load_snapshot().await;
    let mut hits: Vec<SearchHit> = service.search(&snapshot, Some("clientService"));

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].process, "fraud-detection");
    assert_eq!(hits[1].process, "shared-lookup");

    search::sort_hits(&mut hits, HitColumn::Node);
    assert_eq!(hits[0].node, "again");

    assert_eq!(search::filter_hits(&hits, "SHARED").len(), 1);
    assert!(service.search(&snapshot, Some("")).is_empty());
    assert_eq!(service.search(&snapshot, Some("kafka-json")).len(), 1);
}

#[tokio::test]
async fn failed_piece_leaves_the_rest_loaded() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/app/unusedComponents"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "down"})))
        .with_priority(1)
        .mount(&server)
        .await;
    backend::mount_reads(&server).await;
    let service: AdminService = backend::admin_service(&server).expect("valid api url");

    let snapshot: AdminSnapshot = service.load_snapshot().await;

    assert_eq!(snapshot.failures.len(), 1);
    assert_eq!(snapshot.failures[0].what, "unused components");
    assert!(matches!(snapshot.failures[0].error, ApiError::Status { status: 500, .. }));
    assert!(snapshot.unused_components.is_empty());
    assert_eq!(snapshot.catalog.len(), 4);
}

#[tokio::test]
async fn catalog_fails_when_a_processing_type_is_unreachable() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/processDefinitionData/request-response"))
        .respond_with(ResponseTemplate::new(503))
        .with_priority(1)
        .mount(&server)
        .await;
    backend::mount_reads(&server).await;
    let service: AdminService = backend::admin_service(&server).expect("valid api url");

    let result = service.load_catalog().await;

    assert!(matches!(result, Err(ApiError::Status { status: 503, .. })));
}
