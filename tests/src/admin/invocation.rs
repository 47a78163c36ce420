#![cfg(test)]
use std::time::Duration;

use flowadmin_common::error::AdminError;
use flowadmin_common::model::invocation::{InvocationResult, InvocationStatus};
use flowadmin_core::admin::AdminService;
use flowadmin_core::invocation::InvocationController;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::backend;

const TIMEOUT: Duration = Duration::from_secs(5);

async fn controller(server: &MockServer) -> (AdminService, InvocationController) {
    backend::mount_reads(server).await;
    let service: AdminService = backend::admin_service(server).expect("valid api url");
    let controller = service.load_controller().await.expect("catalog loads");
    (service, controller)
}

#[tokio::test]
async fn first_service_is_selected_with_empty_bindings() {
    let server: MockServer = MockServer::start().await;
    let (_service, controller) = controller(&server).await;

    let selected = controller.selected().expect("a service is selected");
    assert_eq!(selected.name, "alpha");
    assert_eq!(controller.bindings().len(), 2);
    assert!(controller.bindings().iter().all(|b| b.expression.body.is_empty()));
    assert_eq!(controller.response_text(), "");
}

#[tokio::test]
async fn successful_invocation_shows_raw_body() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/service/streaming/clientService"))
        .and(body_json(json!([
            {"name": "clientId", "expression": {"language": "spel", "expression": "'42'"}}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;
    let (service, mut controller) = controller(&server).await;

    controller
        .select_service_in("streaming", "clientService")
        .expect("service exists");
    controller.edit_parameter("clientId", "'42'").expect("editable");
    let result: InvocationResult = controller
        .invoke(service.api(), TIMEOUT)
        .await
        .expect("invocation completes");

    assert_eq!(result.status, InvocationStatus::Success);
    assert_eq!(controller.response_text(), "ok");
}

#[tokio::test]
async fn server_error_shows_message_field() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/service/request-response/alpha"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;
    let (service, mut controller) = controller(&server).await;

    let result = controller.invoke(service.api(), TIMEOUT).await.expect("invocation completes");

    assert_eq!(result.status, InvocationStatus::ServerError);
    assert_eq!(controller.response_text(), "boom");
}

#[tokio::test]
async fn other_error_statuses_show_raw_body() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/service/request-response/alpha"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad expression"))
        .mount(&server)
        .await;
    let (service, mut controller) = controller(&server).await;

    let result = controller.invoke(service.api(), TIMEOUT).await.expect("invocation completes");

    assert_eq!(result.status, InvocationStatus::Success);
    assert_eq!(result.text, "bad expression");
}

#[tokio::test]
async fn slow_service_times_out() {
    let server: MockServer = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/service/request-response/alpha"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;
    let (service, mut controller) = controller(&server).await;

    let result = controller
        .invoke(service.api(), Duration::from_millis(100))
        .await
        .expect("timeout is a result");

    assert_eq!(result.status, InvocationStatus::TimedOut);
    assert_eq!(result.text, "invocation timed out after 100 ms");
    assert!(!controller.is_in_flight());
}

#[tokio::test]
async fn unknown_service_is_rejected() {
    let server: MockServer = MockServer::start().await;
    let (_service, mut controller) = controller(&server).await;

    let result = controller.select_service("nope").map(|_| ());

    assert_eq!(result, Err(AdminError::ServiceNotFound("nope".to_string())));
    assert_eq!(controller.selected().map(|s| s.name.as_str()), Some("alpha"));
}
