//! Integration tests for the ticket service using a wiremock mock server

mod common;

use common::{error_envelope, establish_session, ok_envelope, test_client, ticket_json};

use hd_client::{ClientError, TicketService};
use hd_core::{CreateTicketRequest, TicketPriority, TicketType, UserRole};

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_tickets_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            ticket_json(1, "Printer on fire", "2025-06-02T09:00:00Z"),
            ticket_json(2, "Password reset", "2025-06-01T09:00:00Z"),
        ]))))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let tickets = TicketService::new(client.api.clone()).list().await.unwrap();

    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].title, "Printer on fire");
    assert_eq!(tickets[1].customer.id, 4);
}

#[tokio::test]
async fn test_requests_carry_bearer_token_from_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/7"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(ticket_json(7, "X", "2025-06-02T09:00:00Z"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    establish_session(&client, UserRole::Admin, "tok");

    let ticket = TicketService::new(client.api.clone()).get(7).await.unwrap();

    assert_eq!(ticket.id, 7);
}

#[tokio::test]
async fn test_create_ticket_posts_camel_case_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tickets"))
        .and(body_string_contains("\"customerId\":4"))
        .and(body_string_contains("\"type\":\"INCIDENT\""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(ticket_json(9, "X", "2025-06-03T09:00:00Z"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let request = CreateTicketRequest {
        title: "X".to_string(),
        customer_id: 4,
        ticket_type: Some(TicketType::Incident),
        priority: Some(TicketPriority::High),
        ..Default::default()
    };

    let ticket = TicketService::new(client.api.clone())
        .create(&request)
        .await
        .unwrap();

    assert_eq!(ticket.id, 9);
}

#[tokio::test]
async fn test_create_ticket_with_empty_title_never_hits_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tickets"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let request = CreateTicketRequest {
        title: "  ".to_string(),
        customer_id: 4,
        ..Default::default()
    };

    let result = TicketService::new(client.api.clone()).create(&request).await;

    assert!(matches!(result, Err(ClientError::Validation { .. })));
}

#[tokio::test]
async fn test_error_envelope_is_toasted_and_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/tickets/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(error_envelope(409, "constraint violation")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = TicketService::new(client.api.clone()).delete(7).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("constraint violation"));
    assert_eq!(
        client.notifier.messages(),
        vec!["constraint violation".to_string()]
    );
}

#[tokio::test]
async fn test_non_envelope_error_body_maps_to_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = TicketService::new(client.api.clone()).list().await;

    match result {
        Err(ClientError::Api { code, .. }) => assert_eq!(code, 502),
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(client.notifier.messages().len(), 1);
}

#[tokio::test]
async fn test_unauthorized_api_error_is_flagged_as_auth_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(error_envelope(401, "token expired")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = TicketService::new(client.api.clone())
        .list()
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
}
