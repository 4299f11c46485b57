use crate::{CreateTicketRequest, Ticket, TicketPriority, TicketStatus, TicketType};

use serde_json::json;

#[test]
fn test_ticket_deserializes_api_payload() {
    let payload = json!({
        "id": 7,
        "title": "Cannot log in",
        "description": "Password reset loop",
        "status": "IN_PROGRESS",
        "priority": "HIGH",
        "type": "INCIDENT",
        "tags": ["auth", "urgent"],
        "createdById": 1,
        "assignedToId": 2,
        "customerId": 4,
        "createdBy": {"id": 1, "name": "An Nguyen"},
        "assignedTo": {"id": 2, "name": "Binh Tran"},
        "customer": {"id": 4, "name": "Acme Co", "email": "it@acme.test"},
        "followers": [{"id": 3, "name": "Chi Le"}],
        "createdAt": "2025-06-01T08:00:00Z",
        "updatedAt": "2025-06-02T09:30:00Z"
    });

    let ticket: Ticket = serde_json::from_value(payload).unwrap();

    assert_eq!(ticket.id, 7);
    assert_eq!(ticket.status, TicketStatus::InProgress);
    assert_eq!(ticket.priority, TicketPriority::High);
    assert_eq!(ticket.ticket_type, TicketType::Incident);
    assert_eq!(ticket.customer.id, 4);
    assert_eq!(ticket.followers.len(), 1);
    assert!(ticket.updated_at > ticket.created_at);
}

#[test]
fn test_ticket_rejects_unknown_status() {
    let payload = json!({
        "id": 1,
        "title": "x",
        "status": "REOPENED",
        "priority": "LOW",
        "type": "TASK",
        "createdById": 1,
        "customerId": 1,
        "createdBy": {"id": 1, "name": "a"},
        "customer": {"id": 1, "name": "c", "email": "c@c.io"},
        "createdAt": "2025-06-01T08:00:00Z",
        "updatedAt": "2025-06-01T08:00:00Z"
    });

    assert!(serde_json::from_value::<Ticket>(payload).is_err());
}

#[test]
fn test_create_request_skips_absent_fields() {
    let req = CreateTicketRequest {
        title: "X".to_string(),
        customer_id: 4,
        ticket_type: Some(TicketType::Incident),
        priority: Some(TicketPriority::High),
        ..Default::default()
    };

    let body = serde_json::to_value(&req).unwrap();

    assert_eq!(body["title"], "X");
    assert_eq!(body["customerId"], 4);
    assert_eq!(body["type"], "INCIDENT");
    assert!(body.get("description").is_none());
    assert!(body.get("assignedToId").is_none());
}
