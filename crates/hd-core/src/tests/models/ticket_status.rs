use crate::TicketStatus;

use std::str::FromStr;

#[test]
fn test_ticket_status_as_str() {
    assert_eq!(TicketStatus::Open.as_str(), "OPEN");
    assert_eq!(TicketStatus::InProgress.as_str(), "IN_PROGRESS");
    assert_eq!(TicketStatus::Solved.as_str(), "SOLVED");
    assert_eq!(TicketStatus::Closed.as_str(), "CLOSED");
    assert_eq!(TicketStatus::Pending.as_str(), "PENDING");
}

#[test]
fn test_ticket_status_from_str() {
    assert_eq!(
        TicketStatus::from_str("IN_PROGRESS").unwrap(),
        TicketStatus::InProgress
    );
    assert!(TicketStatus::from_str("in_progress").is_err());
    assert!(TicketStatus::from_str("RESOLVED").is_err());
}

#[test]
fn test_ticket_status_default() {
    assert_eq!(TicketStatus::default(), TicketStatus::Open);
}

#[test]
fn test_ticket_status_wire_format() {
    let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
    assert_eq!(json, "\"IN_PROGRESS\"");
}
