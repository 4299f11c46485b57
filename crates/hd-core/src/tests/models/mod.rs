mod ticket;
mod ticket_status;
mod user_role;
