use hd_core::UserRole;

/// Mutating operations the UI may offer, gated by the signed-in role.
///
/// This is the single authorization table every mutating call consults.
/// It is advisory UI gating only: the remote API enforces permissions
/// independently and remains the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    CreateTicket,
    EditTicket,
    DeleteTicket,
    ManageUsers,
    CreateCustomer,
    EditCustomer,
    DeleteCustomer,
    RecordActivity,
}

impl Capability {
    pub fn as_str(&self) -> &str {
        match self {
            Self::CreateTicket => "create_ticket",
            Self::EditTicket => "edit_ticket",
            Self::DeleteTicket => "delete_ticket",
            Self::ManageUsers => "manage_users",
            Self::CreateCustomer => "create_customer",
            Self::EditCustomer => "edit_customer",
            Self::DeleteCustomer => "delete_customer",
            Self::RecordActivity => "record_activity",
        }
    }

    /// Whether `role` holds this capability. Admins hold everything;
    /// members may only append to a ticket's activity trail.
    pub fn granted_to(&self, role: UserRole) -> bool {
        match role {
            UserRole::Admin => true,
            UserRole::Member => matches!(self, Self::RecordActivity),
        }
    }
}
