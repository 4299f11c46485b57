use crate::Capability;

use hd_core::UserRole;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_admin_role_then_every_capability_is_granted() {
    for capability in [
        Capability::CreateTicket,
        Capability::EditTicket,
        Capability::DeleteTicket,
        Capability::ManageUsers,
        Capability::CreateCustomer,
        Capability::EditCustomer,
        Capability::DeleteCustomer,
        Capability::RecordActivity,
    ] {
        assert_that!(capability.granted_to(UserRole::Admin), eq(true));
    }
}

#[test]
fn given_member_role_then_only_activity_recording_is_granted() {
    assert_that!(
        Capability::RecordActivity.granted_to(UserRole::Member),
        eq(true)
    );

    for denied in [
        Capability::CreateTicket,
        Capability::EditTicket,
        Capability::DeleteTicket,
        Capability::ManageUsers,
        Capability::CreateCustomer,
        Capability::EditCustomer,
        Capability::DeleteCustomer,
    ] {
        assert_that!(denied.granted_to(UserRole::Member), eq(false));
    }
}
