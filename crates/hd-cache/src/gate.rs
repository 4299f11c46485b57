use hd_auth::Capability;
use hd_client::{ApiClient, ClientResult, Notification};
use hd_core::User;

use log::warn;

/// Toast text for a client-side capability denial
pub const PERMISSION_DENIED_MESSAGE: &str = "You do not have permission to perform this action";

/// Check the capability table before a mutation. A denial surfaces one
/// toast and rejects without issuing any request; the remote API still
/// enforces permissions for whatever does go out.
pub(crate) fn authorize_or_notify(api: &ApiClient, capability: Capability) -> ClientResult<User> {
    match api.session().authorize(capability) {
        Ok(user) => Ok(user),
        Err(denied) => {
            warn!("blocked {}: {denied}", capability.as_str());
            api.notifier()
                .notify(Notification::error(PERMISSION_DENIED_MESSAGE));
            Err(denied.into())
        }
    }
}
