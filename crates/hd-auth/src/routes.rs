/// The navigable surface of the dashboard, expressed as data so the session
/// layer can hand back "where to go next" without owning a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    Tickets,
    AddTicket,
    UpdateTicket(i64),
    Users,
    CreateUser,
    EditUser(i64),
}

impl Route {
    pub fn as_path(&self) -> String {
        match self {
            Self::Login => "/".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Tickets => "/ticket".to_string(),
            Self::AddTicket => "/addticket".to_string(),
            Self::UpdateTicket(id) => format!("/update-ticket/{id}"),
            Self::Users => "/users".to_string(),
            Self::CreateUser => "/users/create".to_string(),
            Self::EditUser(id) => format!("/users/{id}/edit"),
        }
    }

    /// Everything beyond the login and signup pages requires a session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }

    /// Where a navigation to this route actually lands: protected routes
    /// redirect anonymous sessions back to the login page.
    pub fn resolve(&self, authenticated: bool) -> Route {
        if self.requires_auth() && !authenticated {
            Route::Login
        } else {
            *self
        }
    }
}
