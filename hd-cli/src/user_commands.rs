use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum UserCommands {
    /// List users (admin)
    List,

    /// Show one user
    Show { id: i64 },

    /// Create a user (admin)
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// ADMIN | MEMBER
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Update a user (admin)
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// ADMIN | MEMBER
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Delete a user (admin)
    Delete { id: i64 },

    /// Change the signed-in user's own password
    ChangePassword {
        #[arg(long)]
        old_password: String,
        #[arg(long)]
        new_password: String,
    },
}
