use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum CustomerCommands {
    /// List customers
    List,

    /// Show one customer
    Show { id: i64 },

    /// Create a customer (admin)
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Update a customer (admin)
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a customer (admin)
    Delete { id: i64 },
}
