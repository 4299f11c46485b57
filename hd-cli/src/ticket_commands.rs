use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum TicketCommands {
    /// List tickets, most recently updated first
    List,

    /// Show one ticket
    Show { id: i64 },

    /// Create a ticket (admin)
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        customer_id: i64,
        #[arg(long)]
        description: Option<String>,
        /// LOW | MEDIUM | HIGH
        #[arg(long)]
        priority: Option<String>,
        /// INCIDENT | QUESTION | TASK | OTHER
        #[arg(long = "type")]
        ticket_type: Option<String>,
        #[arg(long)]
        assigned_to: Option<i64>,
        /// May be given multiple times
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// May be given multiple times
        #[arg(long = "follower")]
        followers: Vec<i64>,
    },

    /// Update a ticket (admin)
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// OPEN | IN_PROGRESS | SOLVED | CLOSED | PENDING
        #[arg(long)]
        status: Option<String>,
        /// LOW | MEDIUM | HIGH
        #[arg(long)]
        priority: Option<String>,
        /// INCIDENT | QUESTION | TASK | OTHER
        #[arg(long = "type")]
        ticket_type: Option<String>,
        #[arg(long)]
        assigned_to: Option<i64>,
        #[arg(long)]
        customer_id: Option<i64>,
    },

    /// Delete a ticket (admin)
    Delete { id: i64 },
}
