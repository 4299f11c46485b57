use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ActivityCommands {
    /// List a ticket's activity trail
    List {
        #[arg(long)]
        ticket_id: i64,
    },

    /// Show one trail entry
    Show {
        #[arg(long)]
        ticket_id: i64,
        id: i64,
    },

    /// Append an entry to a ticket's trail
    Add {
        #[arg(long)]
        ticket_id: i64,
        #[arg(long)]
        action: String,
    },
}
