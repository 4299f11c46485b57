use crate::activity_commands::ActivityCommands;
use crate::customer_commands::CustomerCommands;
use crate::ticket_commands::TicketCommands;
use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign straight in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Drop the persisted session
    Logout,

    /// Show the current session
    Whoami {
        /// Also check the token against the server
        #[arg(long)]
        verify: bool,
    },

    /// Ticket operations
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },

    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Customer operations
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },

    /// Activity log operations
    Activity {
        #[command(subcommand)]
        action: ActivityCommands,
    },
}
