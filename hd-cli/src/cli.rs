use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hd")]
#[command(about = "Helpdesk dashboard CLI over the remote ticketing API")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL (overrides configuration)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
