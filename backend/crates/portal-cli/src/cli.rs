use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "App portal CLI: triage feedback, inspect the catalog and repository statistics")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to the host and port in the portal config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Admin token for /admin routes (defaults to AUTH_SECRET from the portal config)
    #[arg(long, global = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
