use clap::Subcommand;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Flush the SQLite write-ahead log into the database file
    Checkpoint,

    /// Drop the repository statistics cache and fetch from GitHub again
    RefreshStats,
}
