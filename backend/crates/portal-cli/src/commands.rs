use crate::{admin_commands::AdminCommands, feedback_commands::FeedbackCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Feedback operations
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommands,
    },

    /// Lines of code and effort estimates per repository
    RepoStats {
        /// Show the sums across all repositories
        #[arg(long)]
        totals: bool,
    },

    /// List the app catalog
    Apps {
        /// Case-insensitive match on name or description
        #[arg(long)]
        search: Option<String>,

        /// optimization, analytics, collaboration, automation or tools
        #[arg(long)]
        category: Option<String>,

        /// production, in-progress or beta
        #[arg(long)]
        status: Option<String>,

        /// all, custom or external
        #[arg(long)]
        build_type: Option<String>,
    },

    /// Server administration (requires the admin token)
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
