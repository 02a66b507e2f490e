use clap::Subcommand;

#[derive(Subcommand)]
pub enum FeedbackCommands {
    /// List feedback
    List {
        #[arg(long)]
        app_id: Option<String>,

        /// open, in_progress, resolved or closed
        #[arg(long)]
        status: Option<String>,

        /// bug, feature, issue, question or improvement
        #[arg(long)]
        r#type: Option<String>,

        #[arg(long)]
        complexity: Option<i32>,

        #[arg(long)]
        business_value: Option<i32>,

        /// created_at, business_value, complexity, estimated_hours or target_date
        #[arg(long)]
        sort: Option<String>,
    },

    /// Get a feedback item with its responses
    Get {
        /// Feedback ID (UUID)
        id: String,
    },

    /// Submit feedback on behalf of a user
    Create {
        #[arg(long)]
        app_id: String,

        #[arg(long)]
        r#type: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// low, medium (default), high or critical
        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        submitted_by: String,
    },

    /// Grade a feedback item or change its status
    Update {
        /// Feedback ID (UUID)
        id: String,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        /// 1-5
        #[arg(long)]
        complexity: Option<i32>,

        #[arg(long)]
        estimated_hours: Option<f64>,

        /// 1-5
        #[arg(long)]
        business_value: Option<i32>,

        /// Unix seconds
        #[arg(long)]
        target_date: Option<i64>,

        /// Unix seconds
        #[arg(long)]
        completed_date: Option<i64>,
    },

    /// Reply to a feedback item
    Respond {
        /// Feedback ID (UUID)
        id: String,

        #[arg(long)]
        message: String,

        #[arg(long)]
        author: String,

        /// Hide the reply from the submitter
        #[arg(long)]
        internal: bool,
    },

    /// Delete a feedback item and its responses
    Delete {
        /// Feedback ID (UUID)
        id: String,
    },

    /// Counts by status
    Stats,
}
