//! portal - App portal CLI
//!
//! A command-line interface for triaging feedback and inspecting the portal.
//!
//! # Examples
//!
//! ```bash
//! # Open bugs, highest business value first
//! portal feedback list --status open --type bug --sort business_value --pretty
//!
//! # Grade and resolve an item
//! portal feedback update <id> --complexity 2 --business-value 5 --status resolved
//!
//! # Force a GitHub refresh
//! portal admin refresh-stats --token "$AUTH_SECRET"
//! ```

mod admin_commands;
mod cli;
mod commands;
mod feedback_commands;

use crate::{
    admin_commands::AdminCommands, cli::Cli, commands::Commands,
    feedback_commands::FeedbackCommands,
};

use portal_cli::{Client, FeedbackQuery, FeedbackUpdate, NewFeedback};
use portal_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Explicit flags win over the portal config
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: could not load portal config ({}), using defaults", e);
            Config::default()
        }
    };
    let server_url = cli.server.unwrap_or_else(|| server_url(&config));
    let token = cli.token.or(config.auth.secret);

    let client = Client::new(&server_url, token.as_deref());

    let result = match cli.command {
        Commands::Feedback { action } => match action {
            FeedbackCommands::List {
                app_id,
                status,
                r#type,
                complexity,
                business_value,
                sort,
            } => {
                client
                    .list_feedback(&FeedbackQuery {
                        app_id,
                        status,
                        feedback_type: r#type,
                        complexity,
                        business_value,
                        sort,
                    })
                    .await
            }
            FeedbackCommands::Get { id } => client.get_feedback(&id).await,
            FeedbackCommands::Create {
                app_id,
                r#type,
                title,
                description,
                priority,
                submitted_by,
            } => {
                client
                    .create_feedback(&NewFeedback {
                        app_id,
                        app_name: None,
                        feedback_type: r#type,
                        title,
                        description,
                        priority,
                        submitted_by,
                    })
                    .await
            }
            FeedbackCommands::Update {
                id,
                status,
                priority,
                complexity,
                estimated_hours,
                business_value,
                target_date,
                completed_date,
            } => {
                client
                    .update_feedback(
                        &id,
                        &FeedbackUpdate {
                            status,
                            priority,
                            complexity,
                            estimated_hours,
                            business_value,
                            target_date,
                            completed_date,
                        },
                    )
                    .await
            }
            FeedbackCommands::Respond {
                id,
                message,
                author,
                internal,
            } => client.add_response(&id, &message, &author, internal).await,
            FeedbackCommands::Delete { id } => client.delete_feedback(&id).await,
            FeedbackCommands::Stats => client.feedback_stats().await,
        },

        Commands::RepoStats { totals } => client.repo_stats(totals).await,

        Commands::Apps {
            search,
            category,
            status,
            build_type,
        } => {
            client
                .list_apps(
                    search.as_deref(),
                    category.as_deref(),
                    status.as_deref(),
                    build_type.as_deref(),
                )
                .await
        }

        Commands::Admin { action } => match action {
            AdminCommands::Checkpoint => client.checkpoint().await,
            AdminCommands::RefreshStats => client.refresh_repo_stats().await,
        },
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Where the server listens according to the portal config.
/// A wildcard bind address is reached through loopback.
fn server_url(config: &Config) -> String {
    let host = match config.server.host.as_str() {
        "0.0.0.0" | "::" => "127.0.0.1",
        host => host,
    };
    format!("http://{}:{}", host, config.server.port)
}
