// Command-line front end for the Slack notifier.
// Configuration comes from SLACK_BOT_TOKEN, SLACK_DEFAULT_CHANNEL and SLACK_API_BASE.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use notifier::{Notifier, PostOptions, SearchOptions, SlackNotifier, ThreadOptions};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "notifier", version = notifier::VERSION_STRING, about = "Post to and read from Slack")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Post a new message
    Post {
        message: String,
        /// Target channel, defaults to SLACK_DEFAULT_CHANNEL
        #[arg(long)]
        channel: Option<String>,
        /// Display name for this post
        #[arg(long)]
        username: Option<String>,
        /// Emoji icon for this post (e.g., ":hammer:")
        #[arg(long)]
        icon: Option<String>,
    },
    /// Reply in an existing thread
    Reply {
        /// Parent message timestamp
        thread_ts: String,
        message: String,
        #[arg(long)]
        channel: Option<String>,
    },
    /// List the replies of a thread, parent excluded
    Replies { channel: String, thread_ts: String },
    /// Search message history
    Search {
        query: String,
        #[arg(long)]
        channel: Option<String>,
        /// Only messages after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<NaiveDate>,
        #[arg(long, default_value_t = notifier::types::DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,hyper=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let notifier = SlackNotifier::from_env().context("failed to configure Slack notifier")?;

    match cli.command {
        Command::Post {
            message,
            channel,
            username,
            icon,
        } => {
            let mut options = PostOptions::new();
            if let Some(channel) = channel {
                options = options.to(channel);
            }
            if let Some(username) = username {
                options = options.with_display_name(username);
            }
            if let Some(icon) = icon {
                options = options.with_icon(icon);
            }
            let result = notifier.post(&message, options).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Reply {
            thread_ts,
            message,
            channel,
        } => {
            let mut options = ThreadOptions::new();
            if let Some(channel) = channel {
                options = options.to(channel);
            }
            let result = notifier.post_thread(&thread_ts, &message, options).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Replies { channel, thread_ts } => {
            let replies = notifier.get_thread_replies(&channel, &thread_ts).await;
            println!("{}", serde_json::to_string_pretty(&replies)?);
        }
        Command::Search {
            query,
            channel,
            since,
            limit,
        } => {
            let mut options = SearchOptions::new().with_limit(limit);
            if let Some(channel) = channel {
                options = options.in_destination(channel);
            }
            if let Some(since) = since {
                options = options.since(since);
            }
            let matches = notifier.search(&query, options).await;
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
    }

    Ok(())
}
