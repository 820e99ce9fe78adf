//! Pronto CLI - command-line front end for the Pronto chat API
//!
//! Every subcommand maps to one API call and prints the raw JSON response.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pronto_client::{Config, OutgoingMessage, ProntoClient};

#[derive(Parser)]
#[command(name = "pronto")]
#[command(about = "Command-line client for the Pronto chat API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Email a verification code to the given address
    Verify { email: String },

    /// Exchange an emailed verification code for a login token
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        code: String,
    },

    /// Exchange a login token for an access token
    TokenLogin { login_token: String },

    /// List bubbles (conversations)
    Bubbles,

    /// Show messages in a bubble
    History {
        bubble_id: u64,

        /// Only messages sent before this message ID
        #[arg(short, long)]
        latest: Option<u64>,
    },

    /// Show bubble details
    Info { bubble_id: u64 },

    /// Mark a bubble as read
    Mark { bubble_id: u64 },

    /// Open a direct message with a user
    Dm {
        #[arg(long)]
        org: u64,
        #[arg(long)]
        user: u64,
    },

    /// Create a group bubble
    CreateBubble {
        #[arg(long)]
        org: u64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: Option<u64>,
    },

    /// Invite users to a bubble
    Invite {
        bubble_id: u64,

        /// User IDs to invite (repeatable)
        #[arg(short, long = "user", required = true)]
        users: Vec<u64>,

        /// Notify invitees by email
        #[arg(long)]
        email: bool,

        /// Notify invitees by SMS
        #[arg(long)]
        sms: bool,
    },

    /// Remove users from a bubble
    Kick {
        bubble_id: u64,

        #[arg(short, long = "user", required = true)]
        users: Vec<u64>,
    },

    /// Send a message
    Send {
        bubble_id: u64,

        /// Your own user ID (sender)
        #[arg(long)]
        from: u64,

        /// Message content
        message: String,
    },

    /// Add a reaction to a message
    React { message_id: u64, reaction_type: u64 },

    /// Remove a reaction from a message
    Unreact { message_id: u64, reaction_type: u64 },

    /// Replace the text of a message
    Edit { message_id: u64, message: String },

    /// Delete a message
    Delete { message_id: u64 },

    /// Show a user's profile
    User { user_id: u64 },

    /// List bubbles shared with a user
    MutualGroups { user_id: u64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::load()?;
    let client = config.client().context("Invalid client configuration")?;

    let response = run(&client, cli.command).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("Failed to format response")?
    );
    Ok(())
}

async fn run(client: &ProntoClient, command: Commands) -> Result<serde_json::Value> {
    let value = match command {
        Commands::Verify { email } => {
            tracing::info!("Requesting verification email for {}...", email);
            client.request_verification_email(&email).await?
        }
        Commands::Login { email, code } => client.exchange_verification_code(&email, &code).await?,
        Commands::TokenLogin { login_token } => {
            let value = client.exchange_login_token(&login_token).await?;
            tracing::info!(
                "Store the access token in {} or export PRONTO_ACCESS_TOKEN",
                Config::config_path()?.display()
            );
            value
        }
        Commands::Bubbles => client.list_bubbles().await?,
        Commands::History { bubble_id, latest } => client.bubble_history(bubble_id, latest).await?,
        Commands::Info { bubble_id } => client.bubble_info(bubble_id).await?,
        Commands::Mark { bubble_id } => client.mark_bubble_read(bubble_id).await?,
        Commands::Dm { org, user } => client.create_dm(org, user).await?,
        Commands::CreateBubble {
            org,
            title,
            category,
        } => client.create_bubble(org, &title, category).await?,
        Commands::Invite {
            bubble_id,
            users,
            email,
            sms,
        } => client.invite_members(bubble_id, &users, email, sms).await?,
        Commands::Kick { bubble_id, users } => client.kick_members(bubble_id, &users).await?,
        Commands::Send {
            bubble_id,
            from,
            message,
        } => {
            let outgoing = OutgoingMessage::new(bubble_id, from, message);
            tracing::info!("Sending message {}...", outgoing.uuid);
            client.send_message(&outgoing).await?
        }
        Commands::React {
            message_id,
            reaction_type,
        } => client.add_reaction(message_id, reaction_type).await?,
        Commands::Unreact {
            message_id,
            reaction_type,
        } => client.remove_reaction(message_id, reaction_type).await?,
        Commands::Edit {
            message_id,
            message,
        } => client.edit_message(message_id, &message).await?,
        Commands::Delete { message_id } => client.delete_message(message_id).await?,
        Commands::User { user_id } => client.user_info(user_id).await?,
        Commands::MutualGroups { user_id } => client.mutual_groups(user_id).await?,
    };
    Ok(value)
}
