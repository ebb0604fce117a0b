mod commands;
pub mod error;
pub mod utils;

#[cfg(test)]
#[path = "utils_test.rs"]
mod utils_test;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, ConfigError};
use crate::db::DataService;
use crate::db::models::*;
use crate::remote::{PostgrestClient, RemoteClient};
use commands::records;
use error::CliResult;

#[derive(Parser)]
#[command(name = "studiodesk")]
#[command(author, version, about = "Studio business data CLI", long_about = None)]
pub struct Cli {
    /// YAML config file with url, anon_key and timeout_secs
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the backend URL (default: STUDIODESK_URL env)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Override the anon API key (default: STUDIODESK_ANON_KEY env)
    #[arg(long, global = true)]
    pub anon_key: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum EntityKind {
    Clients,
    Leads,
    Packages,
    AddOns,
    Projects,
    TeamMembers,
    Transactions,
    FinancialPockets,
    Cards,
    Profiles,
    Users,
    Assets,
    PromoCodes,
    Sops,
    Notifications,
    Contracts,
    ClientFeedback,
    SocialMediaPosts,
    TeamProjectPayments,
    TeamPaymentRecords,
    RewardLedgerEntries,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List records, newest first
    List {
        entity: EntityKind,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show one record
    Get {
        entity: EntityKind,
        id: String,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a record from a camelCase JSON draft
    Create {
        entity: EntityKind,
        /// JSON object, e.g. '{"name": "Andi", ...}'
        #[arg(long)]
        data: String,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Update fields of a record; omitted fields are left unchanged
    Update {
        entity: EntityKind,
        id: String,
        /// JSON object with the fields to change; null clears a nullable field
        #[arg(long)]
        data: String,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Delete a record
    Delete {
        entity: EntityKind,
        id: String,
        /// Confirm deletion
        #[arg(long)]
        force: bool,
    },
    /// Show the business profile, or update it with --data
    Profile {
        /// JSON object with the profile fields to change
        #[arg(long)]
        data: Option<String>,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

/// Run `records::$func::<Entity, _>(args)` for the entity selected on the command line.
macro_rules! for_entity {
    ($kind:expr, $func:ident($($arg:expr),* $(,)?)) => {
        match $kind {
            EntityKind::Clients => records::$func::<Client, _>($($arg),*).await,
            EntityKind::Leads => records::$func::<Lead, _>($($arg),*).await,
            EntityKind::Packages => records::$func::<Package, _>($($arg),*).await,
            EntityKind::AddOns => records::$func::<AddOn, _>($($arg),*).await,
            EntityKind::Projects => records::$func::<Project, _>($($arg),*).await,
            EntityKind::TeamMembers => records::$func::<TeamMember, _>($($arg),*).await,
            EntityKind::Transactions => records::$func::<Transaction, _>($($arg),*).await,
            EntityKind::FinancialPockets => records::$func::<FinancialPocket, _>($($arg),*).await,
            EntityKind::Cards => records::$func::<Card, _>($($arg),*).await,
            EntityKind::Profiles => records::$func::<Profile, _>($($arg),*).await,
            EntityKind::Users => records::$func::<User, _>($($arg),*).await,
            EntityKind::Assets => records::$func::<Asset, _>($($arg),*).await,
            EntityKind::PromoCodes => records::$func::<PromoCode, _>($($arg),*).await,
            EntityKind::Sops => records::$func::<Sop, _>($($arg),*).await,
            EntityKind::Notifications => records::$func::<Notification, _>($($arg),*).await,
            EntityKind::Contracts => records::$func::<Contract, _>($($arg),*).await,
            EntityKind::ClientFeedback => records::$func::<ClientFeedback, _>($($arg),*).await,
            EntityKind::SocialMediaPosts => records::$func::<SocialMediaPost, _>($($arg),*).await,
            EntityKind::TeamProjectPayments => {
                records::$func::<TeamProjectPayment, _>($($arg),*).await
            }
            EntityKind::TeamPaymentRecords => {
                records::$func::<TeamPaymentRecord, _>($($arg),*).await
            }
            EntityKind::RewardLedgerEntries => {
                records::$func::<RewardLedgerEntry, _>($($arg),*).await
            }
        }
    };
}

pub(crate) async fn execute<C: RemoteClient>(
    service: &DataService<C>,
    command: Commands,
) -> CliResult<String> {
    match command {
        Commands::List { entity, format } => for_entity!(entity, list(service, &format)),
        Commands::Get { entity, id, format } => for_entity!(entity, get(service, &id, &format)),
        Commands::Create {
            entity,
            data,
            format,
        } => for_entity!(entity, create(service, &data, &format)),
        Commands::Update {
            entity,
            id,
            data,
            format,
        } => for_entity!(entity, update(service, &id, &data, &format)),
        Commands::Delete { entity, id, force } => {
            for_entity!(entity, delete(service, &id, force))
        }
        Commands::Profile {
            data: Some(data),
            format,
        } => records::update_profile(service, &data, &format).await,
        Commands::Profile { data: None, format } => records::profile(service, &format).await,
    }
}

/// Resolve configuration: flags override the config file, or the environment
/// when no file is given.
pub fn load_config(
    path: Option<&Path>,
    url: Option<String>,
    anon_key: Option<String>,
) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(url) = url {
        config = config.with_url(url);
    }
    if let Some(anon_key) = anon_key {
        config = config.with_anon_key(anon_key);
    }
    config.validate()?;
    Ok(config)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studiodesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let Some(command) = cli.command else {
        // Show help when no command provided
        let _ = Cli::parse_from(["studiodesk", "--help"]);
        return Ok(());
    };

    let config = load_config(cli.config.as_deref(), cli.url, cli.anon_key)?;
    let service = DataService::new(PostgrestClient::new(&config)?);

    let output = execute(&service, command).await?;
    println!("{}", output);
    Ok(())
}
