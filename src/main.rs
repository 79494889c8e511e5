use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use dayplanner::cli::{delete, list, manage, new};
use dayplanner::config::Config;
use dayplanner::llm::OpenRouterClient;
use dayplanner::planner::JournalInput;
use dayplanner::store::EntryStore;

#[derive(Parser)]
#[command(name = "dayplanner")]
#[command(about = "Morning journaling and day planning with AI reflection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "dayplanner.yaml")]
    config: String,

    /// Database path (overrides config)
    #[arg(long)]
    database: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a new entry and generate a reflection and day strategy
    New {
        /// Morning journal
        #[arg(short, long)]
        journal: String,
        /// Today's intention
        #[arg(short, long)]
        intention: String,
        /// Last night's dream
        #[arg(short, long)]
        dream: String,
        /// Top 3 priorities (comma separated)
        #[arg(short, long)]
        priorities: String,
    },

    /// List entries, newest first
    List {
        /// Only entries from this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Only entries whose journal or intention contains this text
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Show the most recent entry
    Latest,

    /// Show one entry in full
    Show {
        /// Entry ID
        id: i64,
    },

    /// Delete an entry
    Delete {
        /// Entry ID
        id: i64,
    },

    /// Interactive entry manager
    Manage,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    // Load config
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        tracing::warn!("ignoring config: {e:#}");
        Config::default()
    });

    // Initialize store
    let db_path = cli.database.unwrap_or_else(|| config.database_path());
    let store = EntryStore::open(&db_path)?;

    match cli.command {
        Commands::New {
            journal,
            intention,
            dream,
            priorities,
        } => {
            let model = OpenRouterClient::from_config(&config.model)?;
            let input = JournalInput {
                journal,
                intention,
                dream,
                priorities,
            };
            new::run(&store, &model, input).await?;
        }
        Commands::List { date, keyword } => {
            list::run(&store, date, keyword)?;
        }
        Commands::Latest => {
            list::latest(&store)?;
        }
        Commands::Show { id } => {
            list::show(&store, id)?;
        }
        Commands::Delete { id } => {
            delete::run(&store, id)?;
        }
        Commands::Manage => {
            let stdin = std::io::stdin();
            manage::run(&store, stdin.lock(), std::io::stdout())?;
        }
    }

    Ok(())
}
