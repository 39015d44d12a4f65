//! Developer CLI for the discovery pipeline.
//!
//! Wires real adapters from environment configuration and prints responses
//! as JSON on stdout; logs go to stderr so output stays pipeable.
//!
//! Environment:
//! - `TAVILY_API_KEY` (required for `search`)
//! - `CEREBRAS_API_KEY`, `CEREBRAS_BASE_URL`, `CEREBRAS_MODEL` (`search`;
//!   only the key is required)
//! - `DATABASE_URL` (optional; without it jobs live in a process-local
//!   memory store and are gone when the command exits)

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use discovery::{
    Discovery, JobStore, MemoryStore, OpenAiGenerator, PostgresStore, Profile, ProfileStore,
    TavilySearch,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "agent")]
#[command(about = "Job discovery agent (developer surface)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one discovery search with free keywords or a profile email
    Search { query: String },

    /// List recently stored jobs, newest first
    Recent {
        /// How many jobs to return (1-100)
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },

    /// Create or update a profile used for email searches (needs DATABASE_URL)
    Profile {
        email: String,

        /// Comma-separated skills, most important first
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,

        #[arg(long)]
        location: Option<String>,

        /// Short experience summary fed to query synthesis
        #[arg(long, default_value = "")]
        experience: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,discovery=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query } => cmd_search(&query).await,
        Commands::Recent { limit } => cmd_recent(limit as usize).await,
        Commands::Profile {
            email,
            skills,
            location,
            experience,
        } => cmd_profile(email, skills, location, experience).await,
    }
}

/// Profile and job stores share one backend: Postgres when `DATABASE_URL`
/// is set, a memory store otherwise.
async fn build_stores() -> Result<(Arc<dyn ProfileStore>, Arc<dyn JobStore>)> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let store = Arc::new(
                PostgresStore::new(&url)
                    .await
                    .context("Failed to connect to database")?,
            );
            Ok((store.clone(), store))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; results will not persist");
            let store = Arc::new(MemoryStore::new());
            Ok((store.clone(), store))
        }
    }
}

async fn cmd_search(query: &str) -> Result<()> {
    let provider =
        Arc::new(TavilySearch::from_env().context("Failed to configure search provider")?);
    let generator =
        Arc::new(OpenAiGenerator::from_env().context("Failed to configure query generator")?);
    let (profiles, jobs) = build_stores().await?;

    let discovery = Discovery::new(provider, generator, profiles, jobs);
    let response = discovery.run(query).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn cmd_recent(limit: usize) -> Result<()> {
    let (_, jobs) = build_stores().await?;
    let recent = jobs.list_recent(limit).await?;

    println!("{}", serde_json::to_string_pretty(&recent)?);
    Ok(())
}

async fn cmd_profile(
    email: String,
    skills: Vec<String>,
    location: Option<String>,
    experience: String,
) -> Result<()> {
    let url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set to store profiles")?;
    let store = PostgresStore::new(&url)
        .await
        .context("Failed to connect to database")?;

    let mut profile = Profile::new(email)
        .with_skills(skills)
        .with_experience(experience);
    if let Some(location) = location {
        profile = profile.with_location(location);
    }

    store.upsert_profile(&profile).await?;
    tracing::info!("stored profile for {}", profile.email);

    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
