//! Search-Driven Job Discovery Library
//!
//! Turns a user's intent - free-text keywords or a resume-derived
//! profile - into a ranked, deduplicated list of job postings sourced
//! from an external web-search provider.
//!
//! # Design Philosophy
//!
//! - Collaborators behind traits, wired explicitly - no process-wide
//!   singletons
//! - Typed structs at every provider boundary, no dynamic payloads
//! - Degrade where a fallback exists (missing profile, failed synthesis,
//!   one bad insert); fail loudly where none does (timeout, provider
//!   failure)
//! - The pipeline filters, ranks, and structures - it never crawls and
//!   never guesses relevance beyond location affinity
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use discovery::{Discovery, MemoryStore, OpenAiGenerator, TavilySearch};
//!
//! let store = Arc::new(MemoryStore::new());
//! let discovery = Discovery::new(
//!     Arc::new(TavilySearch::from_env()?),
//!     Arc::new(OpenAiGenerator::from_env()?),
//!     store.clone(),
//!     store,
//! );
//!
//! let response = discovery.run("jane@example.com").await?;
//! for job in &response.jobs {
//!     println!("{} ({})", job.title, job.url);
//! }
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (SearchProvider, QueryGenerator, stores)
//! - [`types`] - Pipeline data types
//! - [`pipeline`] - Planning, gated search, filtering, ranking, persistence
//! - [`providers`] - Search provider implementations (TavilySearch)
//! - [`ai`] - Query synthesis over OpenAI-compatible APIs
//! - [`stores`] - Storage implementations (MemoryStore, PostgresStore)
//! - [`security`] - Credential handling
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod error;
pub mod pipeline;
pub mod providers;
pub mod security;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{DiscoveryError, Result};
pub use traits::{
    generator::QueryGenerator,
    searcher::{ProviderRequest, SearchDepth, SearchHit, SearchProvider},
    store::{JobStore, ProfileStore},
};
pub use types::{
    job::{JobLocation, JobPosting, StoredJob},
    profile::Profile,
    response::{JobResult, SearchResponse},
    search::{PlannedSearch, SearchMode},
};

// Re-export the pipeline entry point and its stages
pub use pipeline::{
    filter_hits, rank, score, store_new, Discovery, InsertOutcome, QueryPlanner, SearchGateway,
    StoreOutcome, SEARCH_TIMEOUT, TRUSTED_DOMAINS,
};

// Re-export shipped collaborator implementations
pub use ai::OpenAiGenerator;
pub use providers::TavilySearch;
pub use security::SecretString;
pub use stores::MemoryStore;

#[cfg(feature = "postgres")]
pub use stores::PostgresStore;
