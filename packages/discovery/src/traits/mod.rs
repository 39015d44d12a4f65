//! Core abstractions for pluggable collaborators.
//!
//! Each trait isolates one external dependency of the pipeline:
//!
//! - [`SearchProvider`] - the web search API
//! - [`QueryGenerator`] - the LLM that turns profiles into queries
//! - [`ProfileStore`] / [`JobStore`] - persistence
//!
//! The pipeline holds these as `Arc<dyn Trait>`, so any combination of
//! real and mock implementations can be wired together.

pub mod generator;
pub mod searcher;
pub mod store;

pub use generator::QueryGenerator;
pub use searcher::{ProviderRequest, SearchDepth, SearchHit, SearchProvider};
pub use store::{JobStore, ProfileStore};
