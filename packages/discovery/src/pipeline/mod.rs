//! Discovery pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Query planning (keyword pass-through or profile synthesis)
//! - Gated search dispatch under the hard timeout
//! - Domain gating + field extraction over raw hits
//! - Location-affinity ranking
//! - Dedup persistence

pub mod discover;
pub mod filter;
pub mod gateway;
pub mod persist;
pub mod planner;
pub mod rank;

pub use discover::Discovery;
pub use filter::{filter_hits, TRUSTED_DOMAINS};
pub use gateway::{SearchGateway, DEFAULT_MAX_RESULTS, SEARCH_TIMEOUT};
pub use persist::{store_new, InsertOutcome, StoreOutcome};
pub use planner::QueryPlanner;
pub use rank::{rank, score};
