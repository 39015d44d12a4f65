//! Storage implementations.
//!
//! `MemoryStore` backs tests and local development; `PostgresStore` (the
//! `postgres` feature) is the production backend. Both implement
//! [`ProfileStore`](crate::traits::ProfileStore) and
//! [`JobStore`](crate::traits::JobStore).

pub mod memory;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::MemoryStore;

#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;
