//! Shipped [`SearchProvider`](crate::traits::SearchProvider) implementations.

pub mod tavily;

pub use tavily::TavilySearch;
