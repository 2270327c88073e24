//! Upstream client for the NewsAPI.org v2 REST API
//!
//! This crate owns the outbound half of the proxy:
//! - `NewsApiClient`: builds upstream query URLs and forwards a single GET,
//!   normalizing every outcome into the shared response envelope
//! - the article filter, dropping articles whose image reference is missing,
//!   relative, or matches the placeholder-name heuristic

pub mod client;
pub mod error;
pub mod filter;

pub use client::NewsApiClient;
pub use error::UpstreamError;
pub use filter::filter_articles;
