//! Core types for the newswire proxy
//!
//! This crate defines the shared pieces used across the proxy: the uniform
//! response envelope every route returns, and the paging-parameter defaults
//! with their lenient fallback parsing.

pub mod envelope;
pub mod params;

pub use envelope::Envelope;
pub use params::{
    positive_or, DEFAULT_CATEGORY, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_QUERY,
};
