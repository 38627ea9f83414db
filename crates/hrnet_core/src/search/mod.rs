//! Free-text search over employee records.
//!
//! # Responsibility
//! - Tokenize user queries and filter in-memory collections.
//! - Keep date rendering rules used for matching inside core.

pub mod filter;
