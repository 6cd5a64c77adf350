//! Shared domain types for cachesum.
//!
//! This crate contains the digest entity, the algorithm enumeration,
//! configuration types, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod digest;
pub mod error;
