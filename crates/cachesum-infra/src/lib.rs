//! Infrastructure layer for cachesum.
//!
//! Contains implementations of the contracts defined in `cachesum-core`:
//! SQLite cache storage, the MD5/SHA-256 digest providers, and the
//! configuration loader.

pub mod config;
pub mod hasher;
pub mod sqlite;
