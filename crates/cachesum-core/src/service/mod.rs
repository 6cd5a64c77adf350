//! Core services.

pub mod digest;
