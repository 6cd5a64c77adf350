//! HTTP request handlers for the API.

pub mod hash;
