//! Shared key/value proxy domain primitives.
//!
//! This crate owns the request/response contracts and boundary validation.
//! It intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod contract;
