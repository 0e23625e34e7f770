//! AWS-oriented adapters and handlers for the key/value proxy.
//!
//! This crate owns runtime integration details (Lambda handlers, table
//! configuration, and the DynamoDB storage adapter). Request/response
//! contracts live in `kv_proxy_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
