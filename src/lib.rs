//! Billing Gateway - A small billing API service
//!
//! Proxies billing history from an upstream service through an in-memory,
//! TTL-bounded aggregation cache, and exposes thin billing endpoints around it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
