//! Data models: the extracted field record and service configuration.

pub mod config;
pub mod fields;
