//! # Facets Config
//!
//! Configuration management for the Facets data access layer.
//! Supports layered configuration from files and environment variables,
//! and defines the named-datasource map the pool registry is built from.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
