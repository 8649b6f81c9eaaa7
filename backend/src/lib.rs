//! # Team Catalog Backend
//!
//! Derived views over a team catalog: bucketed breakdowns, pie segments and
//! the dashboard summary, plus the storage and HTTP plumbing that serves them.
//!
//! ## Architecture
//!
//! - [`models`]: Catalog records as served by the upstream catalog API
//! - [`services`]: Pure view computations (bucketizer, segments, dashboard)
//! - [`routes`]: Response types for each view
//! - [`db`]: Repository traits, in-memory store and storage services
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum REST API (feature `http-server`)
//! - [`api`]: Flat re-export of the public DTOs

// RepositoryError carries rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
