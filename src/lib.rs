//! Regdeadlines - a read-only HTTP API for U.S. voter registration deadlines
//!
//! Serves one PostgreSQL table of per-state registration deadlines as JSON
//! shaped for the frontend data grid:
//! - Fixed seven-key field order per row (the grid keys rows by `state`)
//! - CORS open to any origin, gzip compression, one-hour cache headers
//! - Lazy connection pool, so the API starts while the database is down

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use error::{Error, Result};
