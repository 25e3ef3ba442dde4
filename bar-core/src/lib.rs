//! BAR Core - Business lookup service backend
//!
//! Resolves invitation tokens to the business they were issued for and
//! exposes the result over a small REST API.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod openapi;
pub mod repository;
pub mod server;
pub mod service;
pub mod state;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
