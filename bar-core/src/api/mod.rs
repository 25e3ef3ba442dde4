//! REST API handlers

pub mod business;
pub mod health;
pub mod metrics;
