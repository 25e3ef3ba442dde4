//! HTTP middleware for BAR Core

pub mod metrics;

pub use self::metrics::ObservabilityLayer;
