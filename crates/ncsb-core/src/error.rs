//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the NCSB toolchain. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Configuration errors fail loudly before any processing begins.
//! - Ingestion errors carry enough context to name the offending document.
//! - Malformed control identifiers are NOT errors — they pass through the
//!   normalizer as opaque keys (see [`crate::identifier`]).

use thiserror::Error;

/// Top-level error type for the NCSB toolchain.
#[derive(Error, Debug)]
pub enum NcsbError {
    /// Invalid run configuration (e.g. unknown minimum-baseline value).
    #[error("configuration error: {0}")]
    Config(String),

    /// An OSCAL document did not have the expected shape.
    #[error("oscal ingestion error: {0}")]
    OscalParse(String),

    /// Timestamp parsing or construction failure.
    #[error("timestamp error: {0}")]
    Timestamp(String),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
