//! # ncsb-engine — Join-and-Enrichment Engine
//!
//! The pure core of the NCSB toolchain. Given a catalog of typed controls
//! and the four baseline identifier sets, the engine:
//!
//! 1. builds a [`BaselineSets`] snapshot (duplicate rows collapse),
//! 2. joins each control against the four sets by canonical identifier,
//! 3. derives `severity` and `non_negotiable` from the membership flags
//!    under a [`RuleConfig`],
//! 4. assembles the final [`EnrichedCatalog`] in catalog input order with
//!    run-level metadata.
//!
//! ## Crate Policy
//!
//! - No I/O. Inputs are immutable snapshots; the engine is deterministic
//!   given identical catalog, sets, config, and timestamp.
//! - Single-threaded and synchronous — a run is one pass over the catalog.
//! - Diagnostics (orphan baselines, duplicate catalog rows) go through
//!   `tracing::warn!` and are never fatal.

pub mod assemble;
pub mod baseline;
pub mod join;
pub mod rules;

pub use assemble::{assemble, EnrichedCatalog, EnrichedControl};
pub use baseline::{BaselineSet, BaselineSets};
pub use join::{join_catalog, report_orphan_baselines};
pub use rules::{BaselineMembership, MinBaseline, RuleConfig};
