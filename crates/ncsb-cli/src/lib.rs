//! # ncsb-cli — NCSB Command-Line Interface
//!
//! Thin I/O wrapper around the enrichment engine. The CLI reads the five
//! OSCAL JSON documents from disk (downloading them is the caller's job —
//! typically curl in the CI pipeline), runs the engine, and writes the
//! enriched dataset.
//!
//! ## Subcommands
//!
//! - `generate` — produce the enriched catalog JSON
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `ncsb-engine` — no enrichment rules here.

pub mod generate;
