//! # ncsb-core — Foundational Types for the NCSB Toolchain
//!
//! This crate is the bedrock of the NCSB (NIST Cloud Security Baseline)
//! workspace. It defines the type-system primitives every other crate builds
//! on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype for the domain primitive.** `ControlId` wraps the canonical
//!    SP 800-53 identifier form. No bare strings cross crate boundaries.
//!
//! 2. **Single `BaselineTier` enum.** One definition, four variants,
//!    exhaustive `match` everywhere. Adding a tier forces every consumer to
//!    handle it.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so reruns of the generator differ only
//!    in the instant, never in the rendering.
//!
//! 4. **Malformed identifiers never panic.** Normalization is total: input
//!    that does not match the control-id grammar passes through as an opaque
//!    key (the catalog is trusted upstream; the toolchain must not fall over
//!    on a stray cell).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ncsb-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod control;
pub mod error;
pub mod identifier;
pub mod severity;
pub mod temporal;
pub mod tier;

// Re-export primary types for ergonomic imports.
pub use control::Control;
pub use error::NcsbError;
pub use identifier::ControlId;
pub use severity::Severity;
pub use temporal::Timestamp;
pub use tier::{BaselineTier, BASELINE_TIER_COUNT};
