//! # ncsb-oscal — Typed OSCAL Ingestion
//!
//! The I/O boundary between the official OSCAL JSON documents published by
//! NIST (<https://github.com/usnistgov/oscal-content>) and the typed records
//! the enrichment engine consumes.
//!
//! Two document kinds are ingested:
//!
//! - **Catalog** (SP 800-53 Rev. 5) — the full control catalog, flattened
//!   into `Vec<Control>` with statement/guidance prose and related-control
//!   links extracted.
//! - **Profile** (SP 800-53B baselines) — a control selection, reduced to
//!   the sequence of selected identifiers.
//!
//! The engine never sees OSCAL shapes; everything downstream of this crate
//! operates on validated, canonical-identifier records.

pub mod catalog;
pub mod id;
pub mod profile;

pub use catalog::parse_catalog;
pub use id::oscal_id_to_control_id;
pub use profile::parse_profile;
