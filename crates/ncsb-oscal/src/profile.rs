//! # OSCAL Profile Ingestion
//!
//! Serde models for the OSCAL profile documents that define the SP 800-53B
//! baselines. A profile is reduced to the sequence of control identifiers
//! it selects; the engine's set builder handles duplicate collapse.

use serde::Deserialize;

use ncsb_core::{ControlId, NcsbError};

use crate::id::oscal_id_to_control_id;

/// Top-level OSCAL profile document.
#[derive(Debug, Deserialize)]
pub struct ProfileDocument {
    /// The profile body.
    pub profile: Profile,
}

/// The profile body: a list of imports, each selecting controls.
#[derive(Debug, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub imports: Vec<Import>,
}

/// One import directive with its control selections.
#[derive(Debug, Deserialize)]
pub struct Import {
    #[serde(default, rename = "include-controls")]
    pub include_controls: Vec<IncludeControls>,
}

/// A control selection by explicit identifier list.
#[derive(Debug, Deserialize)]
pub struct IncludeControls {
    #[serde(default, rename = "with-ids")]
    pub with_ids: Vec<String>,
}

/// Parse an OSCAL profile JSON document into the selected control
/// identifiers, converted to canonical form, in document order.
///
/// An empty or import-free profile yields an empty list, not an error.
///
/// # Errors
///
/// Returns [`NcsbError::OscalParse`] when the document is not valid JSON
/// or lacks the profile envelope.
pub fn parse_profile(json: &str) -> Result<Vec<ControlId>, NcsbError> {
    let doc: ProfileDocument = serde_json::from_str(json)
        .map_err(|e| NcsbError::OscalParse(format!("invalid OSCAL profile document: {e}")))?;

    let mut ids = Vec::new();
    for import in &doc.profile.imports {
        for ic in &import.include_controls {
            for wid in &ic.with_ids {
                ids.push(oscal_id_to_control_id(wid));
            }
        }
    }
    Ok(ids)
}
