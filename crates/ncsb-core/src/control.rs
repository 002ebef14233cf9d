//! # Control Record
//!
//! The typed catalog row: one security control (base or enhancement) as
//! ingested from the catalog, before enrichment. All identifier fields are
//! canonical [`ControlId`]s — normalization happens at the ingestion
//! boundary, never inside the engine.

use serde::{Deserialize, Serialize};

use crate::identifier::ControlId;

/// A single security control from the catalog.
///
/// The parent identifier is present iff the control is an enhancement, and
/// is derived from the identifier itself; the parent need not exist in the
/// catalog (tolerated, not an error).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    /// Canonical identifier, e.g. `AC-2` or `AC-2(1)`.
    pub id: ControlId,
    /// Human-readable control title.
    pub name: Option<String>,
    /// Family code, e.g. `AC`.
    pub family: String,
    /// The control statement text.
    pub text: Option<String>,
    /// Supplemental discussion/guidance text.
    pub discussion: Option<String>,
    /// Identifiers of related controls, in document order.
    pub related: Vec<ControlId>,
    /// Parent control identifier, present iff this is an enhancement.
    pub parent: Option<ControlId>,
}

impl Control {
    /// Build a control record from its identifier and descriptive fields.
    ///
    /// Family and parent are derived from the identifier, keeping the
    /// invariant that an enhancement's parent equals its own identifier
    /// with the suffix stripped.
    pub fn new(
        id: ControlId,
        name: Option<String>,
        text: Option<String>,
        discussion: Option<String>,
        related: Vec<ControlId>,
    ) -> Self {
        let family = id.family().to_owned();
        let parent = id.parent();
        Self {
            id,
            name,
            family,
            text,
            discussion,
            related,
            parent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_family_and_parent() {
        let c = Control::new(ControlId::normalize("ac-2(1)"), None, None, None, vec![]);
        assert_eq!(c.family, "AC");
        assert_eq!(c.parent, Some(ControlId::normalize("AC-2")));
    }

    #[test]
    fn test_base_control_has_no_parent() {
        let c = Control::new(ControlId::normalize("sc-7"), None, None, None, vec![]);
        assert_eq!(c.family, "SC");
        assert_eq!(c.parent, None);
    }
}
