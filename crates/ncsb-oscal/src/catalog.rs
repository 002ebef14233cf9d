//! # OSCAL Catalog Ingestion
//!
//! Serde models for the OSCAL catalog document and the flattening pass
//! that turns its two-level group/control/enhancement tree into a flat
//! `Vec<Control>` in document order.
//!
//! Prose extraction mirrors the published dataset: a control's `statement`
//! parts become `control_text`, its `guidance` parts become `discussion`,
//! and `links` with `rel == "related"` become the related-control list.

use serde::Deserialize;

use ncsb_core::{Control, ControlId, NcsbError};

use crate::id::oscal_id_to_control_id;

/// Top-level OSCAL catalog document.
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    /// The catalog body.
    pub catalog: Catalog,
}

/// The catalog body: groups of controls (one group per family).
#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// A control family group.
#[derive(Debug, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub controls: Vec<OscalControl>,
}

/// A control as it appears in the OSCAL tree. Enhancements nest one level
/// deep inside their base control's `controls` array.
#[derive(Debug, Deserialize)]
pub struct OscalControl {
    pub id: String,
    pub title: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub controls: Vec<OscalControl>,
}

/// A prose part; parts nest arbitrarily.
#[derive(Debug, Deserialize)]
pub struct Part {
    pub name: Option<String>,
    pub prose: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A link attached to a control.
#[derive(Debug, Deserialize)]
pub struct Link {
    pub rel: Option<String>,
    pub href: Option<String>,
}

/// Parse an OSCAL catalog JSON document into a flat list of controls.
///
/// Controls appear in document order: each base control immediately
/// followed by its enhancements. Enhancement records carry their parent's
/// canonical identifier.
///
/// # Errors
///
/// Returns [`NcsbError::OscalParse`] when the document is not valid JSON
/// or lacks the catalog envelope. Missing optional fields (titles, prose,
/// links) are tolerated.
pub fn parse_catalog(json: &str) -> Result<Vec<Control>, NcsbError> {
    let doc: CatalogDocument = serde_json::from_str(json)
        .map_err(|e| NcsbError::OscalParse(format!("invalid OSCAL catalog document: {e}")))?;

    let mut out = Vec::new();
    for group in &doc.catalog.groups {
        for ctrl in &group.controls {
            out.push(flatten_control(ctrl));
            for enh in &ctrl.controls {
                out.push(flatten_control(enh));
            }
        }
    }
    Ok(out)
}

/// Convert one OSCAL control node into a typed record.
fn flatten_control(ctrl: &OscalControl) -> Control {
    let id = oscal_id_to_control_id(&ctrl.id);
    Control::new(
        id,
        ctrl.title.clone(),
        collect_prose(&ctrl.parts, "statement"),
        collect_prose(&ctrl.parts, "guidance"),
        related_controls(&ctrl.links),
    )
}

/// Recursively collect prose from parts whose `name` equals `target`.
///
/// A matching part contributes its own prose plus the prose of its direct
/// sub-parts; non-matching parts are searched recursively. Fragments are
/// newline-joined.
fn collect_prose(parts: &[Part], target: &str) -> Option<String> {
    let mut fragments: Vec<&str> = Vec::new();
    collect_prose_into(parts, target, &mut fragments);
    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join("\n"))
    }
}

fn collect_prose_into<'a>(parts: &'a [Part], target: &str, fragments: &mut Vec<&'a str>) {
    for part in parts {
        if part.name.as_deref() == Some(target) {
            if let Some(prose) = &part.prose {
                fragments.push(prose);
            }
            for sub in &part.parts {
                if let Some(prose) = &sub.prose {
                    fragments.push(prose);
                }
            }
        } else if !part.parts.is_empty() {
            collect_prose_into(&part.parts, target, fragments);
        }
    }
}

/// Extract related-control identifiers from a control's links.
///
/// Only `rel == "related"` links with a `#`-prefixed fragment href count.
fn related_controls(links: &[Link]) -> Vec<ControlId> {
    links
        .iter()
        .filter(|link| link.rel.as_deref() == Some("related"))
        .filter_map(|link| link.href.as_deref())
        .filter_map(|href| href.strip_prefix('#'))
        .map(oscal_id_to_control_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
      "catalog": {
        "groups": [
          {
            "controls": [
              {
                "id": "ac-2",
                "title": "Account Management",
                "parts": [
                  {"name": "statement", "prose": "Define system accounts.",
                   "parts": [{"name": "item", "prose": "Assign account managers."}]},
                  {"name": "guidance", "prose": "Accounts include individual and group accounts."}
                ],
                "links": [
                  {"rel": "related", "href": "#ac-3"},
                  {"rel": "reference", "href": "#some-doc"},
                  {"rel": "related", "href": "#ac-5"}
                ],
                "controls": [
                  {
                    "id": "ac-2.1",
                    "title": "Automated System Account Management",
                    "parts": [{"name": "statement", "prose": "Use automated mechanisms."}]
                  }
                ]
              }
            ]
          }
        ]
      }
    }"##;

    #[test]
    fn test_parse_catalog_flattens_in_document_order() {
        let controls = parse_catalog(SAMPLE).unwrap();
        let ids: Vec<&str> = controls.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["AC-2", "AC-2(1)"]);
    }

    #[test]
    fn test_enhancement_parent_linkage() {
        let controls = parse_catalog(SAMPLE).unwrap();
        assert_eq!(controls[0].parent, None);
        assert_eq!(
            controls[1].parent,
            Some(ControlId::normalize("AC-2"))
        );
        assert_eq!(controls[1].family, "AC");
    }

    #[test]
    fn test_statement_prose_includes_subparts() {
        let controls = parse_catalog(SAMPLE).unwrap();
        assert_eq!(
            controls[0].text.as_deref(),
            Some("Define system accounts.\nAssign account managers.")
        );
        assert_eq!(
            controls[0].discussion.as_deref(),
            Some("Accounts include individual and group accounts.")
        );
    }

    #[test]
    fn test_related_links_filtered_by_rel() {
        let controls = parse_catalog(SAMPLE).unwrap();
        let related: Vec<&str> = controls[0].related.iter().map(|c| c.as_str()).collect();
        assert_eq!(related, vec!["AC-3", "AC-5"]);
    }

    #[test]
    fn test_missing_optional_fields_tolerated() {
        let json = r#"{"catalog": {"groups": [{"controls": [{"id": "sc-7"}]}]}}"#;
        let controls = parse_catalog(json).unwrap();
        assert_eq!(controls.len(), 1);
        assert_eq!(controls[0].id.as_str(), "SC-7");
        assert_eq!(controls[0].name, None);
        assert_eq!(controls[0].text, None);
        assert!(controls[0].related.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let controls = parse_catalog(r#"{"catalog": {}}"#).unwrap();
        assert!(controls.is_empty());
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(parse_catalog("not json").is_err());
        assert!(parse_catalog(r#"{"profile": {}}"#).is_err());
    }
}
