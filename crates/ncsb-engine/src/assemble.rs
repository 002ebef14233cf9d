//! # Assembler — Final Record Set and Run Metadata
//!
//! Combines each control with its membership flags and rule-engine outputs
//! into an [`EnrichedControl`], preserving the catalog's input ordering
//! exactly (no reordering by severity or family), and attaches run-level
//! metadata: project identity, rule parameters in effect, generation
//! timestamp, and the record count.
//!
//! Duplicate catalog identifiers: **first-seen wins**. A later row whose
//! identifier was already assembled is skipped with a warning — the engine
//! never silently merges rows.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use ncsb_core::{Control, ControlId, Severity, Timestamp};

use crate::baseline::BaselineSets;
use crate::join::membership_for;
use crate::rules::{BaselineMembership, MinBaseline, RuleConfig};

/// Display name of the published dataset.
pub const PROJECT_NAME: &str = "NIST Cloud Security Baseline (NCSB)";

/// The framework the catalog comes from.
pub const FRAMEWORK: &str = "NIST SP 800-53 Rev. 5";

/// Canonical publication page for the framework.
pub const PUBLICATION_URL: &str =
    "https://csrc.nist.gov/publications/detail/sp/800-53/rev-5/final";

/// Source repository for the OSCAL documents.
pub const OSCAL_CONTENT_URL: &str = "https://github.com/usnistgov/oscal-content";

/// One fully enriched control, immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedControl {
    /// Canonical identifier.
    pub control_id: ControlId,
    /// Human-readable title.
    pub control_name: Option<String>,
    /// Family code.
    pub family: String,
    /// Control statement text.
    pub control_text: Option<String>,
    /// Supplemental discussion.
    pub discussion: Option<String>,
    /// Related controls, comma-joined; null when there are none.
    pub related_controls: Option<String>,
    /// Parent control identifier; null for base controls.
    pub parent_control_id: Option<ControlId>,
    /// Membership across the four baseline sets.
    pub baseline_membership: BaselineMembership,
    /// Derived severity tier.
    pub severity: Severity,
    /// Derived non-negotiable flag.
    pub non_negotiable: bool,
}

/// External references attached to the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Framework publication page.
    pub publication: String,
    /// OSCAL source repository.
    pub oscal_content: String,
}

impl Default for Reference {
    fn default() -> Self {
        Self {
            publication: PUBLICATION_URL.to_owned(),
            oscal_content: OSCAL_CONTENT_URL.to_owned(),
        }
    }
}

/// The severity priority table, spelled out in the output so consumers can
/// see which label each branch produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityDefinition {
    pub if_in_low: Severity,
    pub elif_in_moderate: Severity,
    pub elif_in_high: Severity,
    pub elif_privacy_only: Severity,
    #[serde(rename = "else")]
    pub otherwise: Severity,
}

/// Rule parameters in effect for this run, as published in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesMetadata {
    pub severity_definition: SeverityDefinition,
    pub non_negotiable_min_baseline: MinBaseline,
}

impl RulesMetadata {
    fn from_config(config: &RuleConfig) -> Self {
        Self {
            severity_definition: SeverityDefinition {
                if_in_low: config.severity_low,
                elif_in_moderate: config.severity_moderate,
                elif_in_high: config.severity_high,
                elif_privacy_only: config.severity_privacy_only,
                otherwise: config.severity_none,
            },
            non_negotiable_min_baseline: config.non_negotiable_min_baseline,
        }
    }
}

/// The complete enriched dataset for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedCatalog {
    pub project: String,
    pub project_version: String,
    pub generated_at_utc: Timestamp,
    pub framework: String,
    pub reference: Reference,
    pub rules: RulesMetadata,
    pub count: usize,
    pub controls: Vec<EnrichedControl>,
}

/// Run the join and enrichment over a catalog snapshot.
///
/// Deterministic given identical catalog, sets, config, and timestamp:
/// reruns differ only in `generated_at_utc`. Input catalog order is
/// preserved; duplicate identifiers keep the first-seen row and warn on
/// the rest.
pub fn assemble(
    controls: &[Control],
    sets: &BaselineSets,
    config: &RuleConfig,
    generated_at: Timestamp,
) -> EnrichedCatalog {
    let mut seen: HashSet<&ControlId> = HashSet::with_capacity(controls.len());
    let mut enriched = Vec::with_capacity(controls.len());

    for control in controls {
        if !seen.insert(&control.id) {
            tracing::warn!(
                control_id = %control.id,
                "duplicate catalog identifier; keeping first-seen row"
            );
            continue;
        }
        let membership = membership_for(&control.id, sets);
        enriched.push(enrich_one(control, membership, config));
    }

    EnrichedCatalog {
        project: PROJECT_NAME.to_owned(),
        project_version: env!("CARGO_PKG_VERSION").to_owned(),
        generated_at_utc: generated_at,
        framework: FRAMEWORK.to_owned(),
        reference: Reference::default(),
        rules: RulesMetadata::from_config(config),
        count: enriched.len(),
        controls: enriched,
    }
}

/// Enrich a single control record.
fn enrich_one(
    control: &Control,
    membership: BaselineMembership,
    config: &RuleConfig,
) -> EnrichedControl {
    let related_controls = if control.related.is_empty() {
        None
    } else {
        Some(
            control
                .related
                .iter()
                .map(ControlId::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        )
    };
    EnrichedControl {
        control_id: control.id.clone(),
        control_name: control.name.clone(),
        family: control.family.clone(),
        control_text: control.text.clone(),
        discussion: control.discussion.clone(),
        related_controls,
        parent_control_id: control.parent.clone(),
        baseline_membership: membership,
        severity: config.severity_for(membership),
        non_negotiable: config.non_negotiable_for(membership),
    }
}
