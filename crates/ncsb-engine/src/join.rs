//! # Catalog Joiner
//!
//! Joins the catalog against the four baseline sets by canonical
//! identifier. The join is a pure lookup — no fuzzy matching, no
//! cross-family inference. A control absent from every set gets all-false
//! membership.
//!
//! Also home to the orphan-baseline diagnostic: baseline identifiers that
//! name no catalog control are reported per tier via `tracing::warn!` and
//! are never fatal.

use std::collections::HashSet;

use ncsb_core::{BaselineTier, Control, ControlId};

use crate::baseline::BaselineSets;
use crate::rules::BaselineMembership;

/// Compute one control identifier's membership across the four sets.
pub fn membership_for(id: &ControlId, sets: &BaselineSets) -> BaselineMembership {
    BaselineMembership {
        low: sets.low.contains(id),
        moderate: sets.moderate.contains(id),
        high: sets.high.contains(id),
        privacy: sets.privacy.contains(id),
    }
}

/// Join every catalog control against the baseline sets.
///
/// Returns one membership record per control, parallel to the input slice
/// (catalog order is preserved downstream by construction).
pub fn join_catalog(controls: &[Control], sets: &BaselineSets) -> Vec<BaselineMembership> {
    controls
        .iter()
        .map(|c| membership_for(&c.id, sets))
        .collect()
}

/// Warn about baseline identifiers that do not appear in the catalog.
///
/// Emits one `tracing::warn!` per affected tier with the orphan count and
/// the sorted identifier list. Orphans are tolerated — they simply cannot
/// contribute membership to any output row.
pub fn report_orphan_baselines(controls: &[Control], sets: &BaselineSets) {
    let catalog_ids: HashSet<&ControlId> = controls.iter().map(|c| &c.id).collect();
    for tier in BaselineTier::all_tiers() {
        let mut orphans: Vec<&str> = sets
            .get(*tier)
            .iter()
            .filter(|id| !catalog_ids.contains(id))
            .map(|id| id.as_str())
            .collect();
        if orphans.is_empty() {
            continue;
        }
        orphans.sort_unstable();
        tracing::warn!(
            tier = %tier,
            count = orphans.len(),
            "baseline control(s) not found in catalog: {}",
            orphans.join(", ")
        );
    }
}
