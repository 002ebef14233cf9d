//! # Baseline Set Builder
//!
//! Turns each baseline's raw identifier rows into a set of canonical
//! identifiers. Duplicate rows collapse (set semantics); an empty input
//! yields an empty set, not an error.

use std::collections::HashSet;

use ncsb_core::{BaselineTier, ControlId, NcsbError};

/// The set of canonical control identifiers selected by one baseline tier.
#[derive(Debug, Clone)]
pub struct BaselineSet {
    tier: BaselineTier,
    ids: HashSet<ControlId>,
}

impl BaselineSet {
    /// Build a set from raw identifier rows, normalizing each.
    pub fn from_raw_rows<'a, I>(tier: BaselineTier, rows: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            tier,
            ids: rows.into_iter().map(ControlId::normalize).collect(),
        }
    }

    /// Build a set from already-canonical identifiers (e.g. an OSCAL
    /// profile's selections). Duplicates collapse.
    pub fn from_ids<I>(tier: BaselineTier, ids: I) -> Self
    where
        I: IntoIterator<Item = ControlId>,
    {
        Self {
            tier,
            ids: ids.into_iter().collect(),
        }
    }

    /// An empty set for the given tier.
    pub fn empty(tier: BaselineTier) -> Self {
        Self {
            tier,
            ids: HashSet::new(),
        }
    }

    /// The tier this set belongs to.
    pub fn tier(&self) -> BaselineTier {
        self.tier
    }

    /// Set-containment test against a canonical identifier.
    pub fn contains(&self, id: &ControlId) -> bool {
        self.ids.contains(id)
    }

    /// Number of distinct identifiers in the set.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over the identifiers (no defined order).
    pub fn iter(&self) -> impl Iterator<Item = &ControlId> {
        self.ids.iter()
    }
}

/// The four baseline sets for one enrichment run.
///
/// Sets are independent snapshots; membership in one implies nothing about
/// membership in another.
#[derive(Debug, Clone)]
pub struct BaselineSets {
    /// Low-impact baseline selections.
    pub low: BaselineSet,
    /// Moderate-impact baseline selections.
    pub moderate: BaselineSet,
    /// High-impact baseline selections.
    pub high: BaselineSet,
    /// Privacy baseline selections.
    pub privacy: BaselineSet,
}

impl BaselineSets {
    /// Assemble the four sets, checking each carries its expected tier tag.
    ///
    /// # Errors
    ///
    /// Returns [`NcsbError::Config`] if a set is passed in the wrong slot —
    /// a wiring mistake that must not silently skew every membership flag.
    pub fn new(
        low: BaselineSet,
        moderate: BaselineSet,
        high: BaselineSet,
        privacy: BaselineSet,
    ) -> Result<Self, NcsbError> {
        let expected = [
            (BaselineTier::Low, low.tier()),
            (BaselineTier::Moderate, moderate.tier()),
            (BaselineTier::High, high.tier()),
            (BaselineTier::Privacy, privacy.tier()),
        ];
        for (want, got) in expected {
            if want != got {
                return Err(NcsbError::Config(format!(
                    "baseline set in the {want} slot is tagged {got}"
                )));
            }
        }
        Ok(Self {
            low,
            moderate,
            high,
            privacy,
        })
    }

    /// The set for a given tier.
    pub fn get(&self, tier: BaselineTier) -> &BaselineSet {
        match tier {
            BaselineTier::Low => &self.low,
            BaselineTier::Moderate => &self.moderate,
            BaselineTier::High => &self.high,
            BaselineTier::Privacy => &self.privacy,
        }
    }
}
