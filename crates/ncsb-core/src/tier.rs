//! # Baseline Tier — Single Source of Truth
//!
//! Defines the `BaselineTier` enum with the four SP 800-53B baseline
//! tiers. This is the ONE definition used across the workspace. Every
//! `match` on `BaselineTier` must be exhaustive — adding a tier forces
//! every consumer to handle it at compile time.
//!
//! The four tiers are independent sets: membership in one implies nothing
//! about membership in another (Privacy in particular is orthogonal to the
//! impact tiers).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NcsbError;

/// The four SP 800-53B baseline tiers.
///
/// | Tier | Meaning |
/// |------|---------|
/// | Low | Low-impact system baseline |
/// | Moderate | Moderate-impact system baseline |
/// | High | High-impact system baseline |
/// | Privacy | Privacy control baseline (orthogonal to impact) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineTier {
    /// Low-impact system baseline.
    Low,
    /// Moderate-impact system baseline.
    Moderate,
    /// High-impact system baseline.
    High,
    /// Privacy control baseline.
    Privacy,
}

/// Total number of baseline tiers. Used for compile-time assertions.
pub const BASELINE_TIER_COUNT: usize = 4;

impl BaselineTier {
    /// Returns all four tiers in canonical order.
    pub fn all_tiers() -> &'static [BaselineTier] {
        &[Self::Low, Self::Moderate, Self::High, Self::Privacy]
    }

    /// Returns the snake_case string identifier for this tier.
    ///
    /// This must match the serde serialization format and the
    /// `baseline_membership` keys in the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Privacy => "privacy",
        }
    }
}

impl std::fmt::Display for BaselineTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaselineTier {
    type Err = NcsbError;

    /// Parse a baseline tier from its snake_case string identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            "privacy" => Ok(Self::Privacy),
            other => Err(NcsbError::Config(format!("unknown baseline tier: {other:?}"))),
        }
    }
}
