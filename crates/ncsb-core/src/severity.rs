//! # Severity Levels
//!
//! The derived severity tier attached to each enriched control. Serialized
//! in uppercase (`"LOW"`, `"MEDIUM"`, `"HIGH"`, `"CRITICAL"`) to match the
//! published dataset format.
//!
//! Severity is *derived*, not authored: the rule engine maps baseline
//! membership to a severity level (see `ncsb-engine`). This crate only owns
//! the enum.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NcsbError;

/// Derived severity of a control, from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Not present in any baseline.
    Low,
    /// Present in the Low baseline (broadest applicability) or privacy-only.
    Medium,
    /// Present in the Moderate baseline.
    High,
    /// Present only at the High baseline.
    Critical,
}

impl Severity {
    /// Returns the uppercase string identifier for this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = NcsbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(NcsbError::Config(format!("unknown severity: {other:?}"))),
        }
    }
}
