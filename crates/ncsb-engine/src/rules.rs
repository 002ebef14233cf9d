//! # Rule Engine — Severity and Non-Negotiable Derivation
//!
//! Pure, total derivation of the two enrichment fields from a control's
//! baseline membership flags. No I/O, no ambient defaults: the
//! [`RuleConfig`] is threaded explicitly through every call.
//!
//! Severity priority (first match wins):
//!
//! 1. in Low → `severity_low` (default MEDIUM)
//! 2. else in Moderate → `severity_moderate` (default HIGH)
//! 3. else in High → `severity_high` (default CRITICAL)
//! 4. else privacy-only → `severity_privacy_only` (default MEDIUM)
//! 5. else → `severity_none` (default LOW)
//!
//! The Low baseline is the broadest, so membership there marks a control
//! every system needs — important but table stakes. A control appearing
//! *only* at High marks the rarefied tier, hence CRITICAL.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use ncsb_core::{NcsbError, Severity};

/// Minimum baseline tier at which a control becomes non-negotiable.
///
/// Only `moderate` and `high` are valid; an unrecognized value is a
/// configuration error surfaced before any processing begins, never a
/// silent default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinBaseline {
    /// Controls in the Moderate or High baseline are non-negotiable.
    #[default]
    Moderate,
    /// Only controls in the High baseline are non-negotiable.
    High,
}

impl MinBaseline {
    /// Returns the snake_case string identifier for this threshold.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for MinBaseline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MinBaseline {
    type Err = NcsbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            other => Err(NcsbError::Config(format!(
                "non_negotiable_min_baseline must be \"moderate\" or \"high\", got {other:?}"
            ))),
        }
    }
}

/// A control's membership across the four baseline sets.
///
/// The four flags are independent; no flag implies another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineMembership {
    /// Present in the Low baseline.
    pub low: bool,
    /// Present in the Moderate baseline.
    pub moderate: bool,
    /// Present in the High baseline.
    pub high: bool,
    /// Present in the Privacy baseline.
    pub privacy: bool,
}

impl BaselineMembership {
    /// Whether the control appears in any of the three impact baselines.
    pub fn in_any_impact_baseline(&self) -> bool {
        self.low || self.moderate || self.high
    }
}

/// Swappable rule parameters for one enrichment run.
///
/// Immutable per run; constructed at configuration time and threaded
/// through every derivation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Threshold for the non-negotiable flag.
    pub non_negotiable_min_baseline: MinBaseline,
    /// Severity assigned to controls in the Low baseline.
    pub severity_low: Severity,
    /// Severity assigned to controls in the Moderate baseline.
    pub severity_moderate: Severity,
    /// Severity assigned to controls only in the High baseline.
    pub severity_high: Severity,
    /// Severity assigned to privacy-only controls.
    pub severity_privacy_only: Severity,
    /// Severity assigned to controls in no baseline.
    pub severity_none: Severity,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            non_negotiable_min_baseline: MinBaseline::Moderate,
            severity_low: Severity::Medium,
            severity_moderate: Severity::High,
            severity_high: Severity::Critical,
            severity_privacy_only: Severity::Medium,
            severity_none: Severity::Low,
        }
    }
}

impl RuleConfig {
    /// A default config with the given non-negotiable threshold.
    pub fn with_min_baseline(min: MinBaseline) -> Self {
        Self {
            non_negotiable_min_baseline: min,
            ..Self::default()
        }
    }

    /// Derive the severity for one control's membership flags.
    ///
    /// First match wins, in the priority order documented at module level.
    pub fn severity_for(&self, m: BaselineMembership) -> Severity {
        if m.low {
            self.severity_low
        } else if m.moderate {
            self.severity_moderate
        } else if m.high {
            self.severity_high
        } else if m.privacy {
            self.severity_privacy_only
        } else {
            self.severity_none
        }
    }

    /// Derive the non-negotiable flag for one control's membership flags.
    pub fn non_negotiable_for(&self, m: BaselineMembership) -> bool {
        match self.non_negotiable_min_baseline {
            MinBaseline::Moderate => m.moderate || m.high,
            MinBaseline::High => m.high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership(low: bool, moderate: bool, high: bool, privacy: bool) -> BaselineMembership {
        BaselineMembership {
            low,
            moderate,
            high,
            privacy,
        }
    }

    // ---- severity priority table ----

    #[test]
    fn test_in_low_is_medium() {
        let cfg = RuleConfig::default();
        assert_eq!(cfg.severity_for(membership(true, false, false, false)), Severity::Medium);
        // Low wins even when every other flag is set.
        assert_eq!(cfg.severity_for(membership(true, true, true, true)), Severity::Medium);
    }

    #[test]
    fn test_moderate_without_low_is_high() {
        let cfg = RuleConfig::default();
        assert_eq!(cfg.severity_for(membership(false, true, false, false)), Severity::High);
        assert_eq!(cfg.severity_for(membership(false, true, true, false)), Severity::High);
    }

    #[test]
    fn test_high_only_is_critical() {
        let cfg = RuleConfig::default();
        assert_eq!(cfg.severity_for(membership(false, false, true, false)), Severity::Critical);
        assert_eq!(cfg.severity_for(membership(false, false, true, true)), Severity::Critical);
    }

    #[test]
    fn test_privacy_only_is_medium() {
        let cfg = RuleConfig::default();
        assert_eq!(cfg.severity_for(membership(false, false, false, true)), Severity::Medium);
    }

    #[test]
    fn test_no_membership_is_low() {
        let cfg = RuleConfig::default();
        assert_eq!(cfg.severity_for(membership(false, false, false, false)), Severity::Low);
    }

    #[test]
    fn test_exactly_one_severity_for_every_combination() {
        let cfg = RuleConfig::default();
        for bits in 0u8..16 {
            let m = membership(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            // Total function: every combination maps to some severity.
            let _ = cfg.severity_for(m);
        }
    }

    // ---- non-negotiable thresholds ----

    #[test]
    fn test_non_negotiable_moderate_threshold() {
        let cfg = RuleConfig::default();
        assert!(cfg.non_negotiable_for(membership(false, true, false, false)));
        assert!(cfg.non_negotiable_for(membership(false, false, true, false)));
        assert!(!cfg.non_negotiable_for(membership(true, false, false, false)));
        assert!(!cfg.non_negotiable_for(membership(false, false, false, true)));
    }

    #[test]
    fn test_non_negotiable_high_threshold() {
        let cfg = RuleConfig::with_min_baseline(MinBaseline::High);
        assert!(cfg.non_negotiable_for(membership(false, false, true, false)));
        assert!(!cfg.non_negotiable_for(membership(false, true, false, false)));
        assert!(!cfg.non_negotiable_for(membership(true, true, false, true)));
    }

    #[test]
    fn test_non_negotiable_monotonic_under_moderate() {
        // Under the moderate threshold, any control that qualifies via High
        // also qualifies via Moderate-or-High.
        let cfg = RuleConfig::default();
        for bits in 0u8..16 {
            let m = membership(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            if m.high {
                assert!(cfg.non_negotiable_for(m));
            }
        }
    }

    // ---- config parsing ----

    #[test]
    fn test_min_baseline_from_str() {
        assert_eq!("moderate".parse::<MinBaseline>().unwrap(), MinBaseline::Moderate);
        assert_eq!("high".parse::<MinBaseline>().unwrap(), MinBaseline::High);
    }

    #[test]
    fn test_min_baseline_rejects_unknown() {
        assert!("low".parse::<MinBaseline>().is_err());
        assert!("HIGH".parse::<MinBaseline>().is_err());
        assert!("".parse::<MinBaseline>().is_err());
    }

    #[test]
    fn test_membership_serde_shape() {
        let m = membership(true, false, true, false);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"low": true, "moderate": false, "high": true, "privacy": false})
        );
    }
}
