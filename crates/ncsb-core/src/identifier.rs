//! # Control Identifier Newtype and Normalizer
//!
//! `ControlId` wraps an SP 800-53 control identifier in its canonical
//! display form: uppercase family code, hyphen, base number, and an
//! optional parenthesized enhancement number with no internal whitespace
//! (`AC-2`, `AC-2(1)`).
//!
//! Normalization is **total**: input that does not match the control-id
//! grammar is carried through unchanged as an opaque key. Downstream joins
//! simply never find such a key in any baseline set, which is the correct
//! outcome for a stray cell in upstream data.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Grammar for a raw control identifier, tolerant of casing, surrounding
/// whitespace, zero-padding, and spacing around the enhancement suffix.
static RAW_CONTROL_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{2,3})\s*-\s*0*(\d{1,3})\s*(?:\(\s*0*(\d{1,3})\s*\))?$")
        .expect("raw control-id regex is valid")
});

/// Grammar for a canonical enhancement identifier, e.g. `AC-2(1)`.
static ENHANCEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]{2,3}-\d{1,3})\((\d{1,3})\)$").expect("enhancement regex is valid")
});

/// A control identifier in canonical display form.
///
/// Construct via [`ControlId::normalize`], which accepts the notation
/// variants seen in upstream tables (`ac-2`, `AC-2 (01)`) and produces the
/// canonical form. Malformed input becomes an opaque identifier that still
/// participates in equality and hashing but is never an enhancement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(String);

impl ControlId {
    /// Normalize a raw identifier string into canonical form.
    ///
    /// - `"ac-2"` → `AC-2`
    /// - `"AC-2 (01)"` → `AC-2(1)`
    /// - `"  sc-7 "` → `SC-7`
    ///
    /// Input with no recognizable `FAMILY-NUM` pattern is passed through
    /// unchanged. This function never fails.
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        match RAW_CONTROL_ID_RE.captures(trimmed) {
            Some(caps) => {
                let family = caps[1].to_ascii_uppercase();
                let number = &caps[2];
                match caps.get(3) {
                    Some(enh) => Self(format!("{family}-{number}({})", enh.as_str())),
                    None => Self(format!("{family}-{number}")),
                }
            }
            None => Self(raw.to_owned()),
        }
    }

    /// The canonical identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The parent control's identifier, if this is an enhancement.
    ///
    /// `AC-2(1)` → `Some(AC-2)`; base controls and opaque identifiers have
    /// no parent. The parent is derived purely from the identifier — it
    /// need not exist in any catalog.
    pub fn parent(&self) -> Option<ControlId> {
        ENHANCEMENT_RE
            .captures(&self.0)
            .map(|caps| Self(caps[1].to_owned()))
    }

    /// Whether this identifier denotes a control enhancement.
    pub fn is_enhancement(&self) -> bool {
        ENHANCEMENT_RE.is_match(&self.0)
    }

    /// The family code, e.g. `AC` for `AC-2(1)`.
    ///
    /// For an opaque identifier this is the text before the first hyphen,
    /// or the whole identifier if there is none.
    pub fn family(&self) -> &str {
        let base_len = match self.0.find('(') {
            Some(idx) => idx,
            None => self.0.len(),
        };
        match self.0[..base_len].find('-') {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(ControlId::normalize("ac-2").as_str(), "AC-2");
    }

    #[test]
    fn test_normalize_enhancement_with_spacing() {
        assert_eq!(ControlId::normalize("AC-2 (01)").as_str(), "AC-2(1)");
    }

    #[test]
    fn test_normalize_strips_surrounding_whitespace() {
        assert_eq!(ControlId::normalize("  sc-7 ").as_str(), "SC-7");
    }

    #[test]
    fn test_normalize_zero_padded_base() {
        assert_eq!(ControlId::normalize("ac-02").as_str(), "AC-2");
    }

    #[test]
    fn test_normalize_three_letter_family() {
        assert_eq!(ControlId::normalize("pii-3").as_str(), "PII-3");
        assert_eq!(ControlId::normalize("pii-3(2)").as_str(), "PII-3(2)");
    }

    #[test]
    fn test_malformed_passes_through() {
        assert_eq!(ControlId::normalize("not a control").as_str(), "not a control");
        assert_eq!(ControlId::normalize("").as_str(), "");
        assert_eq!(ControlId::normalize("A-").as_str(), "A-");
    }

    #[test]
    fn test_malformed_is_not_enhancement() {
        let id = ControlId::normalize("garbage(1)");
        assert!(!id.is_enhancement());
        assert_eq!(id.parent(), None);
    }

    // ---- parent derivation ----

    #[test]
    fn test_parent_of_enhancement() {
        let id = ControlId::normalize("ac-2(1)");
        assert_eq!(id.parent(), Some(ControlId::normalize("AC-2")));
    }

    #[test]
    fn test_parent_of_base_is_none() {
        assert_eq!(ControlId::normalize("AC-2").parent(), None);
    }

    #[test]
    fn test_is_enhancement() {
        assert!(ControlId::normalize("ia-2(12)").is_enhancement());
        assert!(!ControlId::normalize("ia-2").is_enhancement());
    }

    // ---- family extraction ----

    #[test]
    fn test_family_of_base_and_enhancement() {
        assert_eq!(ControlId::normalize("AC-2").family(), "AC");
        assert_eq!(ControlId::normalize("AC-2(1)").family(), "AC");
        assert_eq!(ControlId::normalize("pii-3.x").family(), "pii");
        assert_eq!(ControlId::normalize("opaque").family(), "opaque");
    }

    // ---- serde ----

    #[test]
    fn test_serde_transparent() {
        let id = ControlId::normalize("ac-2(1)");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"AC-2(1)\"");
        let back: ControlId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    // ---- properties ----

    proptest! {
        /// Normalization is idempotent: normalizing a canonical identifier
        /// is a no-op.
        #[test]
        fn prop_normalize_idempotent(raw in "[A-Za-z]{2,3}-[0-9]{1,3}(\\([0-9]{1,2}\\))?") {
            let once = ControlId::normalize(&raw);
            let twice = ControlId::normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        /// Every well-formed enhancement has a parent equal to the
        /// identifier with its suffix stripped.
        #[test]
        fn prop_enhancement_parent(fam in "[A-Z]{2,3}", num in 1u16..=999, enh in 1u16..=99) {
            let id = ControlId::normalize(&format!("{fam}-{num}({enh})"));
            let parent = id.parent().expect("well-formed enhancement has a parent");
            prop_assert_eq!(parent.as_str(), format!("{fam}-{num}"));
            prop_assert!(parent.parent().is_none());
        }
    }
}
