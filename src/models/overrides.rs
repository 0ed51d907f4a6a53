//! Post-inference label override rules.
//!
//! Business corrections layered on top of the clustering model. Each rule
//! is a named, testable value; the active rules form an ordered list where
//! the first match wins. Rules are checked against the raw model label
//! only, so corrections never chain.

use crate::types::profile::{FieldOfStudy, StudentProfile};

/// A single label correction keyed on field of study and raw label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOverride {
    /// Rule name, used in logs when the rule fires
    pub name: &'static str,
    /// Field of study the rule applies to
    pub field_of_study: FieldOfStudy,
    /// Raw model label the rule matches
    pub raw_label: i64,
    /// Label substituted when the rule matches
    pub corrected_label: i64,
}

impl LabelOverride {
    /// Whether this rule applies to the given profile and raw label.
    pub fn matches(&self, profile: &StudentProfile, raw_label: i64) -> bool {
        profile.field_of_study == self.field_of_study && raw_label == self.raw_label
    }
}

/// The shipped override list.
///
/// Computer Science profiles landing in cluster 0 are redirected to label 4,
/// the part-time Data Science track.
pub fn default_overrides() -> Vec<LabelOverride> {
    vec![LabelOverride {
        name: "computer-science-cluster-0-redirect",
        field_of_study: FieldOfStudy::ComputerScience,
        raw_label: 0,
        corrected_label: 4,
    }]
}

/// Apply the first matching rule to a raw model label.
///
/// Returns the final label and the name of the rule that fired, if any.
pub fn apply_overrides(
    rules: &[LabelOverride],
    profile: &StudentProfile,
    raw_label: i64,
) -> (i64, Option<&'static str>) {
    for rule in rules {
        if rule.matches(profile, raw_label) {
            return (rule.corrected_label, Some(rule.name));
        }
    }
    (raw_label, None)
}
