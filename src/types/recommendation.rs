//! Recommendation response and course catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Course recommendation returned for a single profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Final cluster label, after override rules
    pub prediction_label: i64,

    /// Human-readable course name mapped from the label
    pub recommended_course: String,
}

/// Fixed mapping from cluster label to course name.
///
/// Label 3 has no entry: the trained model has never produced it. A lookup
/// miss is surfaced as an error by the caller, never defaulted, so an
/// unexpected label reaches the model owner instead of a student.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    courses: BTreeMap<i64, String>,
}

impl CourseCatalog {
    pub fn new(courses: BTreeMap<i64, String>) -> Self {
        Self { courses }
    }

    /// Look up the course name for a cluster label.
    pub fn course_for(&self, label: i64) -> Option<&str> {
        self.courses.get(&label).map(String::as_str)
    }

    /// Labels with a course mapping, in ascending order.
    pub fn labels(&self) -> Vec<i64> {
        self.courses.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        let mut courses = BTreeMap::new();
        courses.insert(0, "Business Analytics (part-time)".to_string());
        courses.insert(1, "Data Science and AI (full-time)".to_string());
        courses.insert(2, "Data Analytics + Machine Learning (part-time)".to_string());
        courses.insert(4, "Data Science (part-time)".to_string());

        Self { courses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_covers_reachable_labels() {
        let catalog = CourseCatalog::default();

        assert_eq!(catalog.labels(), vec![0, 1, 2, 4]);
        assert_eq!(
            catalog.course_for(0),
            Some("Business Analytics (part-time)")
        );
        assert_eq!(
            catalog.course_for(1),
            Some("Data Science and AI (full-time)")
        );
        assert_eq!(
            catalog.course_for(2),
            Some("Data Analytics + Machine Learning (part-time)")
        );
        assert_eq!(catalog.course_for(4), Some("Data Science (part-time)"));
    }

    #[test]
    fn test_label_three_is_unmapped() {
        let catalog = CourseCatalog::default();
        assert_eq!(catalog.course_for(3), None);
    }

    #[test]
    fn test_recommendation_serialization() {
        let recommendation = Recommendation {
            prediction_label: 4,
            recommended_course: "Data Science (part-time)".to_string(),
        };

        let json = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(json["prediction_label"], 4);
        assert_eq!(json["recommended_course"], "Data Science (part-time)");
    }
}
