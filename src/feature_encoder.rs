//! Feature encoding for cluster model inference.
//!
//! This module turns a student profile into the numeric row the
//! clustering model was trained on.

use crate::types::profile::{FieldOfStudy, Gender, JobLevel, StudentProfile};

/// Encoder that transforms student profiles into model input features.
///
/// Column order and categorical codes match the training pipeline exactly;
/// the codes follow the training encoder's lexicographic category order.
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Create a new feature encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode a profile as a single model input row (12 features).
    pub fn encode(&self, profile: &StudentProfile) -> Vec<f32> {
        let mut features = Vec::with_capacity(12);

        features.push(profile.age as f32);
        features.push(profile.high_school_gpa as f32);
        features.push(profile.university_gpa as f32);
        features.push(profile.soft_skills_score as f32);
        features.push(profile.networking_score as f32);
        features.push(profile.starting_salary as f32);
        features.push(Self::gender_code(profile.gender));
        features.push(Self::field_of_study_code(profile.field_of_study));
        features.push(f32::from(profile.internships_completed));
        features.push(f32::from(profile.certifications));
        features.push(f32::from(profile.job_offers));
        features.push(Self::job_level_code(profile.current_job_level));

        features
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        12
    }

    /// Get the training column names, in model input order.
    pub fn feature_names(&self) -> Vec<&'static str> {
        vec![
            "Age",
            "High_School_GPA",
            "University_GPA",
            "Soft_Skills_Score",
            "Networking_Score",
            "Starting_Salary",
            "Gender",
            "Field_of_Study",
            "Internships_Completed",
            "Certifications",
            "Job_Offers",
            "Current_Job_Level",
        ]
    }

    fn gender_code(gender: Gender) -> f32 {
        match gender {
            Gender::Female => 0.0,
            Gender::Male => 1.0,
        }
    }

    fn field_of_study_code(field: FieldOfStudy) -> f32 {
        match field {
            FieldOfStudy::Arts => 0.0,
            FieldOfStudy::BusinessFinance => 1.0,
            FieldOfStudy::ComputerScience => 2.0,
            FieldOfStudy::Education => 3.0,
            FieldOfStudy::Engineering => 4.0,
            FieldOfStudy::Law => 5.0,
            FieldOfStudy::Marketing => 6.0,
            FieldOfStudy::MedicalBio => 7.0,
        }
    }

    fn job_level_code(level: JobLevel) -> f32 {
        match level {
            JobLevel::Entry => 0.0,
            JobLevel::Mid => 1.0,
            JobLevel::NA => 2.0,
            JobLevel::Senior => 3.0,
        }
    }
}

impl Default for FeatureEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_order_matches_training_columns() {
        let encoder = FeatureEncoder::new();
        let mut profile = StudentProfile::new(25, FieldOfStudy::ComputerScience);
        profile.high_school_gpa = 8.0;
        profile.university_gpa = 6.5;
        profile.starting_salary = 42000.0;
        profile.gender = Gender::Female;
        profile.internships_completed = 1;
        profile.current_job_level = JobLevel::Entry;

        let features = encoder.encode(&profile);

        assert_eq!(features.len(), encoder.feature_count());
        assert_eq!(features[0], 25.0); // Age
        assert_eq!(features[1], 8.0); // High_School_GPA
        assert_eq!(features[2], 6.5); // University_GPA
        assert_eq!(features[5], 42000.0); // Starting_Salary
        assert_eq!(features[6], 0.0); // Gender: Female
        assert_eq!(features[7], 2.0); // Field_of_Study: Computer Science
        assert_eq!(features[8], 1.0); // Internships_Completed
        assert_eq!(features[11], 0.0); // Current_Job_Level: Entry
    }

    #[test]
    fn test_feature_count() {
        let encoder = FeatureEncoder::new();
        assert_eq!(encoder.feature_count(), 12);
        assert_eq!(encoder.feature_names().len(), 12);
    }

    #[test]
    fn test_field_of_study_codes_are_distinct() {
        let fields = [
            FieldOfStudy::Arts,
            FieldOfStudy::BusinessFinance,
            FieldOfStudy::ComputerScience,
            FieldOfStudy::Education,
            FieldOfStudy::Engineering,
            FieldOfStudy::Law,
            FieldOfStudy::Marketing,
            FieldOfStudy::MedicalBio,
        ];

        let mut codes: Vec<f32> = fields
            .iter()
            .map(|&f| FeatureEncoder::field_of_study_code(f))
            .collect();
        codes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        codes.dedup();

        assert_eq!(codes.len(), fields.len());
    }
}
