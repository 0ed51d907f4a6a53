//! Student profile data structures for course recommendation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Student gender as collected by the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Academic domain or area of study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldOfStudy {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Business/Finance")]
    BusinessFinance,
    #[serde(rename = "Medical/Bio")]
    MedicalBio,
    Engineering,
    Arts,
    Education,
    Law,
    Marketing,
}

/// Current job seniority level (NA for students without work experience)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobLevel {
    NA,
    Entry,
    Mid,
    Senior,
}

/// Represents a student profile submitted for course recommendation.
///
/// Wire field names are case- and spelling-exact and match the column names
/// the model was trained on. Unknown fields are rejected so the request
/// shape must match exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentProfile {
    /// Age in years
    #[serde(rename = "Age")]
    pub age: u32,

    /// High school GPA rescaled to 0-10
    #[serde(rename = "High_School_GPA")]
    pub high_school_gpa: f64,

    /// University GPA rescaled to 0-10
    #[serde(rename = "University_GPA")]
    pub university_gpa: f64,

    /// Soft skills self-assessment (5-10)
    #[serde(rename = "Soft_Skills_Score")]
    pub soft_skills_score: f64,

    /// Networking comfort score (4-9)
    #[serde(rename = "Networking_Score")]
    pub networking_score: f64,

    /// Previous/current annual salary, 0 for freshers
    #[serde(rename = "Starting_Salary")]
    pub starting_salary: f64,

    #[serde(rename = "Gender")]
    pub gender: Gender,

    #[serde(rename = "Field_of_Study")]
    pub field_of_study: FieldOfStudy,

    /// Whether the student has completed internships (0 or 1)
    #[serde(rename = "Internships_Completed")]
    pub internships_completed: u8,

    /// Whether the student holds certifications (0 or 1)
    #[serde(rename = "Certifications")]
    pub certifications: u8,

    /// Whether the student has received prior job offers (0 or 1)
    #[serde(rename = "Job_Offers")]
    pub job_offers: u8,

    #[serde(rename = "Current_Job_Level")]
    pub current_job_level: JobLevel,
}

/// Validation failure for a structurally well-formed profile
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be 0 or 1, got {value}")]
    NotBinary { field: &'static str, value: u8 },
}

impl StudentProfile {
    /// Create a profile with mid-range values for the given field of study.
    pub fn new(age: u32, field_of_study: FieldOfStudy) -> Self {
        Self {
            age,
            high_school_gpa: 7.5,
            university_gpa: 7.5,
            soft_skills_score: 7.5,
            networking_score: 6.5,
            starting_salary: 35000.0,
            gender: Gender::Male,
            field_of_study,
            internships_completed: 0,
            certifications: 0,
            job_offers: 0,
            current_job_level: JobLevel::NA,
        }
    }

    /// Check numeric ranges and binary indicators.
    ///
    /// The form enforces the same bounds client-side; they are re-checked
    /// here so a hand-crafted request cannot push out-of-range values into
    /// the model.
    pub fn validate(&self) -> Result<(), ProfileError> {
        in_range("Age", f64::from(self.age), 18.0, 70.0)?;
        in_range("High_School_GPA", self.high_school_gpa, 0.0, 10.0)?;
        in_range("University_GPA", self.university_gpa, 0.0, 10.0)?;
        in_range("Soft_Skills_Score", self.soft_skills_score, 5.0, 10.0)?;
        in_range("Networking_Score", self.networking_score, 4.0, 9.0)?;
        in_range("Starting_Salary", self.starting_salary, 0.0, 69860.0)?;
        binary("Internships_Completed", self.internships_completed)?;
        binary("Certifications", self.certifications)?;
        binary("Job_Offers", self.job_offers)?;
        Ok(())
    }
}

fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ProfileError> {
    if value < min || value > max || !value.is_finite() {
        return Err(ProfileError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn binary(field: &'static str, value: u8) -> Result<(), ProfileError> {
    if value > 1 {
        return Err(ProfileError::NotBinary { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_round_trip_uses_wire_names() {
        let profile = StudentProfile::new(25, FieldOfStudy::ComputerScience);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["Age"], 25);
        assert_eq!(json["Field_of_Study"], "Computer Science");
        assert_eq!(json["Current_Job_Level"], "NA");

        let deserialized: StudentProfile = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized.age, profile.age);
        assert_eq!(deserialized.field_of_study, profile.field_of_study);
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut json = serde_json::to_value(StudentProfile::new(25, FieldOfStudy::Arts)).unwrap();
        json.as_object_mut().unwrap().remove("Gender");

        assert!(serde_json::from_value::<StudentProfile>(json).is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let mut json = serde_json::to_value(StudentProfile::new(25, FieldOfStudy::Arts)).unwrap();
        json["Age"] = serde_json::Value::String("twenty-five".to_string());

        assert!(serde_json::from_value::<StudentProfile>(json).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut json = serde_json::to_value(StudentProfile::new(25, FieldOfStudy::Arts)).unwrap();
        json["Favorite_Color"] = serde_json::Value::String("blue".to_string());

        assert!(serde_json::from_value::<StudentProfile>(json).is_err());
    }

    #[test]
    fn test_unparsable_categorical_rejected() {
        let mut json = serde_json::to_value(StudentProfile::new(25, FieldOfStudy::Arts)).unwrap();
        json["Field_of_Study"] = serde_json::Value::String("Astrology".to_string());

        assert!(serde_json::from_value::<StudentProfile>(json).is_err());
    }

    #[test]
    fn test_valid_profile_passes_validation() {
        let profile = StudentProfile::new(25, FieldOfStudy::Engineering);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_age_below_range_rejected() {
        let profile = StudentProfile::new(17, FieldOfStudy::Engineering);
        assert_eq!(
            profile.validate(),
            Err(ProfileError::OutOfRange {
                field: "Age",
                value: 17.0,
                min: 18.0,
                max: 70.0,
            })
        );
    }

    #[test]
    fn test_out_of_range_scores_rejected() {
        let mut profile = StudentProfile::new(25, FieldOfStudy::Law);
        profile.soft_skills_score = 4.9;
        assert!(profile.validate().is_err());

        let mut profile = StudentProfile::new(25, FieldOfStudy::Law);
        profile.networking_score = 9.5;
        assert!(profile.validate().is_err());

        let mut profile = StudentProfile::new(25, FieldOfStudy::Law);
        profile.starting_salary = 70000.0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_non_binary_indicator_rejected() {
        let mut profile = StudentProfile::new(25, FieldOfStudy::Marketing);
        profile.certifications = 2;
        assert_eq!(
            profile.validate(),
            Err(ProfileError::NotBinary {
                field: "Certifications",
                value: 2,
            })
        );
    }
}
