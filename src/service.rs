//! Recommendation service orchestrating validation, encoding, inference,
//! overrides, and course mapping.

use crate::feature_encoder::FeatureEncoder;
use crate::models::inference::ClusterModel;
use crate::models::overrides::{apply_overrides, default_overrides, LabelOverride};
use crate::types::profile::{ProfileError, StudentProfile};
use crate::types::recommendation::{CourseCatalog, Recommendation};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Per-request failure taxonomy.
///
/// The HTTP layer maps `InvalidProfile` to a client error and the rest to
/// server errors; none of these touch process state.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error(transparent)]
    InvalidProfile(#[from] ProfileError),

    #[error("model inference failed: {0}")]
    Inference(#[source] anyhow::Error),

    #[error("cluster label {0} has no course mapping")]
    UnmappedLabel(i64),
}

/// Course recommendation engine.
///
/// Holds the loaded model, the feature encoder, the override rules, and the
/// course catalog. The model is injected at construction; the service keeps
/// no other state and every request is independent.
pub struct RecommendationService {
    model: Arc<dyn ClusterModel>,
    encoder: FeatureEncoder,
    overrides: Vec<LabelOverride>,
    catalog: CourseCatalog,
}

impl RecommendationService {
    /// Create a service with the shipped override rules and course catalog.
    pub fn new(model: Arc<dyn ClusterModel>) -> Self {
        Self::with_parts(model, default_overrides(), CourseCatalog::default())
    }

    /// Create a service from explicit parts.
    pub fn with_parts(
        model: Arc<dyn ClusterModel>,
        overrides: Vec<LabelOverride>,
        catalog: CourseCatalog,
    ) -> Self {
        Self {
            model,
            encoder: FeatureEncoder::new(),
            overrides,
            catalog,
        }
    }

    /// Number of features fed to the model per profile.
    pub fn feature_count(&self) -> usize {
        self.encoder.feature_count()
    }

    /// The label → course mapping in use.
    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Produce a course recommendation for one student profile.
    pub fn recommend(&self, profile: &StudentProfile) -> Result<Recommendation, RecommendError> {
        profile.validate()?;

        let features = self.encoder.encode(profile);

        let raw_label = self
            .model
            .predict_label(&features)
            .map_err(RecommendError::Inference)?;

        let (label, rule) = apply_overrides(&self.overrides, profile, raw_label);
        if let Some(rule) = rule {
            debug!(
                rule = rule,
                raw_label = raw_label,
                label = label,
                "Override rule applied"
            );
        }

        match self.catalog.course_for(label) {
            Some(course) => Ok(Recommendation {
                prediction_label: label,
                recommended_course: course.to_string(),
            }),
            None => {
                error!(label = label, "Cluster label has no course mapping");
                Err(RecommendError::UnmappedLabel(label))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::FieldOfStudy;
    use anyhow::Result;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Fake model returning a fixed label, counting calls.
    struct FixedModel {
        label: i64,
        calls: AtomicU64,
    }

    impl FixedModel {
        fn new(label: i64) -> Self {
            Self {
                label,
                calls: AtomicU64::new(0),
            }
        }
    }

    impl ClusterModel for FixedModel {
        fn predict_label(&self, _features: &[f32]) -> Result<i64> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok(self.label)
        }
    }

    fn service_with_label(label: i64) -> RecommendationService {
        RecommendationService::new(Arc::new(FixedModel::new(label)))
    }

    #[test]
    fn test_computer_science_cluster_zero_becomes_four() {
        let service = service_with_label(0);
        let profile = StudentProfile::new(25, FieldOfStudy::ComputerScience);

        let recommendation = service.recommend(&profile).unwrap();

        assert_eq!(recommendation.prediction_label, 4);
        assert_eq!(recommendation.recommended_course, "Data Science (part-time)");
    }

    #[test]
    fn test_business_finance_cluster_one_unchanged() {
        let service = service_with_label(1);
        let profile = StudentProfile::new(30, FieldOfStudy::BusinessFinance);

        let recommendation = service.recommend(&profile).unwrap();

        assert_eq!(recommendation.prediction_label, 1);
        assert_eq!(
            recommendation.recommended_course,
            "Data Science and AI (full-time)"
        );
    }

    #[test]
    fn test_all_raw_labels_map_into_catalog() {
        for raw in [0, 1, 2] {
            let service = service_with_label(raw);
            for field in [FieldOfStudy::ComputerScience, FieldOfStudy::Arts] {
                let profile = StudentProfile::new(25, field);
                let recommendation = service.recommend(&profile).unwrap();
                assert!(service
                    .catalog()
                    .labels()
                    .contains(&recommendation.prediction_label));
            }
        }
    }

    #[test]
    fn test_unmapped_label_is_an_error() {
        let service = service_with_label(3);
        let profile = StudentProfile::new(25, FieldOfStudy::Engineering);

        match service.recommend(&profile) {
            Err(RecommendError::UnmappedLabel(3)) => {}
            other => panic!("expected UnmappedLabel(3), got {:?}", other.map(|r| r.prediction_label)),
        }
    }

    #[test]
    fn test_identical_profiles_get_identical_labels() {
        let service = service_with_label(2);
        let profile = StudentProfile::new(40, FieldOfStudy::MedicalBio);

        let first = service.recommend(&profile).unwrap();
        let second = service.recommend(&profile).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_profile_rejected_before_inference() {
        let model = Arc::new(FixedModel::new(0));
        let service = RecommendationService::new(model.clone());
        let profile = StudentProfile::new(17, FieldOfStudy::Arts);

        match service.recommend(&profile) {
            Err(RecommendError::InvalidProfile(_)) => {}
            other => panic!(
                "expected InvalidProfile, got {:?}",
                other.map(|r| r.prediction_label)
            ),
        }
        assert_eq!(model.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_inference_failure_propagates() {
        struct FailingModel;
        impl ClusterModel for FailingModel {
            fn predict_label(&self, _features: &[f32]) -> Result<i64> {
                anyhow::bail!("session exploded")
            }
        }

        let service = RecommendationService::new(Arc::new(FailingModel));
        let profile = StudentProfile::new(25, FieldOfStudy::Law);

        match service.recommend(&profile) {
            Err(RecommendError::Inference(_)) => {}
            other => panic!(
                "expected Inference error, got {:?}",
                other.map(|r| r.prediction_label)
            ),
        }
    }
}
