//! Course Recommendation Service Library
//!
//! Serves course recommendations derived from a pre-trained clustering
//! model over a single HTTP prediction endpoint.

pub mod config;
pub mod feature_encoder;
pub mod metrics;
pub mod models;
pub mod server;
pub mod service;
pub mod types;

pub use config::AppConfig;
pub use feature_encoder::FeatureEncoder;
pub use models::inference::{ClusterModel, OnnxClusterModel};
pub use service::RecommendationService;
pub use types::{profile::StudentProfile, recommendation::Recommendation};
