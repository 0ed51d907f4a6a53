//! Type definitions for the course recommendation service

pub mod profile;
pub mod recommendation;

pub use profile::{FieldOfStudy, Gender, JobLevel, StudentProfile};
pub use recommendation::{CourseCatalog, Recommendation};
