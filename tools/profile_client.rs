//! Test Profile Client
//!
//! Generates random student profiles and posts them to the prediction
//! service, rendering the recommendation or a distinguishable error state.

use anyhow::Result;
use course_recommender::server::ErrorResponse;
use course_recommender::types::profile::{FieldOfStudy, Gender, JobLevel, StudentProfile};
use course_recommender::types::recommendation::Recommendation;
use rand::Rng;
use std::time::Duration;
use tracing::{error, info, warn};

/// Profile generator for testing
struct ProfileGenerator {
    rng: rand::rngs::ThreadRng,
}

impl ProfileGenerator {
    fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }

    /// Generate a random profile within the form's bounds
    fn generate(&mut self) -> StudentProfile {
        StudentProfile {
            age: self.rng.gen_range(18..=70),
            high_school_gpa: round_score(self.rng.gen_range(0.0..=10.0)),
            university_gpa: round_score(self.rng.gen_range(0.0..=10.0)),
            soft_skills_score: round_score(self.rng.gen_range(5.0..=10.0)),
            networking_score: round_score(self.rng.gen_range(4.0..=9.0)),
            starting_salary: f64::from(self.rng.gen_range(0..=69) * 1000),
            gender: *self.random_choice(&[Gender::Male, Gender::Female]),
            field_of_study: *self.random_choice(&[
                FieldOfStudy::ComputerScience,
                FieldOfStudy::BusinessFinance,
                FieldOfStudy::MedicalBio,
                FieldOfStudy::Engineering,
                FieldOfStudy::Arts,
                FieldOfStudy::Education,
                FieldOfStudy::Law,
                FieldOfStudy::Marketing,
            ]),
            internships_completed: self.rng.gen_range(0..=1),
            certifications: self.rng.gen_range(0..=1),
            job_offers: self.rng.gen_range(0..=1),
            current_job_level: *self.random_choice(&[
                JobLevel::NA,
                JobLevel::Entry,
                JobLevel::Mid,
                JobLevel::Senior,
            ]),
        }
    }

    fn random_choice<'a, T>(&mut self, choices: &'a [T]) -> &'a T {
        &choices[self.rng.gen_range(0..choices.len())]
    }
}

/// One decimal place, matching the form's slider step
fn round_score(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("profile_client=info".parse()?),
        )
        .init();

    info!("Starting Test Profile Client");

    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let base_url = args
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or("http://localhost:8000");
    let count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);
    let delay_ms: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(500);

    info!(
        base_url = %base_url,
        count = count,
        delay_ms = delay_ms,
        "Configuration loaded"
    );

    // Bounded wait; expiry is treated as a connection failure
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let mut generator = ProfileGenerator::new();
    let endpoint = format!("{}/predict", base_url);

    let mut recommended = 0u64;
    let mut rejected = 0u64;
    let mut failed = 0u64;

    for i in 0..count {
        let profile = generator.generate();
        let field = profile.field_of_study;

        match client.post(&endpoint).json(&profile).send().await {
            Ok(response) if response.status().is_success() => {
                let recommendation: Recommendation = response.json().await?;
                recommended += 1;
                info!(
                    field_of_study = ?field,
                    prediction_label = recommendation.prediction_label,
                    recommended_course = %recommendation.recommended_course,
                    "Recommendation received"
                );
            }
            Ok(response) => {
                let status = response.status();
                let message = response
                    .json::<ErrorResponse>()
                    .await
                    .map(|body| body.error)
                    .unwrap_or_else(|_| "no error description".to_string());
                rejected += 1;
                warn!(
                    status = %status,
                    message = %message,
                    "Request rejected by service"
                );
            }
            Err(e) => {
                failed += 1;
                error!(error = %e, "Connection to prediction service failed");
            }
        }

        if (i + 1) % 10 == 0 {
            info!(
                "Sent {}/{} profiles ({} recommended, {} rejected, {} connection failures)",
                i + 1,
                count,
                recommended,
                rejected,
                failed
            );
        }

        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    info!(
        "Completed! Sent {} profiles ({} recommended, {} rejected, {} connection failures)",
        count, recommended, rejected, failed
    );

    Ok(())
}
