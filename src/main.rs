//! Course Recommendation Service - Main Entry Point
//!
//! Loads the clustering model artifact, then serves course recommendations
//! over HTTP. Startup aborts if the artifact is missing or unreadable.

use anyhow::{Context, Result};
use course_recommender::{
    config::AppConfig,
    metrics::{MetricsReporter, ServiceMetrics},
    models::inference::OnnxClusterModel,
    server,
    service::RecommendationService,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("course_recommender=info".parse()?),
        )
        .init();

    info!("Starting Course Recommendation Service");

    // Load configuration
    let config = AppConfig::load()?;
    info!("Configuration loaded successfully");

    // Load the model artifact; a missing or corrupt file is fatal
    let model = OnnxClusterModel::load(&config.model)
        .context("Failed to load course recommender model artifact")?;
    info!(path = %config.model.path, "Model artifact ready");

    // Build the recommendation service around the loaded model
    let service = Arc::new(RecommendationService::new(Arc::new(model)));
    info!(
        features = service.feature_count(),
        mapped_labels = ?service.catalog().labels(),
        "Recommendation service initialized"
    );

    // Initialize metrics and start the periodic reporter
    let metrics = Arc::new(ServiceMetrics::new());
    let reporter_metrics = metrics.clone();
    tokio::spawn(async move {
        let reporter = MetricsReporter::new(reporter_metrics, 30);
        reporter.start().await;
    });

    // Serve requests
    let app = server::router(service, metrics);
    server::serve(&config.server.bind_addr(), app).await
}
