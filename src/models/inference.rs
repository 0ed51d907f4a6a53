//! Cluster model inference engine

use crate::config::ModelConfig;
use crate::models::loader::{LoadedModel, ModelLoader};
use anyhow::{Context, Result};
use std::sync::RwLock;
use tracing::debug;

/// Source of cluster labels for encoded profiles.
///
/// The recommendation service takes its model through this trait so tests
/// can substitute a fake without an ONNX session.
pub trait ClusterModel: Send + Sync {
    /// Predict the cluster label for a single encoded profile row.
    fn predict_label(&self, features: &[f32]) -> Result<i64>;
}

/// Cluster model backed by an ONNX Runtime session
pub struct OnnxClusterModel {
    /// Loaded model (wrapped in RwLock, session runs take `&mut`)
    model: RwLock<LoadedModel>,
}

impl OnnxClusterModel {
    /// Wrap an already-loaded model.
    pub fn new(model: LoadedModel) -> Self {
        Self {
            model: RwLock::new(model),
        }
    }

    /// Load the artifact described by the model configuration.
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let loader = ModelLoader::with_threads(config.onnx_threads)?;
        let model = loader.load(&config.path)?;
        Ok(Self::new(model))
    }

    /// Extract the cluster label from model outputs.
    ///
    /// Prefers the named label output, accepting i64 or f32 tensors, then
    /// falls back to any integer tensor output. A label that cannot be
    /// extracted is an error; there is no fallback label.
    fn extract_label(outputs: &ort::session::SessionOutputs, output_name: &str) -> Result<i64> {
        if let Some(output) = outputs.get(output_name) {
            if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
                return data
                    .first()
                    .copied()
                    .context("model returned an empty label tensor");
            }

            // Some exports emit the label as a float tensor
            if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
                if let Some(&value) = data.first() {
                    return Ok(value as i64);
                }
            }
        }

        // Fallback: any integer tensor output (skips float score vectors)
        for (name, output) in outputs.iter() {
            if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
                if let Some(&label) = data.first() {
                    debug!(output = %name, "Extracted cluster label from fallback output");
                    return Ok(label);
                }
            }
        }

        anyhow::bail!("no cluster label found in model outputs")
    }
}

impl ClusterModel for OnnxClusterModel {
    fn predict_label(&self, features: &[f32]) -> Result<i64> {
        use ort::value::Tensor;

        // Prepare input tensor - shape [1, num_features]
        let shape = vec![1_i64, features.len() as i64];
        let input_tensor = Tensor::from_array((shape, features.to_vec()))
            .context("Failed to create input tensor")?;

        let mut model = self
            .model
            .write()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        let input_name = model.input_name.clone();
        let output_name = model.output_name.clone();

        // Run inference
        let outputs = model.session.run(ort::inputs![&input_name => input_tensor])?;

        let label = Self::extract_label(&outputs, &output_name)?;

        debug!(label = label, "Cluster inference complete");

        Ok(label)
    }
}
