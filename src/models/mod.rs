//! ML model inference components

pub mod inference;
pub mod loader;
pub mod overrides;

pub use inference::{ClusterModel, OnnxClusterModel};
pub use loader::ModelLoader;
pub use overrides::LabelOverride;
