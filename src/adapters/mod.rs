// Adapters layer: decoders for the startup artifacts (model, reference dataset).

pub mod model_artifact;
pub mod reference_dataset;

pub use model_artifact::{decode_model, ModelArtifact};
pub use reference_dataset::decode_reference;
