pub mod encoder;
pub mod engine;
pub mod predictor;
