pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::bootstrap::bootstrap;
pub use app::form::{FormInput, FormSchema};
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::encoder::encode;
pub use crate::core::engine::PredictionEngine;
pub use crate::core::predictor::{predict, LinearModel};
pub use domain::model::{Estimate, FeatureVector, PredictedIncome, RawInput};
pub use utils::error::{IncomeError, Result};
