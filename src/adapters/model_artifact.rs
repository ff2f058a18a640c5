//! JSON artifact holding a fitted log-income regression.
//!
//! ```json
//! { "name": "ols-log-renda", "target": "log_renda",
//!   "features": ["Intercept", "sexo[T.F]", "..."],
//!   "coefficients": [7.52, -0.76, "..."] }
//! ```
//!
//! `features`, when present, must match [`FeatureVector::NAMES`] slot for slot.

use crate::core::predictor::LinearModel;
use crate::domain::model::FeatureVector;
use crate::utils::error::{IncomeError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    pub coefficients: Vec<f64>,
}

impl ModelArtifact {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn into_model(self, path: &str) -> Result<LinearModel> {
        let fail = |reason: String| IncomeError::ModelLoadError {
            path: path.to_string(),
            reason,
        };

        if let Some(features) = &self.features {
            if features.len() != FeatureVector::LEN {
                return Err(fail(format!(
                    "expected {} feature names, found {}",
                    FeatureVector::LEN,
                    features.len()
                )));
            }
            for (slot, (found, expected)) in features.iter().zip(FeatureVector::NAMES).enumerate() {
                if found != expected {
                    return Err(fail(format!(
                        "feature {} is '{}', expected '{}'",
                        slot, found, expected
                    )));
                }
            }
        }

        let coefficients: [f64; FeatureVector::LEN] =
            self.coefficients.as_slice().try_into().map_err(|_| {
                fail(format!(
                    "expected {} coefficients, found {}",
                    FeatureVector::LEN,
                    self.coefficients.len()
                ))
            })?;

        if let Some(slot) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(fail(format!("coefficient {} is not finite", slot)));
        }

        if let Some(target) = &self.target {
            tracing::debug!("Model target: {}", target);
        }

        let name = self.name.unwrap_or_else(|| path.to_string());
        Ok(LinearModel::new(name, coefficients))
    }
}

/// Decodes and checks an artifact; any problem is reported against `path`.
pub fn decode_model(path: &str, bytes: &[u8]) -> Result<LinearModel> {
    let artifact = ModelArtifact::from_slice(bytes).map_err(|e| IncomeError::ModelLoadError {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    artifact.into_model(path)
}
