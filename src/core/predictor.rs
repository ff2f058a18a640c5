use crate::domain::model::{FeatureVector, PredictedIncome};
use crate::domain::ports::RegressionModel;

/// Back-transforms the model's log-income prediction. No clamping.
pub fn predict<M: RegressionModel + ?Sized>(features: &FeatureVector, model: &M) -> PredictedIncome {
    let linear = model.predict(features);
    tracing::debug!("Linear prediction (log scale): {}", linear);
    PredictedIncome(linear.exp())
}

/// Ordinary least squares fit on log income: one coefficient per design slot.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    name: String,
    coefficients: [f64; FeatureVector::LEN],
}

impl LinearModel {
    pub fn new(name: impl Into<String>, coefficients: [f64; FeatureVector::LEN]) -> Self {
        Self {
            name: name.into(),
            coefficients,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coefficients(&self) -> &[f64; FeatureVector::LEN] {
        &self.coefficients
    }
}

impl RegressionModel for LinearModel {
    fn predict(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.as_slice())
            .map(|(beta, x)| beta * x)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearModel {
        let mut coefficients = [0.0; FeatureVector::LEN];
        for (i, c) in coefficients.iter_mut().enumerate() {
            *c = 0.05 * i as f64 - 0.3;
        }
        coefficients[FeatureVector::INTERCEPT] = 7.5;
        LinearModel::new("test", coefficients)
    }

    #[test]
    fn test_predict_is_exp_of_dot_product() {
        let model = model();
        let mut v = FeatureVector::zeroed();
        v.set(FeatureVector::INTERCEPT, true);
        v.set(FeatureVector::SEX_FEMALE, true);
        v.set(FeatureVector::HAS_VEHICLE, true);

        let dot: f64 = 7.5 + (0.05 - 0.3) + (0.05 * 17.0 - 0.3);
        let income = predict(&v, &model);

        assert!((income.value() - dot.exp()).abs() < 1e-9);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let model = model();
        let mut v = FeatureVector::zeroed();
        v.set(FeatureVector::INTERCEPT, true);
        v.set(FeatureVector::TENURE_42_PLUS, true);

        assert_eq!(predict(&v, &model), predict(&v, &model));
    }

    #[test]
    fn test_negative_and_extreme_predictions_pass_through() {
        let mut coefficients = [0.0; FeatureVector::LEN];
        coefficients[FeatureVector::INTERCEPT] = -50.0;
        let tiny = LinearModel::new("tiny", coefficients);
        coefficients[FeatureVector::INTERCEPT] = 1000.0;
        let huge = LinearModel::new("huge", coefficients);

        let mut v = FeatureVector::zeroed();
        v.set(FeatureVector::INTERCEPT, true);

        let low = predict(&v, &tiny).value();
        assert!(low > 0.0 && low < 1e-20);
        assert!(predict(&v, &huge).value().is_infinite());
    }
}
