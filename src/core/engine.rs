use crate::app::form::{FormInput, FormSchema, Submission};
use crate::core::encoder::encode;
use crate::core::predictor::predict;
use crate::domain::model::Estimate;
use crate::domain::ports::RegressionModel;
use crate::utils::error::Result;

/// Read-only handle built once at startup: the loaded model plus the form
/// bounds derived from the reference dataset.
pub struct PredictionEngine<M: RegressionModel> {
    model: M,
    schema: FormSchema,
}

impl<M: RegressionModel> PredictionEngine<M> {
    pub fn new(model: M, schema: FormSchema) -> Self {
        Self { model, schema }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Incomplete forms yield `Estimate::Incomplete` and never reach the model.
    pub fn evaluate(&self, form: &FormInput) -> Result<Estimate> {
        let raw = match self.schema.accept(form)? {
            Submission::Incomplete => {
                tracing::debug!("Form incomplete, skipping prediction");
                return Ok(Estimate::Incomplete);
            }
            Submission::Ready(raw) => raw,
        };

        let features = encode(&raw);
        tracing::debug!("Encoded features: {:?}", features.as_slice());

        let income = predict(&features, &self.model);
        tracing::info!("Predicted income: {}", income);

        Ok(Estimate::Predicted(income))
    }
}
