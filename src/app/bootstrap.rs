use crate::adapters::{decode_model, decode_reference};
use crate::app::form::FormSchema;
use crate::core::engine::PredictionEngine;
use crate::core::predictor::LinearModel;
use crate::domain::model::ReferenceOptions;
use crate::domain::ports::{ConfigProvider, DatasetColumns, Storage};
use crate::utils::error::{IncomeError, Result};

pub async fn load_model<S: Storage>(storage: &S, path: &str) -> Result<LinearModel> {
    let bytes = storage
        .read_file(path)
        .await
        .map_err(|e| IncomeError::ModelLoadError {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

    let model = decode_model(path, &bytes)?;
    tracing::info!("Loaded model '{}' from {}", model.name(), path);
    Ok(model)
}

pub async fn load_reference<S: Storage>(
    storage: &S,
    path: &str,
    columns: &DatasetColumns,
) -> Result<ReferenceOptions> {
    let bytes = storage
        .read_file(path)
        .await
        .map_err(|e| IncomeError::DatasetError {
            message: format!("{}: {}", path, e),
        })?;

    let options = decode_reference(&bytes, columns).map_err(|e| match e {
        IncomeError::DatasetError { message } => IncomeError::DatasetError {
            message: format!("{}: {}", path, message),
        },
        other => other,
    })?;
    tracing::info!(
        "Loaded reference options from {} (max age {})",
        path,
        options.max_age
    );
    Ok(options)
}

/// Loads the model and the reference dataset once; either failing aborts startup.
pub async fn bootstrap<S: Storage, C: ConfigProvider>(
    storage: &S,
    config: &C,
) -> Result<PredictionEngine<LinearModel>> {
    let columns = config.dataset_columns();
    let (model, options) = tokio::try_join!(
        load_model(storage, config.model_path()),
        load_reference(storage, config.dataset_path(), &columns),
    )?;

    if options.max_age < config.age_min() {
        return Err(IncomeError::DatasetError {
            message: format!(
                "maximum age {} is below the minimum age {}",
                options.max_age,
                config.age_min()
            ),
        });
    }

    let schema = FormSchema::new(&options, config.age_min(), config.employment_months_max());
    Ok(PredictionEngine::new(model, schema))
}
