use crate::domain::model::FeatureVector;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Column names read from the reference dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetColumns {
    pub education: String,
    pub income_type: String,
    pub age: String,
}

impl Default for DatasetColumns {
    fn default() -> Self {
        Self {
            education: "educacao".to_string(),
            income_type: "tipo_renda".to_string(),
            age: "idade".to_string(),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn model_path(&self) -> &str;
    fn dataset_path(&self) -> &str;
    fn dataset_columns(&self) -> DatasetColumns;
    fn age_min(&self) -> i64;
    fn employment_months_max(&self) -> i64;
}

/// A fitted model: maps a design vector to its linear prediction (log scale).
pub trait RegressionModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> f64;
}

impl<M: RegressionModel + ?Sized> RegressionModel for &M {
    fn predict(&self, features: &FeatureVector) -> f64 {
        (**self).predict(features)
    }
}
