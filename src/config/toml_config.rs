use crate::app::form::{DEFAULT_AGE_MIN, DEFAULT_EMPLOYMENT_MONTHS_MAX};
use crate::domain::ports::{ConfigProvider, DatasetColumns};
use crate::utils::error::{IncomeError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_one_of, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MODEL_PATH: &str = "modelo.json";
pub const DEFAULT_DATASET_PATH: &str = "renda.csv";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_path")]
    pub path: String,
}

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

fn default_dataset_path() -> String {
    DEFAULT_DATASET_PATH.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
    pub education_column: Option<String>,
    pub income_type_column: Option<String>,
    pub age_column: Option<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            education_column: None,
            income_type_column: None,
            age_column: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    pub age_min: Option<i64>,
    pub employment_months_max: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "compact" (default) or "json"
    pub format: Option<String>,
    pub level: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IncomeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| IncomeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| IncomeError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("model.path", &self.model.path)?;
        validate_file_extension("model.path", &self.model.path, &["json"])?;

        validate_path("dataset.path", &self.dataset.path)?;
        validate_file_extension("dataset.path", &self.dataset.path, &["csv"])?;

        for (field, column) in [
            ("dataset.education_column", &self.dataset.education_column),
            ("dataset.income_type_column", &self.dataset.income_type_column),
            ("dataset.age_column", &self.dataset.age_column),
        ] {
            if let Some(column) = column {
                validate_non_empty_string(field, column)?;
            }
        }

        if self.age_min() <= 0 {
            return Err(IncomeError::InvalidConfigValueError {
                field: "form.age_min".to_string(),
                value: self.age_min().to_string(),
                reason: "Value must be at least 1".to_string(),
            });
        }

        if self.employment_months_max() < 0 {
            return Err(IncomeError::InvalidConfigValueError {
                field: "form.employment_months_max".to_string(),
                value: self.employment_months_max().to_string(),
                reason: "Value cannot be negative".to_string(),
            });
        }

        if let Some(format) = &self.logging.format {
            validate_one_of("logging.format", format, &["compact", "json"])?;
        }

        Ok(())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

impl ConfigProvider for TomlConfig {
    fn model_path(&self) -> &str {
        &self.model.path
    }

    fn dataset_path(&self) -> &str {
        &self.dataset.path
    }

    fn dataset_columns(&self) -> DatasetColumns {
        let defaults = DatasetColumns::default();
        DatasetColumns {
            education: self
                .dataset
                .education_column
                .clone()
                .unwrap_or(defaults.education),
            income_type: self
                .dataset
                .income_type_column
                .clone()
                .unwrap_or(defaults.income_type),
            age: self.dataset.age_column.clone().unwrap_or(defaults.age),
        }
    }

    fn age_min(&self) -> i64 {
        self.form.age_min.unwrap_or(DEFAULT_AGE_MIN)
    }

    fn employment_months_max(&self) -> i64 {
        self.form
            .employment_months_max
            .unwrap_or(DEFAULT_EMPLOYMENT_MONTHS_MAX)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
