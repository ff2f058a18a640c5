use super::toml_config::TomlConfig;
use crate::app::form::FormInput;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Parser)]
#[command(name = "income-predictor")]
#[command(about = "Estimate monthly income from a few demographic and employment attributes")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Model artifact (JSON); overrides the configuration file
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Reference dataset (CSV); overrides the configuration file
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Predict income for the given form values
    Predict(PredictArgs),
    /// List the accepted choices and bounds for each field
    Options,
    /// Fill in the form field by field
    Interactive,
}

#[derive(Debug, Clone, Default, Args, Serialize, Deserialize)]
pub struct PredictArgs {
    #[arg(long, default_value = "")]
    pub sex: String,

    #[arg(long)]
    pub age: Option<i64>,

    #[arg(long, default_value = "")]
    pub education: String,

    #[arg(long, default_value = "")]
    pub income_type: String,

    #[arg(long)]
    pub employment_months: Option<i64>,

    #[arg(long, help = "Owns a vehicle")]
    pub vehicle: bool,

    #[arg(long, help = "Owns property")]
    pub property: bool,
}

impl From<PredictArgs> for FormInput {
    fn from(args: PredictArgs) -> Self {
        FormInput {
            sex: args.sex,
            age: args.age,
            education: args.education,
            income_type: args.income_type,
            employment_months: args.employment_months,
            has_vehicle: args.vehicle,
            has_property: args.property,
        }
    }
}

impl CliConfig {
    /// Configuration file (or defaults) with command line overrides applied.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(model) = &self.model {
            config.model.path = model.clone();
        }
        if let Some(dataset) = &self.dataset {
            config.dataset.path = dataset.clone();
        }

        Ok(config)
    }
}
