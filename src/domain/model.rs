use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown while the form is incomplete.
pub const PLACEHOLDER_DISPLAY: &str = "R$ 0,00";

/// Looks up a trimmed label in a `(label, value)` table, falling back to `other`.
fn parse_label<T: Clone>(label: &str, table: &[(&str, T)], other: fn(String) -> T) -> T {
    let label = label.trim();
    table
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, value)| value.clone())
        .unwrap_or_else(|| other(label.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
    Other(String),
}

impl Sex {
    const LABELS: &'static [(&'static str, Sex)] = &[
        ("Feminino", Sex::Female),
        ("F", Sex::Female),
        ("Female", Sex::Female),
        ("Masculino", Sex::Male),
        ("M", Sex::Male),
        ("Male", Sex::Male),
    ];

    pub fn from_label(label: &str) -> Self {
        parse_label(label, Self::LABELS, Sex::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    Primary,
    Secondary,
    IncompleteHigherEd,
    CompletedHigherEd,
    Postgraduate,
    Other(String),
}

impl Education {
    const LABELS: &'static [(&'static str, Education)] = &[
        ("Primário", Education::Primary),
        ("Primary", Education::Primary),
        ("Secundário", Education::Secondary),
        ("Secondary", Education::Secondary),
        ("Superior incompleto", Education::IncompleteHigherEd),
        ("Incomplete Higher Ed", Education::IncompleteHigherEd),
        ("Superior completo", Education::CompletedHigherEd),
        ("Completed Higher Ed", Education::CompletedHigherEd),
        ("Pós graduação", Education::Postgraduate),
        ("Postgraduate", Education::Postgraduate),
    ];

    pub fn from_label(label: &str) -> Self {
        parse_label(label, Self::LABELS, Education::Other)
    }

    pub fn is_higher_ed(&self) -> bool {
        matches!(self, Education::Postgraduate | Education::CompletedHigherEd)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeType {
    Retiree,
    BusinessOwner,
    PublicServant,
    Other(String),
}

impl IncomeType {
    const LABELS: &'static [(&'static str, IncomeType)] = &[
        ("Pensionista", IncomeType::Retiree),
        ("Retiree", IncomeType::Retiree),
        ("Empresário", IncomeType::BusinessOwner),
        ("Business Owner", IncomeType::BusinessOwner),
        ("Servidor público", IncomeType::PublicServant),
        ("Public Servant", IncomeType::PublicServant),
    ];

    pub fn from_label(label: &str) -> Self {
        parse_label(label, Self::LABELS, IncomeType::Other)
    }

    pub fn is_retiree(&self) -> bool {
        matches!(self, IncomeType::Retiree)
    }
}

/// A complete, typed set of attributes ready for encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub sex: Sex,
    pub has_vehicle: bool,
    pub has_property: bool,
    pub education: Education,
    pub income_type: IncomeType,
    pub age: i64,
    pub employment_months: i64,
}

/// Fixed-order design vector in the trained model's coefficient order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FeatureVector::LEN]);

impl FeatureVector {
    pub const LEN: usize = 19;

    pub const INTERCEPT: usize = 0;
    pub const SEX_FEMALE: usize = 1;
    pub const TENURE_12_17: usize = 2;
    pub const TENURE_18_23: usize = 3;
    pub const TENURE_24_29: usize = 4;
    pub const TENURE_30_35: usize = 5;
    pub const TENURE_36_41: usize = 6;
    pub const TENURE_42_PLUS: usize = 7;
    pub const TENURE_6_11: usize = 8;
    pub const TENURE_RETIREE: usize = 9;
    pub const INCOME_BUSINESS_OWNER: usize = 10;
    pub const INCOME_RETIREE: usize = 11;
    pub const INCOME_PUBLIC_SERVANT: usize = 12;
    pub const AGE_ELDERLY: usize = 13;
    pub const AGE_YOUNG: usize = 14;
    pub const AGE_RETIREE: usize = 15;
    pub const HIGHER_ED: usize = 16;
    pub const HAS_VEHICLE: usize = 17;
    pub const HAS_PROPERTY: usize = 18;

    /// Slots 2..=9: the seven tenure brackets plus the retiree bracket.
    pub const TENURE_SLOTS: [usize; 8] = [
        Self::TENURE_12_17,
        Self::TENURE_18_23,
        Self::TENURE_24_29,
        Self::TENURE_30_35,
        Self::TENURE_36_41,
        Self::TENURE_42_PLUS,
        Self::TENURE_6_11,
        Self::TENURE_RETIREE,
    ];
    pub const INCOME_SLOTS: [usize; 3] = [
        Self::INCOME_BUSINESS_OWNER,
        Self::INCOME_RETIREE,
        Self::INCOME_PUBLIC_SERVANT,
    ];
    pub const AGE_SLOTS: [usize; 3] = [Self::AGE_ELDERLY, Self::AGE_YOUNG, Self::AGE_RETIREE];

    /// Term names as the fitted model reports them.
    pub const NAMES: [&'static str; FeatureVector::LEN] = [
        "Intercept",
        "sexo[T.F]",
        "faixa_tempo_emprego[T.12-17]",
        "faixa_tempo_emprego[T.18-23]",
        "faixa_tempo_emprego[T.24-29]",
        "faixa_tempo_emprego[T.30-35]",
        "faixa_tempo_emprego[T.36-41]",
        "faixa_tempo_emprego[T.42+]",
        "faixa_tempo_emprego[T.6-11]",
        "faixa_tempo_emprego[T.Pensionista]",
        "tipo_renda[T.Empresário]",
        "tipo_renda[T.Pensionista]",
        "tipo_renda[T.Servidor público]",
        "faixa_etaria[T.Idoso]",
        "faixa_etaria[T.Jovem]",
        "faixa_etaria[T.Pensionista]",
        "curso_superior",
        "posse_de_veiculo[T.True]",
        "posse_de_imovel[T.True]",
    ];

    pub fn zeroed() -> Self {
        Self([0.0; Self::LEN])
    }

    pub fn set(&mut self, slot: usize, on: bool) {
        self.0[slot] = if on { 1.0 } else { 0.0 };
    }

    pub fn get(&self, slot: usize) -> f64 {
        self.0[slot]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<[f64; FeatureVector::LEN]> for FeatureVector {
    fn from(values: [f64; FeatureVector::LEN]) -> Self {
        Self(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct PredictedIncome(pub f64);

impl PredictedIncome {
    pub const ZERO: PredictedIncome = PredictedIncome(0.0);

    pub fn value(&self) -> f64 {
        self.0
    }

    /// "R$ 1234,56": two decimals, every '.' becomes ',' and no grouping.
    pub fn display(&self) -> String {
        format!("R$ {:.2}", self.0).replace('.', ",")
    }
}

impl fmt::Display for PredictedIncome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Outcome of evaluating one form submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    Incomplete,
    Predicted(PredictedIncome),
}

impl Estimate {
    pub fn income(&self) -> PredictedIncome {
        match self {
            Estimate::Incomplete => PredictedIncome::ZERO,
            Estimate::Predicted(income) => *income,
        }
    }

    pub fn is_predicted(&self) -> bool {
        matches!(self, Estimate::Predicted(_))
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::Incomplete => f.write_str(PLACEHOLDER_DISPLAY),
            Estimate::Predicted(income) => income.fmt(f),
        }
    }
}

/// Choice lists and bounds derived once from the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceOptions {
    pub education: Vec<String>,
    pub income_types: Vec<String>,
    pub max_age: i64,
}
