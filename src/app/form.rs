use crate::domain::model::{Education, IncomeType, RawInput, ReferenceOptions, Sex};
use crate::utils::error::Result;
use crate::utils::validation::{validate_choice, validate_range};
use serde::{Deserialize, Serialize};

pub const SEX_CHOICES: [&str; 3] = ["", "Feminino", "Masculino"];
pub const DEFAULT_AGE_MIN: i64 = 18;
pub const DEFAULT_EMPLOYMENT_MONTHS_MAX: i64 = 99;

/// Field values as the form hands them over. Empty strings and `None` mean
/// "not selected yet".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub sex: String,
    pub age: Option<i64>,
    pub education: String,
    pub income_type: String,
    pub employment_months: Option<i64>,
    pub has_vehicle: bool,
    pub has_property: bool,
}

impl FormInput {
    pub fn is_complete(&self) -> bool {
        !self.sex.trim().is_empty()
            && self.age.is_some_and(|age| age > 0)
            && !self.education.trim().is_empty()
            && !self.income_type.trim().is_empty()
            && self.employment_months.is_some_and(|months| months >= 0)
    }
}

/// Parses `value` and accepts it when it names the same category as one of
/// `choices`, so "Male" matches a "Masculino" option.
fn choose<T: PartialEq>(field: &str, value: &str, choices: &[String], parse: fn(&str) -> T) -> Result<T> {
    let parsed = parse(value);
    if choices
        .iter()
        .filter(|choice| !choice.is_empty())
        .any(|choice| parse(choice) == parsed)
    {
        return Ok(parsed);
    }
    validate_choice(field, value, choices)?;
    Ok(parsed)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Incomplete,
    Ready(RawInput),
}

/// The choices and bounds each form widget allows.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub sex: Vec<String>,
    pub education: Vec<String>,
    pub income_types: Vec<String>,
    pub age_min: i64,
    pub age_max: i64,
    pub employment_months_max: i64,
}

impl FormSchema {
    pub fn new(options: &ReferenceOptions, age_min: i64, employment_months_max: i64) -> Self {
        Self {
            sex: SEX_CHOICES.iter().map(|s| s.to_string()).collect(),
            education: options.education.clone(),
            income_types: options.income_types.clone(),
            age_min,
            age_max: options.max_age,
            employment_months_max,
        }
    }

    /// Presence first: an incomplete form is not an error. Only a complete
    /// form is checked against the widget bounds.
    pub fn accept(&self, form: &FormInput) -> Result<Submission> {
        if !form.is_complete() {
            return Ok(Submission::Incomplete);
        }

        let (Some(age), Some(employment_months)) = (form.age, form.employment_months) else {
            return Ok(Submission::Incomplete);
        };

        let sex = form.sex.trim();
        let education = form.education.trim();
        let income_type = form.income_type.trim();

        let sex = choose("sex", sex, &self.sex, Sex::from_label)?;
        validate_range("age", age, self.age_min, self.age_max)?;
        let education = choose("education", education, &self.education, Education::from_label)?;
        let income_type = choose(
            "income_type",
            income_type,
            &self.income_types,
            IncomeType::from_label,
        )?;
        validate_range(
            "employment_months",
            employment_months,
            0,
            self.employment_months_max,
        )?;

        Ok(Submission::Ready(RawInput {
            sex,
            has_vehicle: form.has_vehicle,
            has_property: form.has_property,
            education,
            income_type,
            age,
            employment_months,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::IncomeError;

    fn schema() -> FormSchema {
        let options = ReferenceOptions {
            education: vec!["".into(), "Pós graduação".into(), "Secundário".into()],
            income_types: vec!["".into(), "Empresário".into(), "Pensionista".into()],
            max_age: 68,
        };
        FormSchema::new(&options, DEFAULT_AGE_MIN, DEFAULT_EMPLOYMENT_MONTHS_MAX)
    }

    fn form() -> FormInput {
        FormInput {
            sex: "Masculino".into(),
            age: Some(33),
            education: "Pós graduação".into(),
            income_type: "Empresário".into(),
            employment_months: Some(0),
            has_vehicle: true,
            has_property: false,
        }
    }

    #[test]
    fn test_default_form_is_incomplete() {
        assert!(!FormInput::default().is_complete());
        assert_eq!(schema().accept(&FormInput::default()).unwrap(), Submission::Incomplete);
    }

    #[test]
    fn test_zero_employment_months_counts_as_present() {
        assert!(form().is_complete());
    }

    #[test]
    fn test_non_positive_age_is_incomplete_not_an_error() {
        let mut f = form();
        f.age = Some(0);
        assert_eq!(schema().accept(&f).unwrap(), Submission::Incomplete);
    }

    #[test]
    fn test_complete_form_becomes_typed_input() {
        let Submission::Ready(raw) = schema().accept(&form()).unwrap() else {
            panic!("expected a ready submission");
        };
        assert_eq!(raw.sex, Sex::Male);
        assert_eq!(raw.education, Education::Postgraduate);
        assert_eq!(raw.income_type, IncomeType::BusinessOwner);
        assert_eq!(raw.age, 33);
        assert_eq!(raw.employment_months, 0);
        assert!(raw.has_vehicle);
    }

    #[test]
    fn test_english_labels_match_dataset_options() {
        let options = ReferenceOptions {
            education: vec!["".into(), "Secundário".into(), "Superior completo".into()],
            income_types: vec!["".into(), "Assalariado".into(), "Servidor público".into()],
            max_age: 68,
        };
        let schema = FormSchema::new(&options, DEFAULT_AGE_MIN, DEFAULT_EMPLOYMENT_MONTHS_MAX);
        let f = FormInput {
            sex: "Male".into(),
            age: Some(35),
            education: "Completed Higher Ed".into(),
            income_type: "Public Servant".into(),
            employment_months: Some(20),
            has_vehicle: true,
            has_property: false,
        };

        let Submission::Ready(raw) = schema.accept(&f).unwrap() else {
            panic!("expected a ready submission");
        };
        assert_eq!(raw.sex, Sex::Male);
        assert_eq!(raw.education, Education::CompletedHigherEd);
        assert_eq!(raw.income_type, IncomeType::PublicServant);

        let mut short = f.clone();
        short.sex = "F".into();
        let Submission::Ready(raw) = schema.accept(&short).unwrap() else {
            panic!("expected a ready submission");
        };
        assert_eq!(raw.sex, Sex::Female);

        let mut absent = f;
        absent.income_type = "Business Owner".into();
        assert!(matches!(
            schema.accept(&absent),
            Err(IncomeError::FormValueError { .. })
        ));
    }

    #[test]
    fn test_widget_bounds_and_choices() {
        let schema = schema();

        let mut young = form();
        young.age = Some(17);
        assert!(matches!(schema.accept(&young), Err(IncomeError::FormValueError { .. })));

        let mut long_tenure = form();
        long_tenure.employment_months = Some(100);
        assert!(schema.accept(&long_tenure).is_err());

        let mut unknown = form();
        unknown.income_type = "Autônomo".into();
        assert!(schema.accept(&unknown).is_err());

        let mut sex = form();
        sex.sex = "X".into();
        assert!(schema.accept(&sex).is_err());
    }
}
