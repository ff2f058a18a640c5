use crate::app::form::{FormInput, FormSchema};
use crate::core::engine::PredictionEngine;
use crate::domain::model::Estimate;
use crate::domain::ports::RegressionModel;
use crate::utils::error::{IncomeError, Result};
use std::io::{BufRead, Write};

fn selectable(choices: &[String]) -> Vec<&str> {
    choices
        .iter()
        .map(String::as_str)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Prints every field's accepted values, numbered the way the session reads them.
pub fn write_options<W: Write>(schema: &FormSchema, writer: &mut W) -> Result<()> {
    for (field, choices) in [
        ("sex", &schema.sex),
        ("education", &schema.education),
        ("income type", &schema.income_types),
    ] {
        writeln!(writer, "{}:", field)?;
        for (i, choice) in selectable(choices).iter().enumerate() {
            writeln!(writer, "  {}) {}", i + 1, choice)?;
        }
    }
    writeln!(writer, "age: {} to {}", schema.age_min, schema.age_max)?;
    writeln!(
        writer,
        "employment months: 0 to {}",
        schema.employment_months_max
    )?;
    Ok(())
}

fn read_field<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<String> {
    write!(writer, "{}: ", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// A 1-based index picks from the list; anything else is taken as typed.
fn pick(answer: String, choices: &[String]) -> String {
    let options = selectable(choices);
    match answer.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].to_string(),
        _ => answer,
    }
}

fn number(field: &str, answer: &str) -> Result<Option<i64>> {
    if answer.is_empty() {
        return Ok(None);
    }
    answer
        .parse::<i64>()
        .map(Some)
        .map_err(|_| IncomeError::FormValueError {
            field: field.to_string(),
            value: answer.to_string(),
            reason: "Expected a whole number".to_string(),
        })
}

fn yes(answer: &str) -> bool {
    matches!(
        answer.to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim" | "true" | "1"
    )
}

/// Reads one line per field (blank leaves it unselected) and writes the estimate.
pub fn run_session<M, R, W>(engine: &PredictionEngine<M>, reader: &mut R, writer: &mut W) -> Result<Estimate>
where
    M: RegressionModel,
    R: BufRead,
    W: Write,
{
    let schema = engine.schema();
    write_options(schema, writer)?;
    writeln!(writer)?;

    let sex = read_field(reader, writer, "Sex")?;
    let age = read_field(reader, writer, "Age")?;
    let education = read_field(reader, writer, "Education")?;
    let income_type = read_field(reader, writer, "Income type")?;
    let employment_months = read_field(reader, writer, "Employment months")?;
    let vehicle = read_field(reader, writer, "Owns a vehicle? [y/N]")?;
    let property = read_field(reader, writer, "Owns property? [y/N]")?;

    let form = FormInput {
        sex: pick(sex, &schema.sex),
        age: number("age", &age)?,
        education: pick(education, &schema.education),
        income_type: pick(income_type, &schema.income_types),
        employment_months: number("employment_months", &employment_months)?,
        has_vehicle: yes(&vehicle),
        has_property: yes(&property),
    };
    tracing::debug!("Session form: {:?}", form);

    let estimate = engine.evaluate(&form)?;
    if !estimate.is_predicted() {
        writeln!(writer, "Fill in every field to get an estimate.")?;
    }
    writeln!(writer, "Estimated income: {}", estimate)?;
    Ok(estimate)
}
