use crate::domain::model::ReferenceOptions;
use crate::domain::ports::DatasetColumns;
use crate::utils::error::{IncomeError, Result};
use std::collections::BTreeSet;

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| IncomeError::DatasetError {
            message: format!("column '{}' not found", name),
        })
}

fn parse_age(value: &str, row: usize) -> Result<Option<i64>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(age) = value.parse::<i64>() {
        return Ok(Some(age));
    }
    match value.parse::<f64>() {
        Ok(age) if age.is_finite() => Ok(Some(age.trunc() as i64)),
        _ => Err(IncomeError::DatasetError {
            message: format!("row {}: age '{}' is not a number", row, value),
        }),
    }
}

/// Sorted unique labels; the empty "not selected" entry sorts first.
fn with_sentinel(labels: BTreeSet<String>) -> Vec<String> {
    std::iter::once(String::new())
        .chain(labels.into_iter().filter(|l| !l.is_empty()))
        .collect()
}

/// Reads only the three columns the form needs; everything else is ignored.
pub fn decode_reference(bytes: &[u8], columns: &DatasetColumns) -> Result<ReferenceOptions> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let education_idx = column_index(&headers, &columns.education)?;
    let income_idx = column_index(&headers, &columns.income_type)?;
    let age_idx = column_index(&headers, &columns.age)?;

    let mut education = BTreeSet::new();
    let mut income_types = BTreeSet::new();
    let mut max_age: Option<i64> = None;
    let mut rows = 0usize;

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        rows += 1;

        if let Some(value) = record.get(education_idx).map(str::trim) {
            education.insert(value.to_string());
        }
        if let Some(value) = record.get(income_idx).map(str::trim) {
            income_types.insert(value.to_string());
        }
        if let Some(age) = record.get(age_idx) {
            if let Some(age) = parse_age(age, i + 1)? {
                max_age = Some(max_age.map_or(age, |max| max.max(age)));
            }
        }
    }

    let max_age = max_age.ok_or_else(|| IncomeError::DatasetError {
        message: if rows == 0 {
            "dataset has no rows".to_string()
        } else {
            format!("column '{}' has no values", columns.age)
        },
    })?;

    tracing::debug!(
        "Reference dataset: {} rows, {} education options, {} income types, max age {}",
        rows,
        education.len(),
        income_types.len(),
        max_age
    );

    Ok(ReferenceOptions {
        education: with_sentinel(education),
        income_types: with_sentinel(income_types),
        max_age,
    })
}
