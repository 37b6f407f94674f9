use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("School name must not be empty")]
    EmptySchool,
    #[error("Minimum score is not an integer: {0:?}")]
    InvalidMinScore(String),
    #[error("Minimum score must be non-negative: {0}")]
    NegativeMinScore(i64),
    #[error("Unrecognised {column} flag: {value:?}")]
    InvalidFlag { column: &'static str, value: String },
}

/// One row of historical admission data.
///
/// Immutable once constructed; every string field is present (possibly
/// empty) and `min_score` is non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionRecord {
    pub school: String,
    pub program: String,
    pub city: String,
    pub province: String,
    pub min_score: u32,
    pub tier985: bool,
    pub tier211: bool,
    pub subject_requirement: String,
}

/// Raw cell values of one row, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawRecord<'a> {
    pub school: &'a str,
    pub program: &'a str,
    pub city: &'a str,
    pub province: &'a str,
    pub min_score: &'a str,
    pub tier985: &'a str,
    pub tier211: &'a str,
    pub subject_requirement: &'a str,
}

impl AdmissionRecord {
    /// Validate raw cells into a record.
    ///
    /// This is the only path from tabular input to a record. Rows missing a
    /// school name or carrying an unusable minimum score are rejected here
    /// instead of flowing downstream.
    pub fn parse(raw: RawRecord<'_>) -> Result<Self, RecordError> {
        let school = raw.school.trim();
        if school.is_empty() {
            return Err(RecordError::EmptySchool);
        }

        Ok(AdmissionRecord {
            school: school.to_string(),
            program: raw.program.trim().to_string(),
            city: raw.city.trim().to_string(),
            province: raw.province.trim().to_string(),
            min_score: parse_min_score(raw.min_score)?,
            tier985: parse_flag("985", raw.tier985)?,
            tier211: parse_flag("211", raw.tier211)?,
            subject_requirement: raw.subject_requirement.trim().to_string(),
        })
    }
}

/// Integers, or decimals with no fractional part ("520.0" as exported by
/// spreadsheet tools).
fn parse_min_score(cell: &str) -> Result<u32, RecordError> {
    let cell = cell.trim();
    let value = match cell.parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            let float = cell
                .parse::<f64>()
                .map_err(|_| RecordError::InvalidMinScore(cell.to_string()))?;
            if !float.is_finite() || float.fract() != 0.0 {
                return Err(RecordError::InvalidMinScore(cell.to_string()));
            }
            float as i64
        }
    };

    if value < 0 {
        return Err(RecordError::NegativeMinScore(value));
    }
    u32::try_from(value).map_err(|_| RecordError::InvalidMinScore(cell.to_string()))
}

fn parse_flag(column: &'static str, cell: &str) -> Result<bool, RecordError> {
    let cell = cell.trim();
    if cell == column {
        return Ok(true);
    }
    match cell.to_lowercase().as_str() {
        "" | "0" | "false" | "no" | "n" | "否" | "×" | "-" => Ok(false),
        "1" | "true" | "yes" | "y" | "是" | "√" => Ok(true),
        _ => Err(RecordError::InvalidFlag {
            column,
            value: cell.to_string(),
        }),
    }
}
