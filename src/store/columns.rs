use csv::StringRecord;

use crate::record::RawRecord;
use crate::store::StoreError;

// Accepted header names per field, Chinese first.
const SCHOOL: &[&str] = &["学校", "school"];
const PROGRAM: &[&str] = &["专业", "program"];
const CITY: &[&str] = &["城市", "city"];
const PROVINCE: &[&str] = &["省份", "province"];
const MIN_SCORE: &[&str] = &["最低分", "minScore", "min_score"];
const TIER_985: &[&str] = &["985", "tier985"];
const TIER_211: &[&str] = &["211", "tier211"];
const SUBJECT_REQUIREMENT: &[&str] = &["选科", "subjectRequirement", "subject_requirement"];

/// Position of every required column in a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    school: usize,
    program: usize,
    city: usize,
    province: usize,
    min_score: usize,
    tier985: usize,
    tier211: usize,
    subject_requirement: usize,
}

impl ColumnMap {
    pub fn from_headers(headers: &StringRecord) -> Result<Self, StoreError> {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();

        let find = |aliases: &'static [&'static str]| -> Result<usize, StoreError> {
            names
                .iter()
                .position(|name| aliases.contains(name))
                .ok_or(StoreError::MissingColumn(aliases[0]))
        };

        Ok(ColumnMap {
            school: find(SCHOOL)?,
            program: find(PROGRAM)?,
            city: find(CITY)?,
            province: find(PROVINCE)?,
            min_score: find(MIN_SCORE)?,
            tier985: find(TIER_985)?,
            tier211: find(TIER_211)?,
            subject_requirement: find(SUBJECT_REQUIREMENT)?,
        })
    }

    /// Borrow the mapped cells of a row. Absent cells read as empty.
    pub fn project<'r>(&self, row: &'r StringRecord) -> RawRecord<'r> {
        let cell = |idx: usize| row.get(idx).unwrap_or("");
        RawRecord {
            school: cell(self.school),
            program: cell(self.program),
            city: cell(self.city),
            province: cell(self.province),
            min_score: cell(self.min_score),
            tier985: cell(self.tier985),
            tier211: cell(self.tier211),
            subject_requirement: cell(self.subject_requirement),
        }
    }
}
