use std::sync::Arc;

use serde::Serialize;

use crate::record::AdmissionRecord;
use crate::store::StoreError;
use crate::types::candidate::{ProfileError, RiskPreference};
use crate::types::tier::Tier;

/// Internal: a record that has been classified but not yet ranked.
/// Holds a reference to the original record to avoid cloning strings
/// before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredRecord<'a> {
    pub record: &'a AdmissionRecord,

    /// `candidate score - min_score`; negative when below last year's cutoff.
    pub gap: i64,
    pub tier: Tier,
    /// `|gap|`. Ordering key only.
    pub match_distance: u64,
}

/// Column headings of a displayed row, in display order.
pub const DISPLAY_COLUMNS: [&str; 9] = [
    "学校", "专业", "最低分", "分差", "录取概率", "城市", "985", "211", "选科",
];

/// One displayed row. Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct RecommendationRow {
    pub school: String,
    pub program: String,
    pub min_score: u32,
    pub gap: i64,
    pub tier: Tier,
    pub tier_label: String,
    pub city: String,
    pub province: String,
    pub tier985: bool,
    pub tier211: bool,
    pub subject_requirement: String,
}

impl From<&ScoredRecord<'_>> for RecommendationRow {
    fn from(scored: &ScoredRecord<'_>) -> Self {
        let record = scored.record;
        Self {
            school: record.school.clone(),
            program: record.program.clone(),
            min_score: record.min_score,
            gap: scored.gap,
            tier: scored.tier,
            tier_label: scored.tier.label().to_string(),
            city: record.city.clone(),
            province: record.province.clone(),
            tier985: record.tier985,
            tier211: record.tier211,
            subject_requirement: record.subject_requirement.clone(),
        }
    }
}

/// Inputs and counts describing one recommendation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct RecommendationSummary {
    pub score: i32,
    pub subject_filter: String,
    pub location_filter: String,
    pub risk_preference: RiskPreference,
    pub dataset_version: String,

    pub records_considered: usize,
    /// Matches after filtering and tier selection, before the display cap.
    pub total_matches: usize,
    pub rows_returned: usize,
    pub excluded_by_limit: usize,
    pub limit: usize,
}

/// The final result of a recommendation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct Recommendation {
    pub rows: Vec<RecommendationRow>,
    pub summary: RecommendationSummary,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecommendError {
    /// The dataset failed to load. Shared because a session reports the
    /// same load failure on every submission.
    #[error("Reference dataset unavailable: {0}")]
    Unavailable(#[source] Arc<StoreError>),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ProfileError),
}

impl From<StoreError> for RecommendError {
    fn from(err: StoreError) -> Self {
        RecommendError::Unavailable(Arc::new(err))
    }
}
