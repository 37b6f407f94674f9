use crate::record::AdmissionRecord;
use crate::types::{ScoredRecord, TierThresholds};

pub trait Classifier {
    fn classify<'a>(&self, record: &'a AdmissionRecord, candidate_score: i32) -> ScoredRecord<'a>;

    /// Gap ranges behind every tier this classifier assigns. Tier selection
    /// during ranking must use the same ranges.
    fn thresholds(&self) -> &TierThresholds;
}

/// v0: fixed-threshold gap classifier.
///
/// gap := candidate_score - min_score, computed once per (record, score).
#[derive(Debug, Clone, Copy, Default)]
pub struct GapClassifier {
    thresholds: TierThresholds,
}

impl GapClassifier {
    pub fn with_thresholds(thresholds: TierThresholds) -> Self {
        Self { thresholds }
    }
}

impl Classifier for GapClassifier {
    fn classify<'a>(&self, record: &'a AdmissionRecord, candidate_score: i32) -> ScoredRecord<'a> {
        let gap = i64::from(candidate_score) - i64::from(record.min_score);
        ScoredRecord {
            record,
            gap,
            tier: self.thresholds.tier_for(gap),
            match_distance: gap.unsigned_abs(),
        }
    }

    fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }
}
