use crate::types::{RecommendationRow, ScoredRecord};

/// Display cap used when the caller does not choose one.
pub const DEFAULT_DISPLAY_LIMIT: usize = 100;

pub struct LimitResult {
    pub rows: Vec<RecommendationRow>,
    pub total_matches: usize,
    pub rows_returned: usize,
    pub excluded_by_limit: usize,
}

/// Keep the first `limit` ranked records. Must only be applied to a fully
/// ranked sequence.
pub fn apply_limit(ranked: &[ScoredRecord<'_>], limit: usize) -> LimitResult {
    let total_matches = ranked.len();
    let rows: Vec<RecommendationRow> = ranked
        .iter()
        .take(limit)
        .map(RecommendationRow::from)
        .collect();
    let rows_returned = rows.len();

    LimitResult {
        rows,
        total_matches,
        rows_returned,
        excluded_by_limit: total_matches - rows_returned,
    }
}
