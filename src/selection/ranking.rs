use crate::types::{RiskPreference, ScoredRecord, TierThresholds};

/// Tier-filter then order by closeness of match.
///
/// The tier is re-derived from `gap` rather than trusted from the record,
/// so ranking never depends on labels. The sort is stable: equal distances
/// keep their incoming order (reference-data order after filtering).
pub fn rank_with<'a>(
    scored: Vec<ScoredRecord<'a>>,
    preference: RiskPreference,
    thresholds: &TierThresholds,
) -> Vec<ScoredRecord<'a>> {
    let mut ranked: Vec<ScoredRecord<'a>> = match preference.tier() {
        None => scored,
        Some(wanted) => scored
            .into_iter()
            .filter(|s| thresholds.tier_for(s.gap) == wanted)
            .collect(),
    };

    ranked.sort_by_key(|s| s.match_distance);

    debug_assert!(ranked
        .windows(2)
        .all(|w| w[0].match_distance <= w[1].match_distance));

    ranked
}

/// [`rank_with`] under the default thresholds.
pub fn rank<'a>(scored: Vec<ScoredRecord<'a>>, preference: RiskPreference) -> Vec<ScoredRecord<'a>> {
    rank_with(scored, preference, &TierThresholds::default())
}
