pub mod classify;
pub mod filters;
pub mod limit;
pub mod ranking;

use crate::store::RecordStore;
use crate::types::{
	CandidateProfile, Recommendation, RecommendationSummary, ScoredRecord, TierThresholds,
};
pub use classify::{Classifier, GapClassifier};
pub use filters::{filter_records, RecordFilter};
pub use limit::{apply_limit, LimitResult, DEFAULT_DISPLAY_LIMIT};
pub use ranking::{rank, rank_with};

/// One-way pipeline: filter -> classify -> rank -> limit.
///
/// Holds no per-request state; every call recomputes from the store and
/// the profile it is given.
pub struct Recommender<C> {
	classifier: C,
}

impl Default for Recommender<GapClassifier> {
	fn default() -> Self {
		Self::new(GapClassifier::default())
	}
}

impl Recommender<GapClassifier> {
	pub fn with_thresholds(thresholds: TierThresholds) -> Self {
		Self::new(GapClassifier::with_thresholds(thresholds))
	}
}

impl<C> Recommender<C>
where
	C: Classifier,
{
	pub fn new(classifier: C) -> Self {
		Self { classifier }
	}

	/// Filter, classify and rank the full store for one candidate.
	/// The result is not truncated.
	pub fn ranked<'a>(
		&self,
		store: &'a RecordStore,
		profile: &CandidateProfile,
	) -> Vec<ScoredRecord<'a>> {
		// 1. Filtering Phase
		let filtered = RecordFilter::from_profile(profile).apply(store.records());

		// 2. Classification Phase
		let scored: Vec<ScoredRecord<'a>> = filtered
			.into_iter()
			.map(|record| self.classifier.classify(record, profile.score()))
			.collect();

		// 3. Ranking Phase (tier selection uses the classifier's ranges)
		rank_with(scored, profile.risk_preference(), self.classifier.thresholds())
	}

	pub fn recommend(
		&self,
		store: &RecordStore,
		profile: &CandidateProfile,
		limit: usize,
	) -> Recommendation {
		let ranked = self.ranked(store, profile);

		// 4. Display cap, strictly after ranking
		let LimitResult {
			rows,
			total_matches,
			rows_returned,
			excluded_by_limit,
		} = apply_limit(&ranked, limit);

		tracing::debug!(
			considered = store.len(),
			total_matches,
			rows_returned,
			"recommendation computed"
		);

		let summary = RecommendationSummary {
			score: profile.score(),
			subject_filter: profile.subject_filter().to_string(),
			location_filter: profile.location_filter().to_string(),
			risk_preference: profile.risk_preference(),
			dataset_version: store.info().version.as_str().to_string(),
			records_considered: store.len(),
			total_matches,
			rows_returned,
			excluded_by_limit,
			limit,
		};

		Recommendation { rows, summary }
	}
}
