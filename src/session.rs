use std::path::Path;
use std::sync::Arc;

use crate::selection::{GapClassifier, Recommender, DEFAULT_DISPLAY_LIMIT};
use crate::store::{RecordStore, StoreError};
use crate::types::{CandidateProfile, Recommendation, RecommendError, RiskPreference};

/// Raw user input for one submission, before validation.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub score: i64,
    pub subject_filter: String,
    pub location_filter: String,
    pub risk_preference: String,
}

impl Submission {
    pub fn validate(&self) -> Result<CandidateProfile, RecommendError> {
        let preference = if self.risk_preference.trim().is_empty() {
            RiskPreference::All
        } else {
            self.risk_preference.parse::<RiskPreference>()?
        };

        Ok(CandidateProfile::new(
            self.score,
            self.subject_filter.as_str(),
            self.location_filter.as_str(),
            preference,
        )?)
    }
}

/// The reference dataset, loaded once, plus the pipeline that reads it.
///
/// A failed load is kept rather than retried: every later submission
/// reports the same unavailability.
pub struct Session {
    dataset: Result<RecordStore, Arc<StoreError>>,
    recommender: Recommender<GapClassifier>,
    display_limit: usize,
}

impl Session {
    pub fn open(path: &Path) -> Self {
        let dataset = RecordStore::load(path);
        if let Err(err) = &dataset {
            tracing::warn!(path = %path.display(), error = %err, "reference dataset unavailable");
        }
        Self::with_dataset(dataset)
    }

    pub fn with_dataset(dataset: Result<RecordStore, StoreError>) -> Self {
        Self {
            dataset: dataset.map_err(Arc::new),
            recommender: Recommender::default(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }

    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    pub fn store(&self) -> Result<&RecordStore, RecommendError> {
        self.dataset
            .as_ref()
            .map_err(|err| RecommendError::Unavailable(Arc::clone(err)))
    }

    pub fn is_available(&self) -> bool {
        self.dataset.is_ok()
    }

    /// Validate, then recompute from scratch. Nothing is cached between
    /// submissions.
    pub fn submit(&self, submission: &Submission) -> Result<Recommendation, RecommendError> {
        let store = self.store()?;
        let profile = submission.validate()?;
        Ok(self.recommend(store, &profile))
    }

    pub fn submit_profile(&self, profile: &CandidateProfile) -> Result<Recommendation, RecommendError> {
        let store = self.store()?;
        Ok(self.recommend(store, profile))
    }

    fn recommend(&self, store: &RecordStore, profile: &CandidateProfile) -> Recommendation {
        let recommendation = self.recommender.recommend(store, profile, self.display_limit);
        tracing::info!(
            score = profile.score(),
            risk = %profile.risk_preference(),
            total_matches = recommendation.summary.total_matches,
            "submission ranked"
        );
        recommendation
    }
}
