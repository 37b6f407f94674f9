pub mod candidate;
pub mod identifiers;
pub mod recommendation;
pub mod tier;

pub use candidate::{CandidateProfile, ProfileError, RiskPreference, MAX_EXAM_SCORE, MIN_EXAM_SCORE};
pub use identifiers::DatasetVersion;
pub use recommendation::{
    Recommendation, RecommendError, RecommendationRow, RecommendationSummary, ScoredRecord,
    DISPLAY_COLUMNS,
};
pub use tier::{Tier, TierThresholds, REACH_MIN_GAP, SAFE_MIN_GAP, STABLE_MIN_GAP};
