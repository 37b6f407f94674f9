use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::tier::Tier;

pub const MIN_EXAM_SCORE: i32 = 0;
pub const MAX_EXAM_SCORE: i32 = 750;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("Score {0} is outside [0, 750]")]
    ScoreOutOfRange(i64),

    #[error("Unknown risk preference: {0:?}")]
    UnknownRiskPreference(String),
}

/// Which tier of results the candidate wants to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskPreference {
    #[default]
    All,
    Safe,
    Stable,
    Reach,
}

impl RiskPreference {
    /// The tier this preference keeps, or `None` for everything.
    pub fn tier(self) -> Option<Tier> {
        match self {
            RiskPreference::All => None,
            RiskPreference::Safe => Some(Tier::Safe),
            RiskPreference::Stable => Some(Tier::Stable),
            RiskPreference::Reach => Some(Tier::Reach),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskPreference::All => "all",
            RiskPreference::Safe => "safe",
            RiskPreference::Stable => "stable",
            RiskPreference::Reach => "reach",
        }
    }
}

impl fmt::Display for RiskPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskPreference {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "全部" => Ok(RiskPreference::All),
            "safe" | "保底" => Ok(RiskPreference::Safe),
            "stable" | "稳妥" => Ok(RiskPreference::Stable),
            "reach" | "冲刺" => Ok(RiskPreference::Reach),
            _ => Err(ProfileError::UnknownRiskPreference(s.to_string())),
        }
    }
}

/// A single candidate submission.
///
/// Filters are trimmed; a whitespace-only filter is the same as no filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateProfile {
    score: i32,
    subject_filter: String,
    location_filter: String,
    risk_preference: RiskPreference,
}

impl CandidateProfile {
    pub fn new(
        score: i64,
        subject_filter: impl Into<String>,
        location_filter: impl Into<String>,
        risk_preference: RiskPreference,
    ) -> Result<Self, ProfileError> {
        if !(MIN_EXAM_SCORE as i64..=MAX_EXAM_SCORE as i64).contains(&score) {
            return Err(ProfileError::ScoreOutOfRange(score));
        }

        Ok(Self {
            score: score as i32,
            subject_filter: subject_filter.into().trim().to_string(),
            location_filter: location_filter.into().trim().to_string(),
            risk_preference,
        })
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn subject_filter(&self) -> &str {
        &self.subject_filter
    }

    pub fn location_filter(&self) -> &str {
        &self.location_filter
    }

    pub fn risk_preference(&self) -> RiskPreference {
        self.risk_preference
    }
}
