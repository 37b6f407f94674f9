use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest gap classified as [`Tier::Safe`].
pub const SAFE_MIN_GAP: i64 = 15;
/// Lowest gap classified as [`Tier::Stable`].
pub const STABLE_MIN_GAP: i64 = 5;
/// Lowest gap classified as [`Tier::Reach`]. Anything below is [`Tier::Risk`].
pub const REACH_MIN_GAP: i64 = -10;

/// Admission-risk bucket derived from a score gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Safe,
    Stable,
    Reach,
    Risk,
}

impl Tier {
    /// Tier for a gap under the default thresholds.
    pub fn from_gap(gap: i64) -> Self {
        TierThresholds::default().tier_for(gap)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Safe => "🟢 保底",
            Tier::Stable => "🔵 稳妥",
            Tier::Reach => "🟡 冲刺",
            Tier::Risk => "🔴 风险",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds (inclusive) of each tier bracket.
///
/// Brackets are checked top-down and the first match wins, so every integer
/// gap maps to exactly one tier as long as `safe > stable > reach`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub safe: i64,
    pub stable: i64,
    pub reach: i64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            safe: SAFE_MIN_GAP,
            stable: STABLE_MIN_GAP,
            reach: REACH_MIN_GAP,
        }
    }
}

impl TierThresholds {
    pub fn tier_for(&self, gap: i64) -> Tier {
        debug_assert!(self.safe > self.stable && self.stable > self.reach);
        if gap >= self.safe {
            Tier::Safe
        } else if gap >= self.stable {
            Tier::Stable
        } else if gap >= self.reach {
            Tier::Reach
        } else {
            Tier::Risk
        }
    }
}
