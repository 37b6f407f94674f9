//! Deterministic admission-score recommendation engine.
//!
//! `admission-core` loads a historical admission-score table, filters it by
//! a candidate's free-text criteria, classifies every row into a risk tier
//! by score gap, and ranks the result by closeness of match. All ranking
//! operations are deterministic: identical inputs always produce identical
//! outputs, row for row.
//!
//! The `advisor` module builds the hand-off to an external text-generation
//! service; the ranking pipeline never depends on it.

pub mod advisor;
pub mod config;
pub mod logging;
pub mod record;
pub mod selection;
pub mod session;
pub mod store;
pub mod types;
pub mod view;
