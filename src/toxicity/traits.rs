// Toxicity scorer trait — the seam between scoring and verdict assembly.
//
// The lexicon scorer is the only implementation today. Anything that can
// turn raw text into a bounded score plus the categories and terms that
// produced it can stand in for it without touching the pipeline.

use std::collections::BTreeSet;

use anyhow::Result;

use super::lexicon::Category;

/// Score text above this value is reported as toxic.
pub const TOXIC_THRESHOLD: f64 = 0.3;

/// The result of scoring a single piece of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreResult {
    /// Overall score from 0.0 (benign) to 1.0 (very toxic)
    pub score: f64,
    /// Distinct categories that matched, in category order
    pub categories: BTreeSet<Category>,
    /// Distinct matched substrings, sorted
    pub terms: BTreeSet<String>,
}

impl ScoreResult {
    /// Strictly above the threshold; a score of exactly 0.3 is not toxic.
    pub fn is_toxic(&self) -> bool {
        self.score > TOXIC_THRESHOLD
    }
}

/// Trait for scoring raw text. Implementations must be shareable across
/// concurrent requests and hold no per-call state.
pub trait ToxicityScorer: Send + Sync {
    /// Score a single raw (non-normalized) text.
    fn score_text(&self, text: &str) -> Result<ScoreResult>;
}
