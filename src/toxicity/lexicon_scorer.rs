// Lexicon-based toxicity scorer.
//
// score = min(sum of category weights over all matches / 3.0, 1.0)
//
// Every match counts, including overlapping ones: a phrase and a word inside
// it both add their weight.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use super::lexicon::Lexicon;
use super::matcher::{find_matches, normalize, Match};
use super::traits::{ScoreResult, ToxicityScorer};

/// Total weight that maps to a score of 1.0.
pub const MAX_WEIGHT: f64 = 3.0;

/// Scores text by matching it against a shared, read-only lexicon.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Arc<Lexicon>,
}

impl LexiconScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl ToxicityScorer for LexiconScorer {
    fn score_text(&self, text: &str) -> Result<ScoreResult> {
        let normalized = normalize(text);
        let matches = find_matches(&self.lexicon, &normalized);
        let result = aggregate(&matches);

        debug!(
            matches = matches.len(),
            categories = result.categories.len(),
            score = result.score,
            "Scored text against lexicon"
        );

        Ok(result)
    }
}

/// Fold a match list into a bounded score and deduplicated sets.
pub fn aggregate(matches: &[Match]) -> ScoreResult {
    let total_weight = matches
        .iter()
        .fold(0.0_f64, |acc, m| acc + m.category.weight());

    ScoreResult {
        score: (total_weight / MAX_WEIGHT).min(1.0),
        categories: matches.iter().map(|m| m.category).collect(),
        terms: matches.iter().map(|m| m.text.clone()).collect(),
    }
}
