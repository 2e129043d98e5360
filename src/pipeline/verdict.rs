// Verdict assembly — scoring, censoring and summarization in one pass.
//
// Flow for a single text:
//   score (normalize + match) -> toxic iff score > 0.3
//   -> censor the ORIGINAL text when toxic, otherwise keep it verbatim
//   -> summarize when the text has more than `summary_min_words` words,
//      censoring the summary again when toxic
//   -> assemble the Verdict
//
// Scoring and censoring failures abort the request. Summarization failures
// only drop the summary.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::censor::censor_text;
use crate::summary::frequency::{FrequencySummarizer, StopWords};
use crate::summary::sentences::word_count;
use crate::summary::traits::{Summarizer, SummaryOutcome};
use crate::toxicity::lexicon::{Category, Lexicon};
use crate::toxicity::lexicon_scorer::LexiconScorer;
use crate::toxicity::traits::{ScoreResult, ToxicityScorer};

pub const TOXIC_MESSAGE: &str =
    "This comment may contain toxic content and could be harmful or offensive.";
pub const PATTERNS_NOTE: &str = " The system detected potentially problematic language patterns.";
pub const NON_TOXIC_MESSAGE: &str = "This comment appears to be non-toxic and appropriate.";

/// The single error message surfaced for any analysis fault.
pub const ANALYSIS_FAILED: &str = "Failed to analyze text for toxicity";

/// Final response object for one analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_toxic: bool,
    /// Bounded score, 0.0 to 1.0
    pub score: f64,
    pub message: String,
    /// Categories that matched; always empty when not toxic
    pub detected_patterns: Vec<Category>,
    pub censored_text: String,
    /// Extractive summary for long inputs, `null` otherwise
    pub summary: Option<String>,
}

/// Verdict plus the intermediate results it was built from.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub verdict: Verdict,
    pub scoring: ScoreResult,
    pub summary: SummaryOutcome,
}

/// Tunables for verdict assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerSettings {
    /// Summaries are produced only above this many words (default 50)
    pub summary_min_words: usize,
    /// Sentences kept in a summary (default 3)
    pub summary_sentences: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            summary_min_words: 50,
            summary_sentences: 3,
        }
    }
}

/// Runs the full analysis pipeline.
///
/// Holds only read-only shared state, so one instance can serve any number
/// of concurrent requests. Cloning is cheap.
#[derive(Clone)]
pub struct Analyzer {
    scorer: Arc<dyn ToxicityScorer>,
    summarizer: Arc<dyn Summarizer>,
    settings: AnalyzerSettings,
}

impl Analyzer {
    /// Build the default analyzer: built-in lexicon and English stop words,
    /// each loaded exactly once.
    pub fn new(settings: AnalyzerSettings) -> Result<Self> {
        let lexicon = Arc::new(Lexicon::builtin()?);
        let stop_words = Arc::new(StopWords::english());

        info!(
            rules = lexicon.rules().len(),
            stop_words = stop_words.len(),
            "Loaded analysis resources"
        );

        Ok(Self::with_components(
            Arc::new(LexiconScorer::new(lexicon)),
            Arc::new(FrequencySummarizer::new(
                stop_words,
                settings.summary_sentences,
            )),
            settings,
        ))
    }

    /// Assemble an analyzer from explicit parts.
    pub fn with_components(
        scorer: Arc<dyn ToxicityScorer>,
        summarizer: Arc<dyn Summarizer>,
        settings: AnalyzerSettings,
    ) -> Self {
        Self {
            scorer,
            summarizer,
            settings,
        }
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Analyze a text and return its verdict.
    pub fn analyze(&self, text: &str) -> Result<Verdict> {
        self.assess(text).map(|a| a.verdict)
    }

    /// Analyze a text, keeping the scoring and summary intermediates.
    pub fn assess(&self, text: &str) -> Result<Assessment> {
        self.run(text).context(ANALYSIS_FAILED)
    }

    fn run(&self, text: &str) -> Result<Assessment> {
        let scoring = self.scorer.score_text(text)?;
        let is_toxic = scoring.is_toxic();

        let censored_text = if is_toxic {
            censor_text(text, &scoring.terms)?
        } else {
            text.to_string()
        };

        let words = word_count(text);
        let summary = if words > self.settings.summary_min_words {
            self.summarize(text, is_toxic, &scoring)
        } else {
            SummaryOutcome::Skipped
        };
        debug!(words, outcome = summary_kind(&summary), "Summary stage finished");

        let mut message = if is_toxic {
            TOXIC_MESSAGE.to_string()
        } else {
            NON_TOXIC_MESSAGE.to_string()
        };
        if is_toxic && !scoring.categories.is_empty() {
            message.push_str(PATTERNS_NOTE);
        }

        let detected_patterns: Vec<Category> = if is_toxic {
            scoring.categories.iter().copied().collect()
        } else {
            Vec::new()
        };

        info!(
            is_toxic,
            score = scoring.score,
            categories = detected_patterns.len(),
            words,
            summarized = matches!(summary, SummaryOutcome::Summary(_)),
            "Analyzed text"
        );

        let verdict = Verdict {
            is_toxic,
            score: scoring.score,
            message,
            detected_patterns,
            censored_text,
            summary: summary.clone().into_summary(),
        };

        Ok(Assessment {
            verdict,
            scoring,
            summary,
        })
    }

    /// Summarize the original text and censor the result when toxic.
    /// Any failure turns into `SummaryOutcome::Failed`.
    fn summarize(&self, text: &str, is_toxic: bool, scoring: &ScoreResult) -> SummaryOutcome {
        let result = self.summarizer.summarize(text).and_then(|summary| match summary {
            Some(summary) if is_toxic => censor_text(&summary, &scoring.terms).map(Some),
            other => Ok(other),
        });
        SummaryOutcome::from_result(result)
    }
}

fn summary_kind(outcome: &SummaryOutcome) -> &'static str {
    match outcome {
        SummaryOutcome::Summary(_) => "summary",
        SummaryOutcome::Skipped => "skipped",
        SummaryOutcome::Failed(_) => "failed",
    }
}
