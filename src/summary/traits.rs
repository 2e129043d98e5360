// Summarizer trait — swap-ready abstraction.
//
// Like ToxicityScorer, this lets the ranking strategy change without touching
// verdict assembly. The default implementation ranks sentences by normalized
// word frequency.

use anyhow::Result;
use tracing::warn;

/// Trait for producing an extractive summary of a text.
pub trait Summarizer: Send + Sync {
    /// Summarize `text`. `Ok(None)` means nothing worth summarizing was found.
    fn summarize(&self, text: &str) -> Result<Option<String>>;
}

/// What came out of a summarization attempt.
///
/// Failure is an expected branch, not an error for the caller: the verdict is
/// still produced, just without a summary.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    /// A summary was produced.
    Summary(String),
    /// The input did not qualify, or no sentence could be ranked.
    Skipped,
    /// The summarizer failed; carries the error message.
    Failed(String),
}

impl SummaryOutcome {
    /// Fold a summarizer result into an outcome, logging failures.
    pub fn from_result(result: Result<Option<String>>) -> Self {
        match result {
            Ok(Some(summary)) => SummaryOutcome::Summary(summary),
            Ok(None) => SummaryOutcome::Skipped,
            Err(e) => {
                warn!(error = %e, "Error generating summary");
                SummaryOutcome::Failed(e.to_string())
            }
        }
    }

    /// The summary text, if one was produced.
    pub fn into_summary(self) -> Option<String> {
        match self {
            SummaryOutcome::Summary(summary) => Some(summary),
            SummaryOutcome::Skipped | SummaryOutcome::Failed(_) => None,
        }
    }
}
