// Word-frequency extractive summarizer.
//
// Each sentence is scored by the sum of the normalized frequencies of its
// qualifying words (alphanumeric, not a stop word). The top sentences are
// returned in their original order, joined by single spaces.
//
// Only sentences with at least one qualifying word are candidates. Ties in
// score go to the earlier sentence. With no candidates the summary is empty.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::Result;
use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::sentences::{split_sentences, tokenize_words};
use super::traits::Summarizer;

/// Read-only stop-word set, loaded once and shared.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// NLTK's English list (179 words), from the `stop-words` crate's `nltk`
    /// feature.
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_words(words)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Frequency-ranked extractive summarizer.
#[derive(Debug, Clone)]
pub struct FrequencySummarizer {
    stop_words: Arc<StopWords>,
    /// How many sentences a summary keeps
    pub max_sentences: usize,
}

impl FrequencySummarizer {
    pub fn new(stop_words: Arc<StopWords>, max_sentences: usize) -> Self {
        Self {
            stop_words,
            max_sentences,
        }
    }

    /// Lower-cased tokens that count towards frequencies.
    fn qualifying_tokens(&self, sentence: &str) -> Vec<String> {
        tokenize_words(sentence)
            .into_iter()
            .filter(|w| w.chars().all(char::is_alphanumeric) && !self.stop_words.contains(w))
            .collect()
    }
}

impl Summarizer for FrequencySummarizer {
    fn summarize(&self, text: &str) -> Result<Option<String>> {
        if self.max_sentences == 0 {
            anyhow::bail!("Summary length must be at least one sentence");
        }

        let sentences = split_sentences(text);
        if sentences.len() <= self.max_sentences {
            return Ok(Some(text.to_string()));
        }

        let tokenized: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.qualifying_tokens(s))
            .collect();
        let frequencies = normalized_frequencies(&tokenized);

        let mut scored: Vec<(usize, f64)> = tokenized
            .iter()
            .enumerate()
            .filter(|(_, tokens)| !tokens.is_empty())
            .map(|(i, tokens)| {
                let score = tokens
                    .iter()
                    .fold(0.0, |acc, w| acc + frequencies.get(w).copied().unwrap_or(0.0));
                (i, score)
            })
            .collect();

        if scored.is_empty() {
            debug!(
                sentences = sentences.len(),
                "No sentence has a rankable word, summary is empty"
            );
            return Ok(Some(String::new()));
        }

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let mut selected: Vec<usize> = scored
            .iter()
            .take(self.max_sentences)
            .map(|&(i, _)| i)
            .collect();
        selected.sort_unstable();

        debug!(
            sentences = sentences.len(),
            vocabulary = frequencies.len(),
            selected = selected.len(),
            "Ranked sentences for summary"
        );

        let summary = selected
            .into_iter()
            .map(|i| sentences[i])
            .collect::<Vec<_>>()
            .join(" ");
        Ok(Some(summary))
    }
}

/// Word counts across all sentences, divided by the highest count.
///
/// Every value lands in (0, 1]; an empty input yields an empty table.
pub fn normalized_frequencies(tokenized: &[Vec<String>]) -> HashMap<String, f64> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for word in tokenized.iter().flatten() {
        *counts.entry(word.clone()).or_default() += 1;
    }

    let max = counts.values().copied().max().unwrap_or(0);
    if max == 0 {
        return HashMap::new();
    }

    counts
        .into_iter()
        .map(|(word, count)| (word, f64::from(count) / f64::from(max)))
        .collect()
}
