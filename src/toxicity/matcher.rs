// Pattern matcher — scans normalized text against every lexicon rule.

use super::lexicon::{Category, Lexicon};

/// One rule hit in the scanned text.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub category: Category,
    /// The matched substring, verbatim from the scanned text.
    pub text: String,
    /// Byte offset of the match start in the scanned text.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
}

/// Lower-case and trim the input. Scoring always runs on this form.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Return every match of every rule, in rule evaluation order.
///
/// Matches are non-overlapping within a single rule but may overlap across
/// rules: a phrase and a word inside it both appear. No matches yields an
/// empty vector.
pub fn find_matches(lexicon: &Lexicon, normalized: &str) -> Vec<Match> {
    let mut matches = Vec::new();
    for rule in lexicon.rules() {
        for m in rule.regex.find_iter(normalized) {
            matches.push(Match {
                category: rule.category,
                text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            });
        }
    }
    matches
}
