// Censor — masks detected terms in the original, non-normalized text.
//
// Masking rule by term length (in characters):
//   <= 2  left as-is
//   3..=4 first character + mask for the rest          ("ass"   -> "a**")
//   >= 5  first + mask + last character                ("idiot" -> "i***t")
//
// The first character of each replacement follows the case of the occurrence
// it replaces. Occurrences are free substrings, found case-insensitively.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex_lite::{Captures, Regex};

/// Filler used for masked characters.
pub const MASK_CHAR: char = '*';

/// Masked form of a term, or `None` when the term is too short to mask.
pub fn mask_term(term: &str) -> Option<String> {
    let chars: Vec<char> = term.chars().collect();
    let len = chars.len();
    if len <= 2 {
        return None;
    }

    let mut masked = String::with_capacity(term.len());
    masked.push(chars[0]);
    if len <= 4 {
        masked.extend(std::iter::repeat(MASK_CHAR).take(len - 1));
    } else {
        masked.extend(std::iter::repeat(MASK_CHAR).take(len - 2));
        masked.push(chars[len - 1]);
    }
    Some(masked)
}

/// Order in which terms are applied: longest first, ties lexicographic.
///
/// Longer terms go first so a phrase is masked as a whole before any word
/// inside it is considered.
pub fn censor_order<'a>(terms: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    let mut ordered: Vec<&str> = terms.into_iter().map(|t| t.as_str()).collect();
    ordered.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    ordered.dedup();
    ordered
}

/// Replace every occurrence of every term in `text` with its masked form.
pub fn censor_text(text: &str, terms: &BTreeSet<String>) -> Result<String> {
    let mut censored = text.to_string();

    for term in censor_order(terms) {
        let Some(masked) = mask_term(term) else {
            continue;
        };

        let pattern = format!("(?i){}", regex_lite::escape(term));
        let regex = Regex::new(&pattern).context("Failed to build censor pattern")?;

        censored = regex
            .replace_all(&censored, |caps: &Captures| match_case(&caps[0], &masked))
            .into_owned();
    }

    Ok(censored)
}

/// Capitalize the masked form when the occurrence starts upper-case.
fn match_case(occurrence: &str, masked: &str) -> String {
    let starts_upper = occurrence.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return masked.to_string();
    }

    let mut chars = masked.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn mask_lengths() {
        assert_eq!(mask_term("hi"), None);
        assert_eq!(mask_term("ass").as_deref(), Some("a**"));
        assert_eq!(mask_term("hate").as_deref(), Some("h***"));
        assert_eq!(mask_term("idiot").as_deref(), Some("i***t"));
        assert_eq!(mask_term("stupid").as_deref(), Some("s****d"));
    }

    #[test]
    fn mask_counts_chars_not_bytes() {
        assert_eq!(mask_term("café!").as_deref(), Some("c***!"));
    }

    #[test]
    fn preserves_leading_capital() {
        let out = censor_text("Stupid idea, stupid plan", &terms(&["stupid"])).unwrap();
        assert_eq!(out, "S****d idea, s****d plan");
    }

    #[test]
    fn short_terms_untouched() {
        let out = censor_text("mc and bc", &terms(&["mc", "bc"])).unwrap();
        assert_eq!(out, "mc and bc");
    }

    #[test]
    fn longest_term_goes_first() {
        let set = terms(&["fuck", "fuck off", "ass"]);
        assert_eq!(censor_order(&set), vec!["fuck off", "fuck", "ass"]);

        let out = censor_text("fuck off", &terms(&["fuck", "fuck off"])).unwrap();
        assert_eq!(out, "f******f");
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let out = censor_text("a+b+c and abc", &terms(&["a+b+c"])).unwrap();
        assert_eq!(out, "a***c and abc");
    }

    #[test]
    fn censoring_is_idempotent() {
        let set = terms(&["hate", "stupid", "idiot"]);
        let once = censor_text("I hate you, you stupid idiot", &set).unwrap();
        let twice = censor_text(&once, &set).unwrap();
        assert_eq!(once, twice);
    }
}
