// Sentence and word boundaries for the summarizer.
//
// Deterministic rules, no trained tokenizer:
// - a sentence ends at a run of `.`, `!` or `?` (plus any closing quotes or
//   brackets) that is followed by whitespace or the end of the text
// - a lone `.` after a known abbreviation or a single-letter initial does not
//   end a sentence
// - words are whitespace pieces with surrounding punctuation stripped

const TERMINATORS: [char; 3] = ['.', '!', '?'];

const CLOSERS: [char; 6] = ['"', '\'', ')', ']', '\u{201D}', '\u{2019}'];

/// Lower-cased abbreviations, without their final period.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "corp", "dept", "approx", "fig",
];

/// Number of whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into trimmed, non-empty sentences, in order.
///
/// Text without any terminator comes back as a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, ch) = chars[i];
        if !TERMINATORS.contains(&ch) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && TERMINATORS.contains(&chars[j].1) {
            j += 1;
        }
        let lone_period = ch == '.' && j == i + 1;
        while j < chars.len() && CLOSERS.contains(&chars[j].1) {
            j += 1;
        }

        let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
        let at_boundary = chars.get(j).map_or(true, |&(_, c)| c.is_whitespace());

        if at_boundary && !(lone_period && is_abbreviation(&text[start..pos])) {
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
        i = j;
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest);
    }
    sentences
}

/// Whether the word right before a period is an abbreviation or an initial.
fn is_abbreviation(before: &str) -> bool {
    let Some(word) = before.split_whitespace().last() else {
        return false;
    };
    let word = word
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    let mut chars = word.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        return first.is_alphabetic();
    }
    ABBREVIATIONS.contains(&word.as_str())
}

/// Lower-cased word tokens of a sentence.
///
/// Surrounding punctuation and a trailing possessive `'s` are removed.
/// Inner punctuation is kept, so "well-known" stays one token.
pub fn tokenize_words(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .filter_map(|piece| {
            let lower = piece.to_lowercase();
            let trimmed = lower.trim_matches(|c: char| !c.is_alphanumeric());
            let trimmed = trimmed
                .strip_suffix("'s")
                .or_else(|| trimmed.strip_suffix("\u{2019}s"))
                .unwrap_or(trimmed);
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminators() {
        let s = split_sentences("One here. Two there! Three? Four");
        assert_eq!(s, vec!["One here.", "Two there!", "Three?", "Four"]);
    }

    #[test]
    fn keeps_closing_quotes_with_sentence() {
        let s = split_sentences("He said \"stop.\" Then he left.");
        assert_eq!(s, vec!["He said \"stop.\"", "Then he left."]);
    }

    #[test]
    fn abbreviations_do_not_split() {
        let s = split_sentences("Dr. Smith met Mr. Jones. They talked, e.g. about rain.");
        assert_eq!(s, vec!["Dr. Smith met Mr. Jones.", "They talked, e.g. about rain."]);
    }

    #[test]
    fn initials_do_not_split() {
        let s = split_sentences("J. R. Tolkien wrote books. People read them.");
        assert_eq!(s, vec!["J. R. Tolkien wrote books.", "People read them."]);
    }

    #[test]
    fn decimals_and_ellipses() {
        let s = split_sentences("It costs 3.50 now... Cheap!");
        assert_eq!(s, vec!["It costs 3.50 now...", "Cheap!"]);
    }

    #[test]
    fn empty_and_blank_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n ").is_empty());
    }

    #[test]
    fn word_count_uses_whitespace() {
        assert_eq!(word_count("  a  b\tc\nd "), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn tokenize_strips_punctuation() {
        let tokens = tokenize_words("Hello, world! John's (well-known) 42.");
        assert_eq!(tokens, vec!["hello", "world", "john", "well-known", "42"]);
    }

    #[test]
    fn tokenize_drops_pure_punctuation() {
        assert_eq!(tokenize_words("-- ... !"), Vec::<String>::new());
    }
}
