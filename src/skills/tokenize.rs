//! Tokenization and n-gram candidate generation for skill matching.

use std::collections::HashSet;

/// English stop words dropped before n-gram generation.
///
/// A compact list covering determiners, pronouns, prepositions,
/// conjunctions and auxiliary verbs; matched case-insensitively.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
];

fn is_stop_word(token: &str) -> bool {
    let lowered = token.to_lowercase();
    STOP_WORDS.contains(&lowered.as_str())
}

/// Split text into tokens, stripping surrounding punctuation and dropping
/// stop words and empty remainders. Token case is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty() && !is_stop_word(w))
        .map(|w| w.to_string())
        .collect()
}

/// All contiguous token n-grams for n in `1..=max_n`, joined with single
/// spaces and deduplicated preserving first-seen order.
pub fn ngrams(tokens: &[String], max_n: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for n in 1..=max_n {
        for window in tokens.windows(n) {
            let gram = window.join(" ");
            if seen.insert(gram.clone()) {
                out.push(gram);
            }
        }
    }
    out
}
