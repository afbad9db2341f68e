use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Default cap on the number of terms the word cloud shows.
pub const DEFAULT_MAX_WORDS: usize = 50;

/// Two or more word characters; apostrophes allowed after the first.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").expect("word pattern is valid"));

/// Common English words that carry no signal in a word cloud.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "amp", "an", "and",
    "any", "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did",
    "didn't", "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever",
    "few", "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "her", "here", "hers", "herself", "him", "himself", "his",
    "how", "however", "http", "https", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is",
    "isn't", "it", "its", "itself", "just", "let's", "like", "me", "more", "most", "mustn't", "my",
    "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "otherwise",
    "ought", "our", "ours", "ourselves", "out", "over", "own", "r", "same", "shall", "shan't",
    "she", "she'd", "she'll", "should", "shouldn't", "since", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "there's", "these", "they",
    "they'd", "they'll", "they're", "they've", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were",
    "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while", "who",
    "who's", "whom", "why", "why's", "with", "won't", "would", "wouldn't", "www", "you", "you'd",
    "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// One term of the word cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct WordWeight {
    pub word: String,
    pub count: usize,
    /// `count` relative to the most frequent term, in (0, 1].
    pub weight: f64,
}

/// Count terms in `corpus` and keep the `max_words` most frequent.
///
/// Ties are broken alphabetically so the result is deterministic.
pub fn word_frequencies(corpus: &str, max_words: usize) -> Vec<WordWeight> {
    if max_words == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for m in WORD_REGEX.find_iter(corpus) {
        if let Some(word) = normalize(m.as_str()) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(max_words);

    let top = ranked.first().map_or(1, |(_, c)| *c) as f64;
    ranked
        .into_iter()
        .map(|(word, count)| WordWeight {
            word,
            count,
            weight: count as f64 / top,
        })
        .collect()
}

/// Lowercase a raw token and drop it if it carries no signal.
fn normalize(token: &str) -> Option<String> {
    let mut word = token.to_lowercase();
    if word.ends_with("'s") {
        word.truncate(word.len() - 2);
    }
    let word = word.trim_matches('\'').to_string();

    if word.chars().count() < 2
        || word.chars().all(|c| c.is_ascii_digit())
        || STOPWORDS.contains(&word.as_str())
    {
        return None;
    }
    Some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_case_insensitively_and_drops_stopwords() {
        let words = word_frequencies("The flight was late. Flight delayed, the crew was great", 50);
        assert_eq!(words[0].word, "flight");
        assert_eq!(words[0].count, 2);
        assert_eq!(words[0].weight, 1.0);
        assert!(words.iter().all(|w| w.word != "the" && w.word != "was"));
    }

    #[test]
    fn strips_possessive_and_numbers() {
        let words = word_frequencies("Delta's crew 2015 Delta 30", 50);
        let delta = words.iter().find(|w| w.word == "delta").unwrap();
        assert_eq!(delta.count, 2);
        assert!(words.iter().all(|w| w.word != "2015" && w.word != "30"));
    }

    #[test]
    fn caps_at_max_words_with_alphabetical_ties() {
        let words = word_frequencies("gate seat bag gate seat gate", 2);
        let names: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(names, vec!["gate", "seat"]);
        assert!((words[1].weight - 2.0 / 3.0).abs() < 1e-12);

        let tied = word_frequencies("zulu alpha mike", 3);
        let names: Vec<&str> = tied.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mike", "zulu"]);
    }

    #[test]
    fn empty_input_gives_no_words() {
        assert!(word_frequencies("", 50).is_empty());
        assert!(word_frequencies("the and of", 50).is_empty());
        assert!(word_frequencies("great flight", 0).is_empty());
    }
}
