use std::collections::HashMap;

/// Extracts a short ranked list of keywords from free text
pub trait KeywordExtractor: Send + Sync {
    fn extract(&self, text: &str, max_keywords: usize) -> Vec<String>;
}

const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "and", "any", "are", "because",
    "been", "before", "being", "below", "between", "both", "but", "can", "could", "did", "does",
    "doing", "don", "down", "during", "each", "few", "for", "from", "further", "get", "got",
    "had", "has", "have", "having", "her", "here", "hers", "herself", "him", "himself", "his",
    "how", "into", "its", "itself", "just", "let", "like", "more", "most", "much", "must", "myself",
    "nor", "not", "now", "off", "once", "only", "other", "our", "ours", "ourselves", "out",
    "over", "own", "same", "she", "should", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those", "through",
    "too", "under", "until", "very", "was", "were", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "would", "yes", "you", "your", "yours", "yourself",
    "yourselves", "okay", "yeah", "hey", "hello", "thanks", "thank", "please", "sure",
];

/// Term-frequency keyword ranking with a fixed English stop-word list
///
/// Ties are broken by first occurrence so the output is deterministic.
#[derive(Debug, Clone)]
pub struct FrequencyKeywordExtractor {
    min_word_len: usize,
}

impl FrequencyKeywordExtractor {
    pub fn new() -> Self {
        Self { min_word_len: 3 }
    }

    fn is_candidate(&self, word: &str) -> bool {
        word.chars().count() >= self.min_word_len
            && !word.chars().all(|c| c.is_ascii_digit())
            && !STOP_WORDS.contains(&word)
    }
}

impl Default for FrequencyKeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor for FrequencyKeywordExtractor {
    fn extract(&self, text: &str, max_keywords: usize) -> Vec<String> {
        if max_keywords == 0 {
            return Vec::new();
        }

        // word -> (count, first position)
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

        let words = text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|w| w.trim_matches('\'').to_lowercase())
            .filter(|w| self.is_candidate(w));

        for (position, word) in words.enumerate() {
            counts
                .entry(word)
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, position));
        }

        let mut ranked: Vec<(String, usize, usize)> = counts
            .into_iter()
            .map(|(word, (count, first))| (word, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        ranked
            .into_iter()
            .take(max_keywords)
            .map(|(word, _, _)| word)
            .collect()
    }
}
