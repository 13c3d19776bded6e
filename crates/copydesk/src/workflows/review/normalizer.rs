use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static SENTENCE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]["'\u{201D}\u{2019})\]]*(?:\s|$)"#).unwrap());

#[derive(Debug, thiserror::Error)]
pub enum TokenizerError {
    #[error("tokenizer resources unavailable: {0}")]
    Unavailable(String),
}

/// Sentence- and word-splitting collaborator. Implementations may be backed
/// by downloaded language models; the pipeline treats them as fallible and
/// degrades to naive splitting.
pub trait Tokenizer: Send + Sync {
    fn sentences(&self, text: &str) -> Result<Vec<String>, TokenizerError>;
    fn words(&self, text: &str) -> Result<Vec<String>, TokenizerError>;
}

/// Default tokenizer backed by compiled patterns. Requires no external
/// resources and never fails.
#[derive(Debug, Default)]
pub struct RuleTokenizer;

impl Tokenizer for RuleTokenizer {
    fn sentences(&self, text: &str) -> Result<Vec<String>, TokenizerError> {
        Ok(split_sentences(text))
    }

    fn words(&self, text: &str) -> Result<Vec<String>, TokenizerError> {
        Ok(split_words(text))
    }
}

/// Token streams derived from one submission, consumed by the analyzers.
/// `clean_words` keeps only fully alphanumeric forms so punctuation never
/// inflates word counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedArticle {
    pub sentences: Vec<String>,
    pub words: Vec<String>,
    pub clean_words: Vec<String>,
}

/// Tokenize a submission, falling back to naive whitespace/period splitting
/// if the tokenizer cannot run. Degraded output is still scoreable.
pub fn normalize(text: &str, tokenizer: &dyn Tokenizer) -> NormalizedArticle {
    let sentences = tokenizer.sentences(text).unwrap_or_else(|err| {
        warn!(%err, "sentence tokenizer degraded, falling back to naive split");
        naive_sentences(text)
    });
    let words = tokenizer.words(text).unwrap_or_else(|err| {
        warn!(%err, "word tokenizer degraded, falling back to naive split");
        naive_words(text)
    });
    let clean_words = words
        .iter()
        .filter(|word| is_clean(word))
        .cloned()
        .collect();

    NormalizedArticle {
        sentences,
        words,
        clean_words,
    }
}

fn is_clean(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn naive_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

fn naive_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenTokenizer;

    impl Tokenizer for BrokenTokenizer {
        fn sentences(&self, _text: &str) -> Result<Vec<String>, TokenizerError> {
            Err(TokenizerError::Unavailable("corpus missing".to_string()))
        }

        fn words(&self, _text: &str) -> Result<Vec<String>, TokenizerError> {
            Err(TokenizerError::Unavailable("corpus missing".to_string()))
        }
    }

    #[test]
    fn splits_sentences_on_terminal_punctuation() {
        let article = normalize(
            "The press run starts Monday. Will the cover hold? It should!",
            &RuleTokenizer,
        );
        assert_eq!(
            article.sentences,
            vec![
                "The press run starts Monday",
                "Will the cover hold",
                "It should",
            ]
        );
    }

    #[test]
    fn keeps_trailing_quotes_out_of_sentences() {
        let article = normalize("\"We shipped it.\" Then we slept.", &RuleTokenizer);
        assert_eq!(article.sentences.len(), 2);
        assert_eq!(article.sentences[0], "\"We shipped it");
    }

    #[test]
    fn words_strip_surrounding_punctuation() {
        let article = normalize("A 5000mAh battery, launched in 2024.", &RuleTokenizer);
        assert_eq!(article.words, vec!["A", "5000mAh", "battery", "launched", "in", "2024"]);
    }

    #[test]
    fn clean_words_exclude_inner_punctuation_forms() {
        let article = normalize("It isn't ready, truly.", &RuleTokenizer);
        assert!(article.words.contains(&"isn't".to_string()));
        assert!(!article.clean_words.contains(&"isn't".to_string()));
        assert!(article.clean_words.contains(&"ready".to_string()));
    }

    #[test]
    fn empty_text_normalizes_to_empty_streams() {
        let article = normalize("   ", &RuleTokenizer);
        assert!(article.sentences.is_empty());
        assert!(article.words.is_empty());
        assert!(article.clean_words.is_empty());
    }

    #[test]
    fn broken_tokenizer_falls_back_to_naive_split() {
        let article = normalize("First thought. Second thought.", &BrokenTokenizer);
        assert_eq!(article.sentences, vec!["First thought", "Second thought"]);
        assert_eq!(article.words.len(), 4);
    }
}
