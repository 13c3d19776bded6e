use std::collections::HashSet;

use once_cell::sync::Lazy;

const SUBJECTIVITY_GAIN: f64 = 4.0;

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("readability formula inapplicable: {0}")]
    Inapplicable(&'static str),
}

/// Opinion-tone collaborator. Returns a scalar in [0, 1]: 0 purely
/// factual, 1 purely opinionated.
pub trait SubjectivityModel: Send + Sync {
    fn subjectivity(&self, words: &[String]) -> f64;
}

/// Ease-of-reading collaborator; higher values mean easier reading.
/// A failure here skips the readability penalty rather than surfacing.
pub trait ReadabilityModel: Send + Sync {
    fn reading_ease(&self, sentences: &[String], words: &[String]) -> Result<f64, StyleError>;
}

static OPINION_LEXICON: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // First-person markers
        "i", "me", "my", "mine", "we", "us", "our", "ours", "personally", "honestly", "frankly",
        // Stance verbs
        "think", "thought", "feel", "felt", "believe", "believed", "reckon", "hope", "wish",
        "love", "loved", "hate", "hated", "like", "liked", "prefer", "doubt", "suspect",
        // Evaluative adjectives and adverbs
        "good", "bad", "great", "nice", "fine", "well", "best", "worst", "better", "worse",
        "amazing", "awful", "terrible", "wonderful", "impressive", "disappointing", "beautiful",
        "ugly", "easy", "hard", "happy", "sad", "boring", "interesting", "surprising",
        "arguably", "probably", "maybe", "perhaps", "definitely", "certainly", "really",
        "very", "quite", "rather",
    ]
    .into_iter()
    .collect()
});

/// Lexicon scorer counting opinion-bearing forms against the clean word
/// count, amplified by a fixed gain and clamped to the unit interval.
#[derive(Debug, Default)]
pub struct LexiconSubjectivity;

impl SubjectivityModel for LexiconSubjectivity {
    fn subjectivity(&self, words: &[String]) -> f64 {
        if words.is_empty() {
            return 0.0;
        }

        let hits = words
            .iter()
            .filter(|word| OPINION_LEXICON.contains(word.to_lowercase().as_str()))
            .count();
        (hits as f64 / words.len() as f64 * SUBJECTIVITY_GAIN).min(1.0)
    }
}

/// Flesch reading ease over sentence and word streams, with a vowel-group
/// syllable counter.
#[derive(Debug, Default)]
pub struct FleschReadingEase;

impl ReadabilityModel for FleschReadingEase {
    fn reading_ease(&self, sentences: &[String], words: &[String]) -> Result<f64, StyleError> {
        if sentences.is_empty() {
            return Err(StyleError::Inapplicable("no sentences"));
        }
        if words.is_empty() {
            return Err(StyleError::Inapplicable("no words"));
        }

        let words_per_sentence = words.len() as f64 / sentences.len() as f64;
        let syllables: usize = words.iter().map(|word| syllable_count(word)).sum();
        let syllables_per_word = syllables as f64 / words.len() as f64;

        Ok(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
    }
}

fn syllable_count(word: &str) -> usize {
    let mut count = 0;
    let mut previous_was_vowel = false;
    for c in word.to_lowercase().chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }
    count.max(1)
}
