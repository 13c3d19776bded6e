use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::warn;

/// Neutral density reported when the tagger cannot run.
pub const DEGRADED_ENTITY_DENSITY: f64 = 0.1;

/// Grammatical classes the review pipeline cares about. Anything that is
/// neither a name nor a figure folds into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    ProperNoun,
    Cardinal,
    Other,
}

#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error("tagger model unavailable: {0}")]
    Unavailable(String),
}

/// Part-of-speech collaborator. Model-backed implementations can replace
/// the heuristic default; the pipeline only consumes the density scalar.
pub trait PosTagger: Send + Sync {
    fn tag(&self, words: &[String]) -> Result<Vec<PosTag>, TaggerError>;
}

/// Corpus-free tagger: digit-initial tokens are cardinals, capitalized
/// tokens outside the function-word list are proper nouns.
#[derive(Debug, Default)]
pub struct HeuristicTagger;

static FUNCTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "if", "in", "on", "at", "to", "for", "of", "is",
        "it", "its", "this", "that", "these", "those", "with", "as", "by", "from", "was", "were",
        "are", "be", "been", "has", "have", "had", "not", "no", "do", "does", "did", "will",
        "would", "could", "should", "can", "may", "might", "then", "than", "so", "we", "you",
        "they", "he", "she", "i", "my", "our", "your", "their", "what", "which", "who", "when",
        "where", "why", "how", "there", "here", "after", "before", "while", "during", "because",
        "about", "into", "over", "under",
    ]
    .into_iter()
    .collect()
});

impl PosTagger for HeuristicTagger {
    fn tag(&self, words: &[String]) -> Result<Vec<PosTag>, TaggerError> {
        Ok(words.iter().map(|word| tag_token(word)).collect())
    }
}

fn tag_token(token: &str) -> PosTag {
    let Some(first) = token.chars().next() else {
        return PosTag::Other;
    };
    if first.is_ascii_digit() {
        return PosTag::Cardinal;
    }
    if first.is_uppercase() && !FUNCTION_WORDS.contains(token.to_lowercase().as_str()) {
        return PosTag::ProperNoun;
    }
    PosTag::Other
}

/// Fraction of clean tokens naming concrete entities (proper nouns or
/// figures), a proxy for factual density. Bounded in [0, 1]; 0.0 on empty
/// input; degrades to [`DEGRADED_ENTITY_DENSITY`] when the tagger fails.
pub fn entity_density(words: &[String], tagger: &dyn PosTagger) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    match tagger.tag(words) {
        Ok(tags) => {
            let entities = tags
                .iter()
                .filter(|tag| matches!(tag, PosTag::ProperNoun | PosTag::Cardinal))
                .count();
            entities as f64 / words.len() as f64
        }
        Err(err) => {
            warn!(%err, "part-of-speech tagger degraded, using neutral entity density");
            DEGRADED_ENTITY_DENSITY
        }
    }
}
