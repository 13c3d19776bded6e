pub mod candidates;
mod router;
pub mod search;

pub use candidates::{rank_candidates, Candidate, MIN_CANDIDATE_WORDS};
pub use router::{originality_router, MatchView, OriginalityResponse};
pub use search::{HttpSearchClient, SearchError, SearchGateway, SearchHit};

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::review::domain::ArticleSubmission;
use super::review::normalizer::{self, RuleTokenizer, Tokenizer};

/// How many ranked candidates may reach the rate-limited collaborator.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 3;
/// Practical query length accepted by the collaborator.
pub const QUERY_CHAR_LIMIT: usize = 100;
/// Unique-word overlap above which a snippet counts as a match.
pub const OVERLAP_THRESHOLD: f64 = 0.6;
const EXCERPT_CHAR_LIMIT: usize = 50;

/// External snippet overlapping a candidate beyond the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub sentence_excerpt: String,
    pub source_url: String,
    /// Overlap as a percentage of the candidate's unique words.
    pub similarity: f64,
}

/// Terminal result of the originality operation. `original_likely` holds
/// iff no candidate matched; an unreachable collaborator therefore fails
/// open, never closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlagiarismReport {
    pub original_likely: bool,
    pub matches: Vec<MatchResult>,
}

/// Verifies ranked candidate sentences against the search collaborator,
/// one sequential call per candidate, mirroring candidate order in the
/// resulting match list.
pub struct OriginalityService {
    gateway: Arc<dyn SearchGateway>,
    tokenizer: Arc<dyn Tokenizer>,
    candidate_limit: usize,
}

impl OriginalityService {
    pub fn new(gateway: Arc<dyn SearchGateway>) -> Self {
        Self {
            gateway,
            tokenizer: Arc::new(RuleTokenizer),
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_candidate_limit(mut self, limit: usize) -> Self {
        self.candidate_limit = limit;
        self
    }

    /// Check a submission for copied sentences. Never fails: a submission
    /// with nothing worth fingerprinting is trivially safe, and failed
    /// search calls degrade to "no match for this candidate".
    pub fn check(&self, submission: &ArticleSubmission) -> PlagiarismReport {
        let sentences = self
            .tokenizer
            .sentences(&submission.content)
            .unwrap_or_else(|err| {
                warn!(%err, "sentence tokenizer degraded, falling back to naive split");
                normalizer::naive_sentences(&submission.content)
            });

        let candidates = rank_candidates(&sentences, self.candidate_limit);
        if candidates.is_empty() {
            return PlagiarismReport {
                original_likely: true,
                matches: Vec::new(),
            };
        }

        let mut matches = Vec::new();
        for candidate in &candidates {
            let query = truncate_chars(&candidate.sentence, QUERY_CHAR_LIMIT);
            let hit = match self.gateway.top_result(query) {
                Ok(Some(hit)) => hit,
                Ok(None) => continue,
                Err(err) => {
                    warn!(
                        %err,
                        excerpt = truncate_chars(&candidate.sentence, EXCERPT_CHAR_LIMIT),
                        "search call failed, treating candidate as unmatched"
                    );
                    continue;
                }
            };

            let overlap = overlap_similarity(&candidate.sentence, &hit.snippet);
            if overlap > OVERLAP_THRESHOLD {
                matches.push(MatchResult {
                    sentence_excerpt: format!(
                        "{}...",
                        truncate_chars(&candidate.sentence, EXCERPT_CHAR_LIMIT)
                    ),
                    source_url: hit.url,
                    similarity: (overlap * 100.0).round(),
                });
            }
        }

        PlagiarismReport {
            original_likely: matches.is_empty(),
            matches,
        }
    }
}

/// Fraction of the candidate's unique lower-cased words also present in
/// the snippet. 0.0 when the candidate has no words.
pub fn overlap_similarity(candidate: &str, snippet: &str) -> f64 {
    let candidate_words = word_set(candidate);
    if candidate_words.is_empty() {
        return 0.0;
    }
    let snippet_words = word_set(snippet);
    let shared = candidate_words.intersection(&snippet_words).count();
    shared as f64 / candidate_words.len() as f64
}

fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_of_identical_sentences_is_one() {
        let sentence = "Phone X launched with 5000mAh battery in 2024";
        assert_eq!(overlap_similarity(sentence, sentence), 1.0);
    }

    #[test]
    fn overlap_ignores_case_and_punctuation() {
        let candidate = "Phone X launched with 5000mAh battery, in 2024.";
        let snippet = "phone x LAUNCHED with 5000mah battery in 2024";
        assert_eq!(overlap_similarity(candidate, snippet), 1.0);
    }

    #[test]
    fn overlap_of_disjoint_sentences_is_zero() {
        assert_eq!(
            overlap_similarity("entirely fresh reporting here", "unrelated snippet text"),
            0.0
        );
    }

    #[test]
    fn overlap_is_measured_against_the_candidate_set() {
        // Snippet carries extra words; only the candidate's six unique
        // words define the denominator.
        let candidate = "alpha bravo charlie delta echo foxtrot";
        let snippet = "alpha bravo charlie delta unrelated trailing words everywhere";
        let overlap = overlap_similarity(candidate, snippet);
        assert!((overlap - 4.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn empty_candidate_yields_zero_overlap() {
        assert_eq!(overlap_similarity("", "anything"), 0.0);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "caf\u{e9}".repeat(40);
        let truncated = truncate_chars(&text, 100);
        assert_eq!(truncated.chars().count(), 100);
    }
}
