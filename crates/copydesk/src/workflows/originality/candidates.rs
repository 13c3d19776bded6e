use serde::Serialize;

/// Sentences at or below this many whitespace-delimited words are too
/// generic to fingerprint reliably.
pub const MIN_CANDIDATE_WORDS: usize = 8;

/// Figures plagiarize worse than adjectives; digits outrank names.
pub const DIGIT_WEIGHT: i32 = 5;
pub const NAME_WEIGHT: i32 = 3;

/// A sentence worth verifying against the search collaborator, ranked by
/// a deterministic weight. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub sentence: String,
    pub weight: i32,
}

/// Select the sentences worth sending to the rate-limited search
/// collaborator. Short sentences are dropped, the rest are weighted
/// toward figures and names, sorted stably by weight descending, and
/// capped at `limit`.
pub fn rank_candidates(sentences: &[String], limit: usize) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = sentences
        .iter()
        .filter(|sentence| sentence.split_whitespace().count() > MIN_CANDIDATE_WORDS)
        .map(|sentence| Candidate {
            sentence: sentence.clone(),
            weight: weigh(sentence),
        })
        .collect();

    // Stable sort keeps original order for weight ties.
    candidates.sort_by_key(|candidate| std::cmp::Reverse(candidate.weight));
    candidates.truncate(limit);
    candidates
}

fn weigh(sentence: &str) -> i32 {
    let mut weight = 0;

    if sentence.chars().any(|c| c.is_ascii_digit()) {
        weight += DIGIT_WEIGHT;
    }

    let names_present = sentence
        .split_whitespace()
        .skip(1)
        .any(|word| word.chars().next().is_some_and(char::is_uppercase));
    if names_present {
        weight += NAME_WEIGHT;
    }

    weight
}
