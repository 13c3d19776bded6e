use std::collections::HashSet;

/// Type-token ratio over lower-cased clean words: distinct forms divided
/// by total forms. 0.0 when there are no words.
pub fn type_token_ratio(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let distinct: HashSet<String> = words.iter().map(|word| word.to_lowercase()).collect();
    distinct.len() as f64 / words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(type_token_ratio(&[]), 0.0);
    }

    #[test]
    fn all_unique_words_yield_one() {
        let unique = words("every token here appears exactly once");
        assert_eq!(type_token_ratio(&unique), 1.0);
    }

    #[test]
    fn single_repeated_word_approaches_zero() {
        let repeated = vec!["again".to_string(); 50];
        let ratio = type_token_ratio(&repeated);
        assert_eq!(ratio, 1.0 / 50.0);
    }

    #[test]
    fn casing_variants_count_as_one_type() {
        let cased = words("Deadline deadline DEADLINE");
        assert_eq!(type_token_ratio(&cased), 1.0 / 3.0);
    }
}
