use std::collections::HashMap;

/// Shannon entropy of overlapping lower-cased word windows.
///
/// An inexpensive stand-in for language-model perplexity: mechanical
/// phrasing repeats the same windows, collapsing the distribution and
/// driving the value toward zero, while varied prose approaches
/// `log2(window count)`.
///
/// Returns 0.0 for fewer than two tokens or when no full window fits.
pub fn window_entropy(words: &[String], n: usize) -> f64 {
    if n == 0 || words.len() < 2 || words.len() < n {
        return 0.0;
    }

    let lowered: Vec<String> = words.iter().map(|word| word.to_lowercase()).collect();
    let mut counts: HashMap<&[String], usize> = HashMap::new();
    for window in lowered.windows(n) {
        *counts.entry(window).or_insert(0) += 1;
    }

    let total = (lowered.len() - n + 1) as f64;
    counts.values().fold(0.0, |entropy, &count| {
        let p = count as f64 / total;
        entropy - p * p.log2()
    })
}
