use std::collections::HashSet;

/// Lowercased whitespace tokens of `text`
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}

/// Jaccard index of two token sets, in `[0, 1]`.
///
/// An empty union scores 0 rather than dividing by zero.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}
