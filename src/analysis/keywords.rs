use std::collections::HashMap;

/// Rank tokens by frequency and return at most `limit` of them.
///
/// Equal counts keep the order in which each token first appeared.
pub fn top_keywords<S: AsRef<str>>(tokens: &[S], limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u64)> = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        match positions.get(token) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-appearance order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(token, _)| token.to_string())
        .collect()
}
