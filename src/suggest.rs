//! "Did you mean" hints for mistyped festival and option ids

/// Number of single-character insertions, deletions or substitutions that
/// turn `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows of the distance table
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Up to three candidates within `max_distance` of `query`, closest first.
///
/// Comparison ignores case. Ties keep candidate order.
pub fn closest<'a>(query: &str, candidates: &[&'a str], max_distance: usize) -> Vec<&'a str> {
    let query = query.to_lowercase();
    let mut scored: Vec<(&'a str, usize)> = candidates
        .iter()
        .map(|&c| (c, edit_distance(&query, &c.to_lowercase())))
        .filter(|(_, d)| *d <= max_distance)
        .collect();
    scored.sort_by_key(|(_, d)| *d);
    scored.into_iter().take(3).map(|(c, _)| c).collect()
}

/// Hint line for a mistyped id, `None` when nothing is close.
pub fn did_you_mean(query: &str, candidates: &[&str]) -> Option<String> {
    let found = closest(query, candidates, 3);
    let quoted: Vec<String> = found.iter().map(|c| format!("'{}'", c)).collect();
    match quoted.as_slice() {
        [] => None,
        [only] => Some(format!("Did you mean {}?", only)),
        [rest @ .., last] => Some(format!("Did you mean {} or {}?", rest.join(", "), last)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", "holi"), 4);
        assert_eq!(edit_distance("holi", "holi"), 0);
        assert_eq!(edit_distance("diwli", "diwali"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("సంక్రాంతి", "సంక్రాంతి"), 0);
    }

    #[test]
    fn test_closest_orders_by_distance() {
        let ids = ["diwali", "holi", "rakhi", "navratri"];
        assert_eq!(closest("Diwaly", &ids, 3), vec!["diwali"]);
        assert_eq!(closest("hol", &ids, 1), vec!["holi"]);
        assert!(closest("christmas", &ids, 2).is_empty());
    }

    #[test]
    fn test_did_you_mean() {
        assert_eq!(did_you_mean("diwly", &["diwali", "holi"]), Some("Did you mean 'diwali'?".to_string()));
        assert_eq!(
            did_you_mean("mon", &["mono", "neon", "xxxxxxxx"]),
            Some("Did you mean 'mono' or 'neon'?".to_string())
        );
        assert_eq!(did_you_mean("zzzzzzzz", &["holi"]), None);
    }
}
