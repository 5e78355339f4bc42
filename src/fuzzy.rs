//! Fuzzy matching for the command palette.
//!
//! A query matches a candidate when it is a case-insensitive subsequence
//! of it. Consecutive matches score higher than scattered ones, and
//! matches that start early in the candidate get a recency bonus, so
//! `"fs"` ranks `"file: save"` above `"refresh settings"`.

/// Score `query` against `text`. Returns `None` when `query` is not a
/// subsequence of `text`; an empty query scores `0` for every candidate.
pub fn score(query: &str, text: &str) -> Option<i32> {
    if query.is_empty() {
        return Some(0);
    }

    let query: Vec<char> = query.to_lowercase().chars().collect();
    let mut matched = 0;
    let mut streak = 0;
    let mut first_match: Option<usize> = None;
    let mut total = 0;

    for (index, ch) in text.to_lowercase().chars().enumerate() {
        if ch == query[matched] {
            if first_match.is_none() {
                first_match = Some(index);
            }
            matched += 1;
            streak += 1;
            total += 10 + streak * 5;
            if matched == query.len() {
                break;
            }
        } else {
            streak = 0;
            total -= 1;
        }
    }

    if matched < query.len() {
        return None;
    }

    let first = first_match.unwrap_or(0) as i32;
    Some(total + (50 - first).max(0))
}

/// Rank `items` against `query`: non-matching items are dropped, the rest
/// sorted by descending score. The sort is stable, so equal scores keep
/// their input order. At most `limit` items are returned.
pub fn find_ranked<'a, T, F>(query: &str, items: &'a [T], label_of: F, limit: usize) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let mut scored: Vec<(i32, &T)> = items
        .iter()
        .filter_map(|item| score(query, label_of(item)).map(|s| (s, item)))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(limit);

    scored.into_iter().map(|(_, item)| item).collect()
}
