// domain analytics ranking
use std::cmp::Ordering;

use crate::analytics::RankedToken;

/// Order entries by descending count and keep the first `limit`.
///
/// Entries must arrive in first-occurrence order; the sort is stable, so equal
/// counts keep that order.
pub fn rank_by_count(mut entries: Vec<RankedToken>, limit: usize) -> Vec<RankedToken> {
    if limit == 0 {
        return Vec::new();
    }
    entries.sort_by(compare_desc);
    entries.truncate(limit);
    entries
}

#[inline]
fn compare_desc(a: &RankedToken, b: &RankedToken) -> Ordering {
    b.count.cmp(&a.count)
}
