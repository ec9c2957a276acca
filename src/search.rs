//! Client-side name filtering over the published entry list.

use crate::feed::AppEntry;

/// Returns the entries whose display name contains `query`, in feed
/// ranking order.
///
/// A pure function of the list and the query, recomputed on every query
/// change. The empty query matches everything; matching is a case-sensitive
/// substring test on the name only. No matches is an empty result, not an
/// error.
pub fn filter<'a>(entries: &'a [AppEntry], query: &str) -> Vec<&'a AppEntry> {
    entries
        .iter()
        .filter(|entry| query.is_empty() || entry.name.contains(query))
        .collect()
}
