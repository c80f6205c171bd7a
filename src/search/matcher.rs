//! Case-insensitive substring matching over catalog items.
//!
//! Matching is deliberately plain: a normalized query matches an item when it
//! occurs in the title, description, category, kind or location. There is no
//! scoring, and results keep the catalog's order.

use crate::domain::SearchItem;

/// Minimum number of characters a trimmed query needs before it is searched.
pub const MIN_QUERY_CHARS: usize = 2;

/// Trims and lower-cases a raw query.
///
/// Returns `None` when the trimmed query is shorter than [`MIN_QUERY_CHARS`]
/// characters; callers treat that as "nothing to search" rather than an error.
///
/// ```
/// use devconnect_guide::search::normalize_query;
///
/// assert_eq!(normalize_query("  ETH "), Some("eth".to_string()));
/// assert_eq!(normalize_query(" e "), None);
/// ```
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Returns true if `normalized` occurs in any searchable field of `item`.
///
/// `normalized` must already be lower-cased, see [`normalize_query`].
#[must_use]
pub fn matches(item: &SearchItem, normalized: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(normalized);

    contains(&item.title)
        || contains(&item.description)
        || contains(&item.category)
        || item.kind.as_str().contains(normalized)
        || item.location.as_deref().is_some_and(contains)
}

/// Filters `items` down to those matching `normalized`, keeping list order.
#[must_use]
pub fn filter_items(items: &[SearchItem], normalized: &str) -> Vec<SearchItem> {
    let _span = tracing::debug_span!("filter_items", total = items.len(), query = %normalized).entered();

    let results: Vec<SearchItem> = items
        .iter()
        .filter(|item| matches(item, normalized))
        .cloned()
        .collect();

    tracing::debug!(matched = results.len(), "items filtered");
    results
}

/// Byte ranges `(start, end)` of every case-insensitive occurrence of
/// `normalized` in `text`, end exclusive.
///
/// Occurrences do not overlap. Text whose lower-cased form changes byte length
/// (some non-ASCII scripts) gets no ranges, since offsets would not line up.
#[must_use]
pub fn match_ranges(text: &str, normalized: &str) -> Vec<(usize, usize)> {
    if normalized.is_empty() {
        return vec![];
    }
    let lowered = text.to_lowercase();
    if lowered.len() != text.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut offset = 0;
    while let Some(pos) = lowered[offset..].find(normalized) {
        let start = offset + pos;
        let end = start + normalized.len();
        ranges.push((start, end));
        offset = end;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_items;

    fn titles(items: &[SearchItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn eth_matches_titles_only_where_the_letters_are_adjacent() {
        let results = filter_items(all_items(), "eth");
        assert_eq!(titles(&results), vec!["ETHLatam", "Ethereum Hacker House"]);
    }

    #[test]
    fn location_and_kind_are_searchable() {
        let palermo = filter_items(all_items(), "palermo");
        assert_eq!(
            titles(&palermo),
            vec!["Web3 Hackers Meetup", "Palermo Soho Loft", "Don Julio", "El Preferido", "Gran Dabbang"]
        );

        let restaurants = filter_items(all_items(), "restaurant");
        assert_eq!(titles(&restaurants), vec!["Don Julio", "El Preferido", "Gran Dabbang"]);
    }

    #[test]
    fn short_or_blank_queries_are_skipped() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("     "), None);
        assert_eq!(normalize_query(" x"), None);
        assert_eq!(normalize_query("Xy"), Some("xy".to_string()));
    }

    #[test]
    fn ranges_cover_every_occurrence() {
        assert_eq!(match_ranges("Tango tango", "tango"), vec![(0, 5), (6, 11)]);
        assert_eq!(match_ranges("Don Julio", "xyz"), vec![]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }
}
