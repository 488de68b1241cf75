use std::cmp::Reverse;

use crate::models::{Course, CourseQuery, SortKey};

/// Filters `courses` by every active predicate in `query`, then orders the
/// survivors by the query's sort key.
///
/// Pure: the input slice is untouched and each call builds a fresh list.
/// Ties keep input order because `sort_by_key` is stable.
pub fn run_query<'a>(courses: &'a [Course], query: &CourseQuery) -> Vec<&'a Course> {
    let needle = query.search_text.to_lowercase();

    let mut result: Vec<&Course> = courses
        .iter()
        .filter(|c| matches_search(c, &needle))
        .filter(|c| query.categories.is_empty() || query.categories.contains(&c.category))
        .filter(|c| query.languages.is_empty() || c.speaks_any(&query.languages))
        .filter(|c| query.admits_availability(c.is_offline_available))
        .collect();

    match query.sort_key {
        SortKey::Popularity => result.sort_by_key(|c| Reverse(c.enrolled_count)),
        SortKey::Recency => result.sort_by_key(|c| Reverse(c.id)),
    }

    result
}

/// `needle` must already be lowercased.
fn matches_search(course: &Course, needle: &str) -> bool {
    needle.is_empty()
        || course.title.to_lowercase().contains(needle)
        || course.description.to_lowercase().contains(needle)
}
