use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Descending enrolled count.
    #[default]
    Popularity,
    /// Descending id. Newer courses are assumed to carry higher ids.
    Recency,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" | "popularity" => Ok(SortKey::Popularity),
            "newest" | "recency" => Ok(SortKey::Recency),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

/// Offline availability constraint, as named by the landing page tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Any,
    OfflineOnly,
    OnlineOnly,
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" | "all" => Ok(Availability::Any),
            "offline" => Ok(Availability::OfflineOnly),
            "online" => Ok(Availability::OnlineOnly),
            other => Err(format!("unknown availability: {}", other)),
        }
    }
}

/// Filter and sort parameters for a catalog listing.
///
/// Every field defaults to "no restriction". Empty category or language sets
/// mean unrestricted, never "match nothing". The two availability flags are
/// independent; with both set nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    pub search_text: String,
    pub categories: BTreeSet<String>,
    pub languages: BTreeSet<String>,
    pub offline_only: bool,
    pub online_only: bool,
    pub sort_key: SortKey,
}

impl CourseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.languages.insert(language.into());
        self
    }

    pub fn offline_only(mut self, offline_only: bool) -> Self {
        self.offline_only = offline_only;
        self
    }

    pub fn online_only(mut self, online_only: bool) -> Self {
        self.online_only = online_only;
        self
    }

    /// Adds the constraint named by `availability` on top of any already set.
    pub fn availability(self, availability: Availability) -> Self {
        match availability {
            Availability::Any => self,
            Availability::OfflineOnly => self.offline_only(true),
            Availability::OnlineOnly => self.online_only(true),
        }
    }

    pub fn sort_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn admits_availability(&self, is_offline_available: bool) -> bool {
        (!self.offline_only || is_offline_available)
            && (!self.online_only || !is_offline_available)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_text.is_empty()
            || !self.categories.is_empty()
            || !self.languages.is_empty()
            || self.offline_only
            || self.online_only
    }

    /// Drops every filter but keeps the chosen ordering.
    pub fn cleared(&self) -> Self {
        Self {
            sort_key: self.sort_key,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_inactive_and_popular() {
        let query = CourseQuery::default();
        assert!(!query.has_active_filters());
        assert_eq!(query.sort_key, SortKey::Popularity);
        assert!(!query.offline_only && !query.online_only);
    }

    #[test]
    fn test_each_filter_activates_query() {
        assert!(CourseQuery::new().search("x").has_active_filters());
        assert!(CourseQuery::new().category("Health").has_active_filters());
        assert!(CourseQuery::new().language("Hindi").has_active_filters());
        assert!(CourseQuery::new().offline_only(true).has_active_filters());
        assert!(CourseQuery::new().online_only(true).has_active_filters());
        assert!(!CourseQuery::new().sort_by(SortKey::Recency).has_active_filters());
    }

    #[test]
    fn test_cleared_keeps_sort_key() {
        let query = CourseQuery::new()
            .search("water")
            .category("Health")
            .offline_only(true)
            .sort_by(SortKey::Recency);

        let cleared = query.cleared();
        assert!(!cleared.has_active_filters());
        assert_eq!(cleared.sort_key, SortKey::Recency);
    }

    #[test]
    fn test_clearing_offline_keeps_online_restriction() {
        let query = CourseQuery::new()
            .availability(Availability::OnlineOnly)
            .offline_only(false);

        assert!(query.online_only);
        assert!(!query.admits_availability(true));
        assert!(query.admits_availability(false));
    }

    #[test]
    fn test_availability_adds_to_existing_flags() {
        let query = CourseQuery::new()
            .offline_only(true)
            .availability(Availability::Any);
        assert!(query.offline_only && !query.online_only);

        let query = query.availability(Availability::OnlineOnly);
        assert!(query.offline_only && query.online_only);
    }

    #[test]
    fn test_parse_sort_and_availability() {
        assert_eq!("popular".parse::<SortKey>(), Ok(SortKey::Popularity));
        assert_eq!("newest".parse::<SortKey>(), Ok(SortKey::Recency));
        assert!("alphabetical".parse::<SortKey>().is_err());

        assert_eq!("online".parse::<Availability>(), Ok(Availability::OnlineOnly));
        assert!("sometimes".parse::<Availability>().is_err());
    }

    #[test]
    fn test_admits_availability() {
        let any = CourseQuery::new();
        assert!(any.admits_availability(true) && any.admits_availability(false));

        let offline = CourseQuery::new().offline_only(true);
        assert!(offline.admits_availability(true));
        assert!(!offline.admits_availability(false));

        let online = CourseQuery::new().online_only(true);
        assert!(online.admits_availability(false));
        assert!(!online.admits_availability(true));

        let both = CourseQuery::new().offline_only(true).online_only(true);
        assert!(!both.admits_availability(true) && !both.admits_availability(false));
    }
}
