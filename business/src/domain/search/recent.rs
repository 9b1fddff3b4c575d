use serde::Serialize;

/// Maximum number of entries kept in the recent-search log.
pub const RECENT_SEARCH_LIMIT: usize = 5;

/// Past queries, most recent first, capped at [`RECENT_SEARCH_LIMIT`].
///
/// `push` does not de-duplicate; callers check [`RecentSearches::contains`]
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecentSearches(Vec<String>);

impl RecentSearches {
    /// Prepends `query` and drops whatever falls past the cap.
    pub fn push(&mut self, query: impl Into<String>) {
        self.0.insert(0, query.into());
        self.0.truncate(RECENT_SEARCH_LIMIT);
    }

    pub fn contains(&self, query: &str) -> bool {
        self.0.iter().any(|entry| entry == query)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
