use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::application::shared::observable::Observable;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::search::errors::SearchError;
use crate::domain::search::matching::{SearchTerm, filter_catalog};
use crate::domain::search::model::{SearchResults, SearchState};

/// Simulated round trip of a catalog search.
pub const DEFAULT_SEARCH_LATENCY: Duration = Duration::from_millis(300);

/// Search screen state: query echo, results, in-flight flag and recent
/// queries.
///
/// Overlapping searches are not cancelled and carry no generation token:
/// whichever completes last overwrites the results.
pub struct SearchStore {
    state: Observable<SearchState>,
    catalog: Arc<dyn CatalogRepository>,
    logger: Arc<dyn Logger>,
    latency: Duration,
}

/// Handle on a search started by [`SearchStore::perform_search`].
///
/// Dropping it does not cancel the search.
#[derive(Debug)]
pub struct PendingSearch {
    task: Option<JoinHandle<()>>,
}

impl PendingSearch {
    fn ready() -> Self {
        Self { task: None }
    }

    /// `false` when the query was blank and nothing was scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.task.is_some()
    }

    /// Waits until the results of this search have been written.
    pub async fn completed(self) -> Result<(), SearchError> {
        match self.task {
            Some(task) => task.await.map_err(|_| SearchError::TaskFailed),
            None => Ok(()),
        }
    }
}

impl SearchStore {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        logger: Arc<dyn Logger>,
        latency: Duration,
    ) -> Self {
        Self {
            state: Observable::new(SearchState::default()),
            catalog,
            logger,
            latency,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn is_searching(&self) -> bool {
        self.state.read(|s| s.is_searching)
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.state.read(|s| s.recent_searches.as_slice().to_vec())
    }

    /// Stores the text verbatim for the input field; does not search.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.update(|s| {
            if s.query == query {
                return false;
            }
            s.query = query;
            true
        });
    }

    /// Starts a search for `query`.
    ///
    /// A blank query clears the results right away. Otherwise the in-flight
    /// flag is raised now and the filtered catalog is written after the
    /// configured latency on a spawned task, which must run inside a tokio
    /// runtime.
    pub fn perform_search(&self, query: &str) -> PendingSearch {
        let Some(term) = SearchTerm::parse(query) else {
            self.state.update(|s| {
                s.results = SearchResults::default();
                s.is_searching = false;
                true
            });
            self.logger.debug("Blank search query, results cleared");
            return PendingSearch::ready();
        };

        self.state.update(|s| {
            let changed = !s.is_searching;
            s.is_searching = true;
            changed
        });
        self.logger
            .info(&format!("Searching catalog for: {}", term.as_str()));

        let state = self.state.clone();
        let catalog = Arc::clone(&self.catalog);
        let logger = Arc::clone(&self.logger);
        let latency = self.latency;
        let raw_query = query.to_string();

        let task = tokio::spawn(async move {
            tokio::time::sleep(latency).await;

            let results = match search_catalog(catalog.as_ref(), &term).await {
                Ok(results) => results,
                Err(e) => {
                    logger.error(&format!("Search for '{}' failed: {}", raw_query, e));
                    state.update(|s| {
                        s.results = SearchResults::default();
                        s.is_searching = false;
                        true
                    });
                    return;
                }
            };

            if results.is_empty() {
                logger.info(&format!("Search for '{}' matched nothing", raw_query));
            } else {
                logger.info(&format!(
                    "Search for '{}' found {} producers and {} products",
                    raw_query,
                    results.producers.len(),
                    results.products.len()
                ));
            }

            state.update(|s| {
                s.results = results;
                s.is_searching = false;
                if !s.recent_searches.contains(&raw_query) {
                    s.recent_searches.push(raw_query);
                }
                true
            });
        });

        PendingSearch { task: Some(task) }
    }

    pub fn clear_search(&self) {
        self.state.update(|s| {
            s.query.clear();
            s.results = SearchResults::default();
            s.is_searching = false;
            true
        });
    }

    /// Prepends `query` to the recent log, capped at five entries. Does not
    /// check for duplicates.
    pub fn add_recent_search(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.update(|s| {
            s.recent_searches.push(query);
            true
        });
    }

    pub fn clear_recent_searches(&self) {
        self.state.update(|s| {
            if s.recent_searches.is_empty() {
                return false;
            }
            s.recent_searches.clear();
            true
        });
    }
}

async fn search_catalog(
    catalog: &dyn CatalogRepository,
    term: &SearchTerm,
) -> Result<SearchResults, SearchError> {
    let producers = catalog.get_producers().await?;
    let products = catalog.get_products().await?;
    Ok(filter_catalog(producers, products, term))
}
