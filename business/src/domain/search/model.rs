use serde::Serialize;

use crate::domain::catalog::model::{Producer, Product};

use super::recent::RecentSearches;

/// Producers and products matching the current query, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub producers: Vec<Producer>,
    pub products: Vec<Product>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.producers.is_empty() && self.products.is_empty()
    }
}

/// Everything the search screen renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    /// Raw text as typed, echoed back to the input field.
    pub query: String,
    pub results: SearchResults,
    /// `true` while a delayed search is in flight.
    pub is_searching: bool,
    pub recent_searches: RecentSearches,
}
