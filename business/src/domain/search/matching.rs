use crate::domain::catalog::model::{Producer, Product};

use super::model::SearchResults;

/// A normalized, non-empty search needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Trims and lowercases `raw`. Returns `None` for blank input, which must
    /// yield no results rather than the whole catalog.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn found_in(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.0)
    }
}

/// Catalog entries that can be matched against a [`SearchTerm`].
pub trait Searchable {
    /// Text fields checked for case-insensitive containment.
    fn searchable_fields(&self) -> Vec<&str>;

    fn matches(&self, term: &SearchTerm) -> bool {
        self.searchable_fields()
            .into_iter()
            .any(|field| term.found_in(field))
    }
}

impl Searchable for Producer {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.specialty.as_str(),
            self.category.as_str(),
        ]
    }
}

impl Searchable for Product {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.description.as_str(),
            self.category.as_str(),
            self.producer_name.as_str(),
        ]
    }
}

/// Stable filter: matching entries keep their catalog order.
pub fn filter_catalog(
    producers: Vec<Producer>,
    products: Vec<Product>,
    term: &SearchTerm,
) -> SearchResults {
    SearchResults {
        producers: producers.into_iter().filter(|p| p.matches(term)).collect(),
        products: products.into_iter().filter(|p| p.matches(term)).collect(),
    }
}
