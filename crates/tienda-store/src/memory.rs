//! In-memory product store.

use async_trait::async_trait;
use tienda_catalog::catalog::ProductRecord;
use tienda_catalog::query::FilterCriteria;
use tienda_catalog::store::{ProductStore, StoreError};

/// A product store backed by an in-process `Vec`.
///
/// Filtering evaluates the engine's own predicate record by record, so
/// this store is the reference semantics other implementations must match.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    products: Vec<ProductRecord>,
}

impl MemoryStore {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<ProductRecord> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = ProductRecord>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_matching(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<ProductRecord>, StoreError> {
        Ok(self
            .products
            .iter()
            .filter(|p| criteria.matches(p))
            .cloned()
            .collect())
    }
}
