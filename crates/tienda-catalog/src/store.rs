//! The product store boundary.
//!
//! The engine fetches the full matching set in one call and does all
//! sorting and slicing in memory; the store owes it nothing beyond
//! "every record matching the criteria". Pushing the predicate down into
//! a document database is a permitted optimization as long as it returns
//! the same set.

use crate::catalog::ProductRecord;
use crate::query::FilterCriteria;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a product store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached (connectivity, timeout).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected or failed the query.
    #[error("Query failed: {0}")]
    Query(String),

    /// A stored record could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Read access to the product collection.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Return every product matching the criteria, unordered and
    /// unpaginated. No retry is performed here; failures propagate to the
    /// caller.
    async fn find_matching(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<ProductRecord>, StoreError>;
}
