//! Catalog error types.

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur when answering a catalog query.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The requested category is not one of the known categories.
    ///
    /// Surfaced as a client error; no partial result is returned.
    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    /// The product store call failed.
    ///
    /// Propagated opaquely and never masked as an empty result, so an
    /// outage cannot be mistaken for "no products found".
    #[error("Product store error: {0}")]
    Store(#[from] StoreError),
}
