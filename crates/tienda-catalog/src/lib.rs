//! Catalog query engine for the tienda storefront.
//!
//! Turns user-selected facets (brand, size, availability, price range,
//! free text, explicit sort) into a deterministically ordered, paginated
//! product list, and computes the distinct filter options for a result
//! set:
//!
//! - **Catalog**: product records and the derived availability group
//! - **Query**: filter building, ranking, pagination, facet extraction
//! - **Service**: the one engine shared by every catalog endpoint
//! - **Store**: the async boundary to the product collection
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_catalog::prelude::*;
//!
//! let service = CatalogService::new(store);
//!
//! // As deserialized from the query string by the HTTP layer.
//! let raw = RawQuery::new()
//!     .with_category("footwear")
//!     .with_sort("asc")
//!     .with_page("2");
//!
//! let page = service.query_catalog(&raw).await?;
//! println!("{} of {} products", page.len(), page.pagination.total);
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod query;
pub mod service;
pub mod store;

pub use error::CatalogError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{Availability, Category, ColorEntry, ProductRecord, SizeVariant};

    // Query
    pub use crate::query::{
        CatalogFacets, CatalogPage, CategoryFacets, FilterCriteria, PageRequest, Pagination,
        PriceSort, RawQuery, SizeFacets,
    };

    // Service & store
    pub use crate::service::CatalogService;
    pub use crate::store::{ProductStore, StoreError};
}
