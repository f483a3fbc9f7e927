//! Query module.
//!
//! Filter building, ranking, pagination, and facet extraction.

mod facets;
mod filters;
mod ranking;
mod results;

pub use facets::{
    extract_category_facets, extract_facets, CatalogFacets, CategoryFacets, SizeFacets,
};
pub use filters::{FilterCriteria, PriceSort, RawQuery};
pub use ranking::{paginate, rank, PageRequest, DEFAULT_PAGE, DEFAULT_PER_PAGE};
pub use results::{CatalogPage, Pagination};
