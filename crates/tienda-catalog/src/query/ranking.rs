//! Ranking and pagination over the full filtered set.
//!
//! Sorting and slicing happen in memory after the store returns every
//! matching record; pagination totals require the full filtered count.

use crate::catalog::ProductRecord;
use crate::query::filters::{PriceSort, RawQuery};
use crate::query::results::{CatalogPage, Pagination};

/// Default page when the input is absent or unusable.
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size when the input is absent or unusable.
pub const DEFAULT_PER_PAGE: i64 = 20;

/// A validated page request. Both fields are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Parse `page`/`limit` from the raw query. Non-numeric or
    /// non-positive values fall back to the defaults rather than erroring.
    pub fn from_raw(raw: &RawQuery) -> Self {
        Self {
            page: parse_positive(&raw.page).unwrap_or(DEFAULT_PAGE),
            per_page: parse_positive(&raw.limit).unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    fn offset(&self) -> usize {
        // page is positive but otherwise unbounded; saturate rather than
        // overflow so an absurd page number still means "past the end".
        usize::try_from((self.page - 1).saturating_mul(self.per_page)).unwrap_or(usize::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

fn parse_positive(value: &Option<String>) -> Option<i64> {
    value
        .as_deref()
        .map(str::trim)
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|n| *n > 0)
}

/// Sort the full matched set in place.
///
/// With an explicit sort, ordering is by price alone; availability plays
/// no part. Otherwise the default ordering applies: availability group
/// first (immediate, short wait, long wait), and within a group price
/// descending. The higher-price-first rule within a group is deliberate
/// storefront behavior, kept as-is. Both branches use a stable sort, so
/// equal keys keep their stored relative order.
pub fn rank(products: &mut [ProductRecord], sort: Option<PriceSort>) {
    match sort {
        Some(PriceSort::Asc) => {
            products.sort_by(|a, b| a.sort_price().total_cmp(&b.sort_price()));
        }
        Some(PriceSort::Desc) => {
            products.sort_by(|a, b| b.sort_price().total_cmp(&a.sort_price()));
        }
        None => {
            products.sort_by(|a, b| {
                a.availability()
                    .rank()
                    .cmp(&b.availability().rank())
                    .then_with(|| b.sort_price().total_cmp(&a.sort_price()))
            });
        }
    }
}

/// Slice one page out of the sorted set.
///
/// Metadata reflects the full set size; a page past the end yields an
/// empty item list with truthful totals.
pub fn paginate(sorted: Vec<ProductRecord>, request: &PageRequest) -> CatalogPage {
    let total = sorted.len() as i64;
    let pagination = Pagination::new(request.page, request.per_page, total);
    let items = sorted
        .into_iter()
        .skip(request.offset())
        .take(request.per_page as usize)
        .collect();
    CatalogPage { items, pagination }
}
