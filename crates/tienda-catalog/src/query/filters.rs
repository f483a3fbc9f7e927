//! Filter building: raw query inputs to a normalized, composable predicate.

use crate::catalog::{Availability, Category, ProductRecord};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Explicit price sort requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceSort {
    /// Price ascending, low to high.
    Asc,
    /// Price descending, high to low.
    Desc,
}

impl PriceSort {
    /// Parse the `sort` query value. Anything but `asc`/`desc` means no
    /// explicit sort.
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(PriceSort::Asc),
            "desc" => Some(PriceSort::Desc),
            _ => None,
        }
    }
}

/// The raw, string-typed query as the HTTP layer hands it over.
///
/// All fields are optional strings; normalization and validation happen in
/// [`FilterCriteria::from_raw`]. Field aliases cover the legacy Spanish
/// query keys still emitted by older storefront pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawQuery {
    pub category: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "sizeClothing", alias = "tallaRopa")]
    pub size_clothing: Option<String>,
    #[serde(rename = "sizeFootwear", alias = "tallaZapatilla")]
    pub size_footwear: Option<String>,
    #[serde(rename = "sizeAccessory", alias = "accesorio")]
    pub size_accessory: Option<String>,
    pub availability: Option<String>,
    #[serde(rename = "priceMin")]
    pub price_min: Option<String>,
    #[serde(rename = "priceMax")]
    pub price_max: Option<String>,
    #[serde(rename = "searchText")]
    pub search_text: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_availability(mut self, label: impl Into<String>) -> Self {
        self.availability = Some(label.into());
        self
    }

    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }
}

/// Normalized filter criteria for one request.
///
/// Absent fields mean "no filtering on that dimension", never
/// "match nothing".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    pub brand: Option<String>,
    /// Single size value, already coalesced from the three per-category
    /// query inputs.
    pub size: Option<String>,
    pub availability: Option<Availability>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub search_text: Option<String>,
    pub explicit_sort: Option<PriceSort>,
}

impl FilterCriteria {
    /// Normalize a raw query.
    ///
    /// An unrecognized category is the one validation error here. Everything
    /// else degrades gracefully: non-numeric price bounds are dropped per
    /// bound, unknown availability labels and sort values are ignored.
    pub fn from_raw(raw: &RawQuery) -> Result<Self, CatalogError> {
        let category = match non_empty(&raw.category) {
            Some(value) => Some(
                Category::matching(value)
                    .ok_or_else(|| CatalogError::InvalidCategory(value.to_string()))?,
            ),
            None => None,
        };

        // The three size inputs coalesce into one value, clothing first.
        // At most one should be populated per request; if several are, the
        // first non-empty in priority order wins.
        let size = [&raw.size_clothing, &raw.size_footwear, &raw.size_accessory]
            .into_iter()
            .find_map(|v| non_empty(v))
            .map(str::to_string);

        Ok(Self {
            category,
            brand: non_empty(&raw.brand).map(str::to_string),
            size,
            availability: non_empty(&raw.availability).and_then(Availability::from_label),
            price_min: parse_bound(&raw.price_min),
            price_max: parse_bound(&raw.price_max),
            search_text: non_empty(&raw.search_text).map(str::to_string),
            explicit_sort: non_empty(&raw.sort).and_then(PriceSort::from_param),
        })
    }

    /// Criteria that scope to a category and nothing else. Used for facet
    /// extraction over one category.
    pub fn for_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// Evaluate the predicate against one product.
    ///
    /// This is the correctness contract for the store boundary: a store
    /// that pushes filtering down must return exactly the records this
    /// function accepts.
    pub fn matches(&self, product: &ProductRecord) -> bool {
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        if let Some(brand) = &self.brand {
            // Exact, case-sensitive match on the stored tag.
            if !product.brands.iter().any(|b| b == brand) {
                return false;
            }
        }
        if let Some(size) = &self.size {
            if !product.has_size(size) {
                return false;
            }
        }
        if let Some(availability) = self.availability {
            if product.availability() != availability {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if product.price > max {
                return false;
            }
        }
        if let Some(text) = &self.search_text {
            if !product.matches_lowercase_text(&text.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Parse a price bound; non-numeric input is treated as no bound.
fn parse_bound(value: &Option<String>) -> Option<f64> {
    non_empty(value).and_then(|s| s.parse::<f64>().ok())
}
