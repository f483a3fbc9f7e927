//! Facet extraction: the distinct filter options for a result set.
//!
//! Recomputed per request from the filtered set; nothing here is persisted.

use crate::catalog::{Category, ProductRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An accessory-only tag that leaked into clothing size data; it must not
/// surface as a clothing size option.
const LEAKED_ACCESSORY_TAG: &str = "accesorios";

/// Distinct size options, one bucket per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SizeFacets {
    pub clothing: Vec<String>,
    pub footwear: Vec<String>,
    pub accessories: Vec<String>,
}

/// Filter options for the whole (or an unscoped) catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogFacets {
    /// Distinct brand tags, lexicographically sorted.
    pub brands: Vec<String>,
    pub sizes: SizeFacets,
}

/// Filter options scoped to one category: a flat size list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryFacets {
    pub brands: Vec<String>,
    pub sizes: Vec<String>,
}

/// Extract facets across all categories.
pub fn extract_facets(products: &[ProductRecord]) -> CatalogFacets {
    CatalogFacets {
        brands: distinct_brands(products),
        sizes: SizeFacets {
            clothing: sizes_for(products, Category::Clothing),
            footwear: sizes_for(products, Category::Footwear),
            accessories: sizes_for(products, Category::Accessories),
        },
    }
}

/// Extract facets for one category. `products` is normally already scoped;
/// records from other categories are ignored either way.
pub fn extract_category_facets(products: &[ProductRecord], category: Category) -> CategoryFacets {
    let scoped: Vec<&ProductRecord> = products
        .iter()
        .filter(|p| p.category == category)
        .collect();
    CategoryFacets {
        brands: {
            let set: BTreeSet<&str> = scoped
                .iter()
                .flat_map(|p| p.brands.iter().map(String::as_str))
                .collect();
            set.into_iter().map(str::to_string).collect()
        },
        sizes: {
            let mut sizes = collect_distinct_sizes(scoped.iter().copied(), category);
            order_sizes(&mut sizes, category);
            sizes
        },
    }
}

fn distinct_brands(products: &[ProductRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = products
        .iter()
        .flat_map(|p| p.brands.iter().map(String::as_str))
        .collect();
    set.into_iter().map(str::to_string).collect()
}

fn sizes_for(products: &[ProductRecord], category: Category) -> Vec<String> {
    let mut sizes = collect_distinct_sizes(
        products.iter().filter(|p| p.category == category),
        category,
    );
    order_sizes(&mut sizes, category);
    sizes
}

/// Gather distinct size labels in first-seen order, applying the clothing
/// data-quality exclusion.
fn collect_distinct_sizes<'a>(
    products: impl Iterator<Item = &'a ProductRecord>,
    category: Category,
) -> Vec<String> {
    let mut sizes: Vec<String> = Vec::new();
    for product in products {
        for variant in &product.sizes {
            if category == Category::Clothing
                && variant.size.eq_ignore_ascii_case(LEAKED_ACCESSORY_TAG)
            {
                continue;
            }
            if !sizes.iter().any(|s| s == &variant.size) {
                sizes.push(variant.size.clone());
            }
        }
    }
    sizes
}

fn order_sizes(sizes: &mut [String], category: Category) {
    match category {
        // Numeric ascending on the leading token; unparseable sorts as 0.
        Category::Footwear => sizes.sort_by(|a, b| {
            leading_number(a)
                .unwrap_or(0.0)
                .total_cmp(&leading_number(b).unwrap_or(0.0))
        }),
        // Numeric sizes first by leading integer, then everything else
        // lexicographically.
        Category::Clothing => sizes.sort_by(|a, b| {
            let ka = (leading_integer(a).unwrap_or(i64::MAX), a);
            let kb = (leading_integer(b).unwrap_or(i64::MAX), b);
            ka.cmp(&kb)
        }),
        Category::Accessories => sizes.sort(),
    }
}

/// Leading numeric token of a size string, e.g. `"9.5 us"` -> `9.5`.
fn leading_number(s: &str) -> Option<f64> {
    let token: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    token.parse().ok()
}

/// Leading integer of a size string, e.g. `"34 eu"` -> `34`.
fn leading_integer(s: &str) -> Option<i64> {
    let token: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    token.parse().ok()
}
