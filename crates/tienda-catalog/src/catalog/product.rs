//! Product record types.

use crate::catalog::Availability;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Top-level product category.
///
/// A closed set: every stored product belongs to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Footwear,
    Accessories,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [Category::Clothing, Category::Footwear, Category::Accessories];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Footwear => "footwear",
            Category::Accessories => "accessories",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clothing" => Some(Category::Clothing),
            "footwear" => Some(Category::Footwear),
            "accessories" => Some(Category::Accessories),
            _ => None,
        }
    }

    /// Case-insensitive containment match, used by the category filter.
    ///
    /// The storefront historically matched categories with a case-insensitive
    /// regex, so `"Foot"` resolves to [`Category::Footwear`]. Empty or
    /// whitespace-only input matches nothing.
    pub fn matching(input: &str) -> Option<Self> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Category::ALL
            .iter()
            .find(|c| c.as_str().contains(&needle))
            .copied()
    }
}

/// A stocked size variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SizeVariant {
    /// Size label as entered by the admin (e.g., `"M"`, `"9.5 us"`).
    pub size: String,
    /// Price for this size, in the same unit as the base price.
    #[serde(default)]
    pub price_per_size: f64,
}

impl SizeVariant {
    pub fn new(size: impl Into<String>, price_per_size: f64) -> Self {
        Self {
            size: size.into(),
            price_per_size,
        }
    }
}

/// A color entry. Informational only; the engine does not filter on color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorEntry {
    pub color: String,
}

/// A product in the catalog.
///
/// The engine reads these records from the store and never mutates them;
/// creation and updates belong to the admin surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Unique product identifier.
    pub id: ProductId,
    /// URL-friendly slug. Legacy records may lack one.
    #[serde(default)]
    pub slug: Option<String>,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Base price in a currency-agnostic unit (USD in practice).
    /// Non-negative; missing on legacy records, which deserialize as `0.0`.
    #[serde(default)]
    pub price: f64,
    /// Brand tags. A product may carry several (collaborations); order is
    /// not significant.
    #[serde(default, rename = "brand")]
    pub brands: Vec<String>,
    /// Product category.
    pub category: Category,
    /// Stocked size variants. Empty means "no stocked variants", which is
    /// meaningful (it drives availability), not an error.
    #[serde(default)]
    pub sizes: Vec<SizeVariant>,
    /// Available colors.
    #[serde(default)]
    pub colors: Vec<ColorEntry>,
    /// True if the product is sourced per order rather than from ready stock.
    #[serde(default)]
    pub on_order: bool,
    /// Homepage widget flag; not consulted by the query engine.
    #[serde(default)]
    pub featured: bool,
    /// Homepage widget flag; not consulted by the query engine.
    #[serde(default)]
    pub featured_footwear: bool,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
    /// Unix timestamp of last update.
    #[serde(default)]
    pub updated_at: i64,
}

impl ProductRecord {
    /// Create a record with the given required fields; everything else
    /// takes its default. Intended for embedders and tests.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: Category,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            slug: None,
            name: name.into(),
            description: String::new(),
            price,
            brands: Vec::new(),
            category,
            sizes: Vec::new(),
            colors: Vec::new(),
            on_order: false,
            featured: false,
            featured_footwear: false,
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Derive the availability group from stocked sizes and the on-order
    /// flag. Always recomputed, never cached on the record.
    pub fn availability(&self) -> Availability {
        Availability::classify(&self.sizes, self.on_order)
    }

    /// Price as used for ordering: non-finite values compare as `0.0`.
    pub fn sort_price(&self) -> f64 {
        if self.price.is_finite() {
            self.price
        } else {
            0.0
        }
    }

    /// Whether any stocked variant carries exactly this size label.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s.size == size)
    }

    /// Case-insensitive substring search over name, description, and brand
    /// tags. `needle` must already be lowercased.
    pub(crate) fn matches_lowercase_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .brands
                .iter()
                .any(|b| b.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_matching_is_case_insensitive() {
        assert_eq!(Category::matching("FOOTWEAR"), Some(Category::Footwear));
        assert_eq!(Category::matching("cloth"), Some(Category::Clothing));
        assert_eq!(Category::matching("  accessories "), Some(Category::Accessories));
        assert_eq!(Category::matching("gadgets"), None);
        assert_eq!(Category::matching("   "), None);
    }

    #[test]
    fn test_product_deserializes_document_shape() {
        let json = serde_json::json!({
            "id": "p1",
            "name": "Runner",
            "description": "A shoe",
            "price": 120.0,
            "brand": ["Nike", "Off-White"],
            "category": "footwear",
            "sizes": [{"size": "9 us", "pricePerSize": 120.0}],
            "onOrder": true,
            "createdAt": 1700000000
        });
        let product: ProductRecord = serde_json::from_value(json).unwrap();
        assert_eq!(product.category, Category::Footwear);
        assert_eq!(product.brands.len(), 2);
        assert!(product.on_order);
        assert!(product.slug.is_none());
        assert_eq!(product.sizes[0].price_per_size, 120.0);
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        let json = serde_json::json!({
            "id": "p2",
            "name": "Legacy",
            "description": "",
            "category": "clothing"
        });
        let product: ProductRecord = serde_json::from_value(json).unwrap();
        assert_eq!(product.sort_price(), 0.0);
    }

    #[test]
    fn test_has_size_is_exact() {
        let mut product = ProductRecord::new("p3", "Tee", Category::Clothing, 25.0);
        product.sizes.push(SizeVariant::new("M", 25.0));
        assert!(product.has_size("M"));
        assert!(!product.has_size("m"));
    }
}
