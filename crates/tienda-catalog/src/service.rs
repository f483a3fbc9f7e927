//! The catalog service: one engine behind every catalog endpoint.
//!
//! The storefront's global catalog, category-scoped catalog, and facet
//! endpoints all go through this service with different scoping, so the
//! filter, sort, and facet semantics cannot drift apart.

use crate::catalog::Category;
use crate::error::CatalogError;
use crate::query::{self, CatalogFacets, CatalogPage, CategoryFacets, FilterCriteria, PageRequest, RawQuery};
use crate::store::ProductStore;
use tracing::debug;

/// Stateless, request-scoped catalog query engine over a product store.
pub struct CatalogService<S> {
    store: S,
}

impl<S: ProductStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Answer a catalog query: build criteria, fetch the full matching
    /// set, sort it, and slice out the requested page.
    pub async fn query_catalog(&self, raw: &RawQuery) -> Result<CatalogPage, CatalogError> {
        let criteria = FilterCriteria::from_raw(raw)?;
        let request = PageRequest::from_raw(raw);

        let mut products = self.store.find_matching(&criteria).await?;
        debug!(
            matched = products.len(),
            page = request.page,
            per_page = request.per_page,
            "catalog query matched products"
        );

        query::rank(&mut products, criteria.explicit_sort);
        Ok(query::paginate(products, &request))
    }

    /// Compute filter options across the whole catalog.
    pub async fn facets(&self) -> Result<CatalogFacets, CatalogError> {
        let products = self.store.find_matching(&FilterCriteria::default()).await?;
        debug!(scanned = products.len(), "extracting catalog facets");
        Ok(query::extract_facets(&products))
    }

    /// Compute filter options for one category: its brands and a flat
    /// size list.
    pub async fn category_facets(
        &self,
        category: Category,
    ) -> Result<CategoryFacets, CatalogError> {
        let products = self
            .store
            .find_matching(&FilterCriteria::for_category(category))
            .await?;
        debug!(
            scanned = products.len(),
            category = category.as_str(),
            "extracting category facets"
        );
        Ok(query::extract_category_facets(&products, category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProductRecord, SizeVariant};
    use crate::store::StoreError;
    use async_trait::async_trait;

    struct FixtureStore {
        products: Vec<ProductRecord>,
    }

    #[async_trait]
    impl ProductStore for FixtureStore {
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

    struct DownStore;

    #[async_trait]
    impl ProductStore for DownStore {
        async fn find_matching(
            &self,
            _criteria: &FilterCriteria,
        ) -> Result<Vec<ProductRecord>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn fixture() -> FixtureStore {
        let mut a = ProductRecord::new("a", "Mid Tee", Category::Clothing, 50.0);
        a.sizes.push(SizeVariant::new("M", 50.0));
        let mut b = ProductRecord::new("b", "Big Tee", Category::Clothing, 80.0);
        b.sizes.push(SizeVariant::new("M", 80.0));
        let c = ProductRecord::new("c", "Backorder Tee", Category::Clothing, 30.0);
        FixtureStore {
            products: vec![a, b, c],
        }
    }

    #[tokio::test]
    async fn test_query_catalog_default_order() {
        let service = CatalogService::new(fixture());
        let page = service.query_catalog(&RawQuery::new()).await.unwrap();
        let prices: Vec<f64> = page.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![80.0, 50.0, 30.0]);
        assert_eq!(page.pagination.total, 3);
    }

    #[tokio::test]
    async fn test_query_catalog_availability_filter() {
        let service = CatalogService::new(fixture());
        let raw = RawQuery::new().with_availability("Immediate delivery");
        let page = service.query_catalog(&raw).await.unwrap();
        assert_eq!(page.len(), 2);
        assert!(page.items.iter().all(|p| !p.sizes.is_empty() && !p.on_order));
    }

    #[tokio::test]
    async fn test_query_catalog_invalid_category() {
        let service = CatalogService::new(fixture());
        let raw = RawQuery::new().with_category("toys");
        assert!(matches!(
            service.query_catalog(&raw).await,
            Err(CatalogError::InvalidCategory(_))
        ));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service = CatalogService::new(DownStore);
        assert!(matches!(
            service.query_catalog(&RawQuery::new()).await,
            Err(CatalogError::Store(StoreError::Unavailable(_)))
        ));
        assert!(service.facets().await.is_err());
    }

    #[tokio::test]
    async fn test_repeated_queries_are_identical() {
        let service = CatalogService::new(fixture());
        let raw = RawQuery::new().with_sort("asc").with_limit("2");
        let first = service.query_catalog(&raw).await.unwrap();
        let second = service.query_catalog(&raw).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_category_facets_are_scoped() {
        let mut store = fixture();
        let mut shoe = ProductRecord::new("d", "Runner", Category::Footwear, 120.0);
        shoe.sizes.push(SizeVariant::new("9 us", 120.0));
        shoe.brands = vec!["Nike".to_string()];
        store.products.push(shoe);

        let service = CatalogService::new(store);
        let facets = service.category_facets(Category::Footwear).await.unwrap();
        assert_eq!(facets.sizes, vec!["9 us"]);
        assert_eq!(facets.brands, vec!["Nike"]);
    }
}
