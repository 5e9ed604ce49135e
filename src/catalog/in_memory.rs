//! InMemoryCatalog - HashMap-backed catalog for testing and development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::{Catalog, CatalogError, Category, Product, ProductId};

#[derive(Default)]
struct Tables {
    products: HashMap<ProductId, Product>,
    categories: HashMap<u64, Category>,
}

/// In-memory catalog backed by HashMaps.
///
/// Clone-friendly via Arc; clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<Tables>>,
    batch_lookups: Arc<AtomicUsize>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category, replacing any category with the same id.
    pub fn insert_category(&self, category: Category) -> Result<(), CatalogError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| CatalogError::Storage("lock poisoned".into()))?;
        tables.categories.insert(category.id, category);
        Ok(())
    }

    /// Add a product, replacing any product with the same id.
    ///
    /// The product's category must already exist.
    pub fn insert_product(&self, product: Product) -> Result<(), CatalogError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| CatalogError::Storage("lock poisoned".into()))?;
        if !tables.categories.contains_key(&product.category_id) {
            return Err(CatalogError::UnknownCategory(product.category_id));
        }
        tables.products.insert(product.id, product);
        Ok(())
    }

    /// Remove a product. Returns true if it existed.
    pub fn remove_product(&self, id: ProductId) -> Result<bool, CatalogError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| CatalogError::Storage("lock poisoned".into()))?;
        Ok(tables.products.remove(&id).is_some())
    }

    /// Number of `fetch_by_ids` calls served so far.
    pub fn batch_lookups(&self) -> usize {
        self.batch_lookups.load(Ordering::SeqCst)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>, CatalogError> {
        self.tables
            .read()
            .map_err(|_| CatalogError::Storage("lock poisoned".into()))
    }
}

fn sorted_by_id(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by_key(|p| p.id);
    products
}

impl Catalog for InMemoryCatalog {
    fn fetch_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, CatalogError> {
        self.batch_lookups.fetch_add(1, Ordering::SeqCst);
        let tables = self.read()?;
        Ok(ids
            .iter()
            .filter_map(|id| tables.products.get(id).cloned())
            .collect())
    }

    fn active_products(&self) -> Result<Vec<Product>, CatalogError> {
        let tables = self.read()?;
        Ok(sorted_by_id(
            tables
                .products
                .values()
                .filter(|p| p.is_active)
                .cloned()
                .collect(),
        ))
    }

    fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, CatalogError> {
        let tables = self.read()?;
        Ok(tables
            .products
            .values()
            .find(|p| p.is_active && p.slug == slug)
            .cloned())
    }

    fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        let tables = self.read()?;
        let mut categories: Vec<Category> = tables.categories.values().cloned().collect();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, CatalogError> {
        let tables = self.read()?;
        Ok(tables.categories.values().find(|c| c.slug == slug).cloned())
    }

    fn products_in_category(&self, slug: &str) -> Result<Vec<Product>, CatalogError> {
        let tables = self.read()?;
        let Some(category) = tables.categories.values().find(|c| c.slug == slug) else {
            return Ok(Vec::new());
        };
        Ok(sorted_by_id(
            tables
                .products
                .values()
                .filter(|p| p.is_active && p.category_id == category.id)
                .cloned()
                .collect(),
        ))
    }
}
