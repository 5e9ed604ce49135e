//! Catalog - Product and category lookups the basket resolves against.
//!
//! The catalog owns product truth (title, current price, availability).
//! The basket only ever reads from it, and only through [`Catalog`], so any
//! backing store (SQL, a remote service, the in-memory map used in tests)
//! can sit behind it.
//!
//! ## Example
//!
//! ```ignore
//! use storefront::{Catalog, InMemoryCatalog, Product, ProductId};
//!
//! let catalog = InMemoryCatalog::new();
//! catalog.insert_product(Product::new(1, 1, "django beginners", "django-beginners", price))?;
//!
//! // One batched lookup, missing ids are simply absent.
//! let found = catalog.fetch_by_ids(&[ProductId::new(1), ProductId::new(99)])?;
//! assert_eq!(found.len(), 1);
//! ```

mod in_memory;

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use in_memory::InMemoryCatalog;

/// Identifier of a catalog product.
///
/// The string form (`Display` / `FromStr`) is the key under which a product
/// is stored inside a session basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category_id: u64,
    pub title: String,
    pub author: String,
    pub slug: String,
    /// Current price. Serialized as its canonical decimal string.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub in_stock: bool,
    pub is_active: bool,
}

impl Product {
    /// Create an active, in-stock product.
    pub fn new(
        id: u64,
        category_id: u64,
        title: impl Into<String>,
        slug: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: ProductId(id),
            category_id,
            title: title.into(),
            author: String::new(),
            slug: slug.into(),
            price,
            in_stock: true,
            is_active: true,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Error type for catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The backing store failed.
    #[error("catalog storage error: {0}")]
    Storage(String),
    /// A product references a category that does not exist.
    #[error("unknown category: {0}")]
    UnknownCategory(u64),
}

/// Read access to products and categories.
///
/// `fetch_by_ids` is the only call the basket makes. The browsing methods
/// back the storefront's catalog commands.
pub trait Catalog: Send + Sync {
    /// Resolve many products in a single lookup.
    ///
    /// Order of the result is unspecified; ids that do not resolve are
    /// absent from the result rather than an error.
    fn fetch_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, CatalogError>;

    /// Active products, for the storefront listing.
    fn active_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// An active product by slug.
    fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, CatalogError>;

    fn categories(&self) -> Result<Vec<Category>, CatalogError>;

    fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, CatalogError>;

    /// Active products in the category with the given slug.
    fn products_in_category(&self, slug: &str) -> Result<Vec<Product>, CatalogError>;

    /// Resolve a single product regardless of its active flag.
    fn product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.fetch_by_ids(&[id])?.into_iter().next())
    }
}
