//! Basket - A per-request view over the shopping basket kept in a session.
//!
//! The basket does not own its storage. It decodes the map stored under a
//! fixed key of the caller's [`Session`], works on typed lines, and writes
//! the map back (marking the session modified) on every mutation. The host
//! persists the bag at the end of the request.
//!
//! Prices are snapshotted when a product is first added; totals use the
//! snapshot, not the live catalog price. Reading the basket for display
//! resolves products from the [`Catalog`] with one batched lookup.
//!
//! ## Example
//!
//! ```ignore
//! use storefront::{Basket, InMemoryCatalog, Session};
//!
//! let mut session = store.load(session_key)?;
//! let mut basket = Basket::new(&mut session, &catalog)?;
//! basket.add(&product, 2);
//!
//! for item in basket.iter()? {
//!     println!("{} x{} = {}", item.line().product_id, item.line().quantity, item.line().line_total);
//! }
//! store.commit(&mut session)?;
//! ```

mod line;

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::catalog::{Catalog, CatalogError, Product, ProductId};
use crate::session::Session;

pub use line::{BasketItem, BasketLine, PricedLine, StoredLine};

/// Session key the basket map lives under unless configured otherwise.
pub const DEFAULT_BASKET_KEY: &str = "skey";

/// Error type for basket operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasketError {
    /// The persisted basket could not be decoded. The basket is the only
    /// writer of this state, so this indicates tampering or a bug.
    #[error("corrupt basket entry {entry}: {reason}")]
    Corrupt { entry: String, reason: String },
    /// A line or basket total exceeds the range of `Decimal`.
    #[error("basket total overflows")]
    Overflow,
    /// The catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Shopping basket bound to one session for the duration of a request.
pub struct Basket<'a, C: ?Sized> {
    session: &'a mut Session,
    catalog: &'a C,
    key: String,
    lines: BTreeMap<ProductId, BasketLine>,
}

impl<'a, C: Catalog + ?Sized> Basket<'a, C> {
    /// Open the basket stored under [`DEFAULT_BASKET_KEY`].
    pub fn new(session: &'a mut Session, catalog: &'a C) -> Result<Self, BasketError> {
        Self::with_key(session, catalog, DEFAULT_BASKET_KEY)
    }

    /// Open the basket stored under `key`.
    ///
    /// A session without a basket gets an empty one, recorded as created
    /// but not marked modified: nothing is persisted until a mutation.
    pub fn with_key(
        session: &'a mut Session,
        catalog: &'a C,
        key: impl Into<String>,
    ) -> Result<Self, BasketError> {
        let key = key.into();
        let lines = match session.get(&key) {
            Some(value) => line::decode_lines(value)?,
            None => {
                session.insert(key.clone(), Value::Object(Map::new()));
                session.mark_created(key.clone());
                BTreeMap::new()
            }
        };

        Ok(Self {
            session,
            catalog,
            key,
            lines,
        })
    }

    /// Total number of items (sum of quantities).
    pub fn count(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.lines.contains_key(&id)
    }

    pub fn line(&self, id: ProductId) -> Option<&BasketLine> {
        self.lines.get(&id)
    }

    /// The raw lines, keyed by product id.
    pub fn lines(&self) -> &BTreeMap<ProductId, BasketLine> {
        &self.lines
    }

    /// Sum of `unit_price * quantity` using the cached prices.
    pub fn total_price(&self) -> Result<Decimal, BasketError> {
        self.lines.values().try_fold(Decimal::ZERO, |total, line| {
            total
                .checked_add(line.line_total()?)
                .ok_or(BasketError::Overflow)
        })
    }

    /// Lines enriched with their catalog products.
    ///
    /// Every call performs one batched catalog lookup for all ids in the
    /// basket and returns a fresh iterator. Lines whose product is no longer
    /// in the catalog come back as [`BasketItem::Orphaned`]. Order is not
    /// part of the contract.
    pub fn iter(&self) -> Result<impl Iterator<Item = BasketItem>, BasketError> {
        let mut products: HashMap<ProductId, Product> = if self.lines.is_empty() {
            HashMap::new()
        } else {
            let ids: Vec<ProductId> = self.lines.keys().copied().collect();
            self.catalog
                .fetch_by_ids(&ids)?
                .into_iter()
                .map(|product| (product.id, product))
                .collect()
        };

        let items = self
            .lines
            .iter()
            .map(|(id, line)| {
                let line = PricedLine::new(*id, line)?;
                Ok(match products.remove(id) {
                    Some(product) => BasketItem::Resolved { line, product },
                    None => {
                        warn!(product_id = %id, "basket line has no catalog product");
                        BasketItem::Orphaned { line }
                    }
                })
            })
            .collect::<Result<Vec<_>, BasketError>>()?;

        Ok(items.into_iter())
    }

    /// Put a product in the basket.
    ///
    /// An existing line gets its quantity replaced (not incremented) and
    /// keeps its original price snapshot. A new line snapshots the
    /// product's current price. Both cases mark the session modified.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        match self.lines.get_mut(&product.id) {
            Some(line) => line.quantity = quantity,
            None => {
                self.lines
                    .insert(product.id, BasketLine::new(product.price, quantity));
            }
        }
        debug!(product_id = %product.id, quantity, "basket add");
        self.save();
    }

    /// Remove a product's line. Absent ids are a no-op that leaves the
    /// session untouched.
    pub fn delete(&mut self, id: ProductId) {
        if self.lines.remove(&id).is_some() {
            debug!(product_id = %id, "basket delete");
            self.save();
        }
    }

    /// Overwrite a line's quantity if present.
    ///
    /// Unlike [`Basket::delete`], this marks the session modified even when
    /// the id is not in the basket.
    pub fn update(&mut self, id: ProductId, quantity: u32) {
        if let Some(line) = self.lines.get_mut(&id) {
            line.quantity = quantity;
            debug!(product_id = %id, quantity, "basket update");
        }
        self.save();
    }

    /// Empty the basket.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.save();
    }

    /// Write the lines back into the session and mark it modified.
    pub fn save(&mut self) {
        self.session
            .insert(self.key.clone(), line::encode_lines(&self.lines));
        self.session.mark_modified();
    }

    /// The key this basket is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }
}
