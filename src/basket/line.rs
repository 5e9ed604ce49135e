//! Basket lines: the typed in-memory form, the persisted form stored in the
//! session bag, and the enriched form handed to presentation.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::BasketError;
use crate::catalog::{Product, ProductId};

/// One product's cached price and chosen quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasketLine {
    /// Price snapshot taken when the line was first added.
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl BasketLine {
    pub fn new(unit_price: Decimal, quantity: u32) -> Self {
        Self {
            unit_price,
            quantity,
        }
    }

    /// `unit_price * quantity`, or [`BasketError::Overflow`] when the
    /// product does not fit a `Decimal`.
    pub fn line_total(&self) -> Result<Decimal, BasketError> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or(BasketError::Overflow)
    }
}

/// Persisted form of a line: `{ "price": "<decimal string>", "qty": <int> }`.
///
/// The price is kept as the canonical decimal string so the scale survives
/// any transport that would otherwise coerce it through a float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLine {
    pub price: String,
    pub qty: u32,
}

impl From<&BasketLine> for StoredLine {
    fn from(line: &BasketLine) -> Self {
        Self {
            price: line.unit_price.to_string(),
            qty: line.quantity,
        }
    }
}

impl TryFrom<StoredLine> for BasketLine {
    type Error = BasketError;

    fn try_from(stored: StoredLine) -> Result<Self, Self::Error> {
        let unit_price = Decimal::from_str(&stored.price).map_err(|e| BasketError::Corrupt {
            entry: stored.price.clone(),
            reason: format!("invalid price: {}", e),
        })?;
        Ok(Self {
            unit_price,
            quantity: stored.qty,
        })
    }
}

/// Decode the basket map stored in a session bag.
pub(crate) fn decode_lines(value: &Value) -> Result<BTreeMap<ProductId, BasketLine>, BasketError> {
    let stored: BTreeMap<String, StoredLine> =
        serde_json::from_value(value.clone()).map_err(|e| BasketError::Corrupt {
            entry: "basket".into(),
            reason: e.to_string(),
        })?;

    stored
        .into_iter()
        .map(|(key, line)| -> Result<(ProductId, BasketLine), BasketError> {
            let id = ProductId::from_str(&key).map_err(|e| BasketError::Corrupt {
                entry: key.clone(),
                reason: format!("invalid product id: {}", e),
            })?;
            // Keys like "01" or "+1" would alias another line's id.
            if id.to_string() != key {
                return Err(BasketError::Corrupt {
                    entry: key,
                    reason: "non-canonical product id".into(),
                });
            }
            Ok((id, BasketLine::try_from(line)?))
        })
        .collect()
}

/// Encode lines into the session bag's basket map.
pub(crate) fn encode_lines(lines: &BTreeMap<ProductId, BasketLine>) -> Value {
    let stored: BTreeMap<String, StoredLine> = lines
        .iter()
        .map(|(id, line)| (id.to_string(), StoredLine::from(line)))
        .collect();
    // A map of string and integer fields always serializes.
    serde_json::to_value(stored).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// A basket line with its derived total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedLine {
    pub product_id: ProductId,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub line_total: Decimal,
}

impl PricedLine {
    pub(crate) fn new(product_id: ProductId, line: &BasketLine) -> Result<Self, BasketError> {
        Ok(Self {
            product_id,
            unit_price: line.unit_price,
            quantity: line.quantity,
            line_total: line.line_total()?,
        })
    }
}

/// A line enriched with its live catalog product.
///
/// `Orphaned` lines reference a product the catalog no longer returns
/// (deleted after it was added). They still count toward the totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasketItem {
    Resolved { line: PricedLine, product: Product },
    Orphaned { line: PricedLine },
}

impl BasketItem {
    pub fn line(&self) -> &PricedLine {
        match self {
            BasketItem::Resolved { line, .. } | BasketItem::Orphaned { line } => line,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            BasketItem::Resolved { product, .. } => Some(product),
            BasketItem::Orphaned { .. } => None,
        }
    }

    pub fn is_orphaned(&self) -> bool {
        matches!(self, BasketItem::Orphaned { .. })
    }
}
