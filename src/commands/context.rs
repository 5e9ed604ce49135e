//! Context passed to command handlers.
//!
//! Carries the parsed input, the caller's session and a reference to the
//! catalog. Handlers reach the basket through [`Context::basket`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HandlerError;
use crate::basket::Basket;
use crate::catalog::Catalog;
use crate::session::Session;

/// The context passed to every command handler.
///
/// ## Example
///
/// ```ignore
/// pub fn handle<C: Catalog>(ctx: &mut Context<'_, C>) -> Result<Value, HandlerError> {
///     let input = ctx.input::<Input>()?;
///     let mut basket = ctx.basket()?;
///     basket.delete(input.product_id);
///     Ok(json!({ "qty": basket.count() }))
/// }
/// ```
pub struct Context<'a, C: ?Sized> {
    command_name: &'a str,
    input: Value,
    session: &'a mut Session,
    catalog: &'a C,
    basket_key: &'a str,
}

impl<'a, C: Catalog + ?Sized> Context<'a, C> {
    pub(crate) fn new(
        command_name: &'a str,
        input: Value,
        session: &'a mut Session,
        catalog: &'a C,
        basket_key: &'a str,
    ) -> Self {
        Self {
            command_name,
            input,
            session,
            catalog,
            basket_key,
        }
    }

    /// Deserialize the input payload into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        serde_json::from_value(self.input.clone())
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    pub fn raw_input(&self) -> &Value {
        &self.input
    }

    pub fn command_name(&self) -> &str {
        self.command_name
    }

    pub fn session(&self) -> &Session {
        &*self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut *self.session
    }

    pub fn catalog(&self) -> &'a C {
        self.catalog
    }

    /// Open the basket stored in this request's session.
    pub fn basket(&mut self) -> Result<Basket<'_, C>, HandlerError> {
        Ok(Basket::with_key(&mut *self.session, self.catalog, self.basket_key)?)
    }

    /// Check if the raw input contains a field.
    pub fn has_field(&self, field: &str) -> bool {
        self.input.get(field).is_some()
    }

    /// Check if the raw input contains all specified fields.
    pub fn has_fields(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.has_field(f))
    }

    /// Read a positive integer field from the raw input.
    pub fn positive_u32(&self, field: &str) -> Option<u32> {
        self.input
            .get(field)
            .and_then(Value::as_u64)
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
    }
}
