//! Service - command handler registry and request lifecycle.
//!
//! `Service<C, S>` holds a catalog, a session store and a set of named
//! command handlers. A dispatch loads the caller's session, runs the
//! handler against it, and persists the session only if the handler marked
//! it modified.
//!
//! ## Example
//!
//! ```ignore
//! use storefront::commands::Service;
//! use serde_json::json;
//!
//! let service = Service::new(catalog, InMemorySessionStore::new()).with_basket_commands();
//!
//! let reply = service.dispatch("basket.add", json!({ "product_id": 1, "qty": 2 }), None)?;
//! let again = service.dispatch("basket.summary", json!({}), Some(&reply.session_key))?;
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use super::context::Context;
use super::error::HandlerError;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::session::{Session, SessionStore};

type Guard<C> = Box<dyn Fn(&Context<'_, C>) -> bool + Send + Sync>;
type Handle<C> = Box<dyn Fn(&mut Context<'_, C>) -> Result<Value, HandlerError> + Send + Sync>;

/// A registered command handler with optional guard.
struct CommandHandler<C> {
    guard: Option<Guard<C>>,
    handle: Handle<C>,
}

/// Result of a successful dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    /// Key of the session the command ran against. Newly generated when the
    /// caller presented none.
    pub session_key: String,
    /// Whether the session was persisted at the end of the command.
    pub persisted: bool,
    pub body: Value,
}

/// A storefront that routes commands to handler functions.
pub struct Service<C, S> {
    catalog: C,
    sessions: S,
    config: StorefrontConfig,
    handlers: HashMap<String, CommandHandler<C>>,
}

impl<C: Catalog + 'static, S: SessionStore> Service<C, S> {
    /// Create a new service with default configuration and no commands.
    pub fn new(catalog: C, sessions: S) -> Self {
        Self {
            catalog,
            sessions,
            config: StorefrontConfig::default(),
            handlers: HashMap::new(),
        }
    }

    pub fn with_config(mut self, config: StorefrontConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a command handler.
    ///
    /// Uses builder pattern, returns `self` for chaining.
    pub fn command<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&mut Context<'_, C>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: None,
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Register a command handler with a guard function.
    ///
    /// The guard is called before the handler. If it returns `false`,
    /// the command is rejected with `HandlerError::GuardRejected`.
    pub fn command_guarded<G, F>(mut self, name: &str, guard: G, handler: F) -> Self
    where
        G: Fn(&Context<'_, C>) -> bool + Send + Sync + 'static,
        F: Fn(&mut Context<'_, C>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: Some(Box::new(guard)),
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Run a command against an already loaded session.
    ///
    /// Does not persist anything; see [`Service::dispatch`] for the full
    /// request lifecycle.
    pub fn handle(
        &self,
        command: &str,
        input: Value,
        session: &mut Session,
    ) -> Result<Value, HandlerError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| HandlerError::UnknownCommand(command.to_string()))?;

        let mut ctx = Context::new(
            command,
            input,
            session,
            &self.catalog,
            &self.config.basket_session_key,
        );

        if let Some(guard) = &handler.guard {
            if !guard(&ctx) {
                return Err(HandlerError::GuardRejected(command.to_string()));
            }
        }

        (handler.handle)(&mut ctx)
    }

    /// Dispatch a command for the session identified by `session_key`.
    ///
    /// Without a key a new anonymous session is started. The session is
    /// committed only when the handler succeeds; a failed command leaves
    /// stored state untouched.
    pub fn dispatch(
        &self,
        command: &str,
        input: Value,
        session_key: Option<&str>,
    ) -> Result<Dispatched, HandlerError> {
        let mut session = match session_key {
            Some(key) => self.sessions.load(key)?,
            None => Session::anonymous(),
        };

        let body = match self.handle(command, input, &mut session) {
            Ok(body) => body,
            Err(e) => {
                if e.is_client_error() {
                    warn!(command, session = session.key(), error = %e, "command rejected");
                } else {
                    error!(command, session = session.key(), error = %e, "command failed");
                }
                return Err(e);
            }
        };
        let persisted = self.sessions.commit(&mut session)?;
        info!(command, session = session.key(), persisted, "command handled");

        Ok(Dispatched {
            session_key: session.key().to_string(),
            persisted,
            body,
        })
    }

    /// Dispatch a `CommandRequest`, returning a `CommandResponse`.
    pub fn dispatch_request(&self, request: &CommandRequest) -> CommandResponse {
        match self.dispatch(
            &request.command,
            request.input.clone(),
            request.session_key.as_deref(),
        ) {
            Ok(dispatched) => CommandResponse {
                status: 200,
                session_key: Some(dispatched.session_key),
                body: dispatched.body,
            },
            Err(e) => CommandResponse {
                status: e.status_code(),
                session_key: request.session_key.clone(),
                body: serde_json::json!({ "error": e.to_string() }),
            },
        }
    }

    /// List registered command names, sorted.
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}

/// A command request in transport-neutral form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: String,
    #[serde(default)]
    pub input: Value,
    /// Session key presented by the client, if any.
    #[serde(default)]
    pub session_key: Option<String>,
}

/// Response from dispatching a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// HTTP-style status code.
    pub status: u16,
    pub session_key: Option<String>,
    /// Response body (handler result or error).
    pub body: Value,
}
