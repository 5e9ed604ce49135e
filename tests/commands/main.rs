//! Storefront service integration tests.

mod support;
mod basket_commands;

#[cfg(feature = "http")]
mod http;
