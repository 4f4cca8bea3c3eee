//! PostgreSQL integration for storefront.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from `DB_URL`
//!
//! ## Schema
//!
//! - [`Schema`] — Table metadata and DDL generation
//! - [`migrate()`] — Applies DDL and indices for one table
//!
//! ## Errors
//!
//! - [`StoreError`] — Tagged constraint-violation taxonomy derived from
//!   SQLSTATE codes, so callers never match on driver-internal encodings
//!
//! ## Table Names
//!
//! Constants for all persistent entities: users, categories, products.
mod error;
mod schema;

pub use error::*;
pub use schema::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Connects to PostgreSQL using the `DB_URL` environment variable.
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
///
/// # Panics
///
/// Panics if `DB_URL` is not set or if connection fails.
pub async fn db() -> Arc<Client> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").expect("DB_URL must be set");
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .expect("database connection failed");
    tokio::spawn(connection);
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await
        .expect("set client_min_messages");
    Arc::new(client)
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for registered user accounts.
#[rustfmt::skip]
pub const USERS:      &str = "users";
/// Table for product categories.
#[rustfmt::skip]
pub const CATEGORIES: &str = "categories";
/// Table for products, each referencing a category.
#[rustfmt::skip]
pub const PRODUCTS:   &str = "products";
