//! Category and product catalog for storefront.
//!
//! Plain CRUD over two related record types. Reads are public; writes require
//! authentication and deletes require the admin role, enforced by the
//! extractors from `sf-auth`.
//!
//! - [`Category`], [`Product`] — Domain models with table schemas
//! - [`CatalogStore`] — Repository over `tokio_postgres`
//! - [`CatalogError`] — Failure taxonomy with HTTP status mapping
mod dto;
mod error;
mod handlers;
mod models;
mod repository;

pub use dto::*;
pub use error::*;
pub use handlers::*;
pub use models::*;
pub use repository::*;
