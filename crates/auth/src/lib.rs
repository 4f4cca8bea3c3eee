//! Authentication and authorization for storefront.
//!
//! JWT-based stateless authentication with bcrypt password hashing. Tokens
//! carry the user id, email, and admin flag, expire one hour after issuance,
//! and are never persisted server-side: logout is client-side discard.
//!
//! ## Identity
//!
//! - [`User`] — Registered account with credentials
//! - [`Claims`] — Token payload structure
//!
//! ## Security
//!
//! - [`Tokens`] — Signing and verification, fail-closed when unconfigured
//! - [`password`] — bcrypt hashing and verification
//!
//! ## Orchestration
//!
//! - [`AuthService`] — Registration and login over an injected [`UserStore`]
//! - [`AuthError`] — Failure taxonomy with HTTP status mapping
mod claims;
mod dto;
mod error;
pub mod password;
mod repository;
mod service;
mod tokens;
mod user;

pub use claims::*;
pub use dto::*;
pub use error::*;
pub use repository::*;
pub use service::*;
pub use tokens::*;
pub use user::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
