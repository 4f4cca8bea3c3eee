//! Storefront backend binary.
//!
//! Reads `DB_URL`, `JWT_SECRET`, and `BIND_ADDR` from the environment,
//! migrates the schema, and serves the HTTP API.

#[tokio::main]
async fn main() {
    sf_core::log();
    sf_core::kys();
    sf_server::run().await.unwrap();
}
