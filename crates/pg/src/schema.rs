use std::sync::Arc;
use tokio_postgres::Client;

/// Schema metadata for PostgreSQL tables.
///
/// All methods return `&'static str` so DDL can be assembled at compile time
/// via `const_format::concatcp!` in the implementing crates. The trait
/// contains no I/O; [`migrate`] applies it.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

/// Applies the DDL and indices for one table. Idempotent.
pub async fn migrate<S: Schema>(client: &Arc<Client>) -> Result<(), super::PgErr> {
    log::info!("migrating table {}", S::name());
    client.batch_execute(S::creates()).await?;
    client.batch_execute(S::indices()).await?;
    Ok(())
}
