use super::*;
use sf_core::ID;
use sf_core::Unique;
use sf_pg::*;
use std::sync::Arc;
use std::time::SystemTime;
use tokio_postgres::Client;

/// Credential store contract consumed by [`AuthService`].
///
/// Abstracts SQL from the service so tests can inject a fake. The digest
/// travels alongside the domain type, never inside it.
#[allow(async_fn_in_trait)]
pub trait UserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<(User, String)>, StoreError>;
    async fn insert(&self, user: &User, digest: &str) -> Result<(), StoreError>;
}

impl UserStore for Arc<Client> {
    async fn find_by_email(&self, email: &str) -> Result<Option<(User, String)>, StoreError> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT id, email, name, is_admin, created_at, digest FROM ",
                USERS,
                " WHERE email = $1"
            ),
            &[&email],
        )
        .await
        .map(|opt| {
            opt.map(|row| {
                (
                    User::hydrate(
                        ID::from(row.get::<_, uuid::Uuid>(0)),
                        row.get::<_, String>(1),
                        row.get::<_, Option<String>>(2),
                        row.get::<_, bool>(3),
                        row.get::<_, SystemTime>(4),
                    ),
                    row.get::<_, String>(5),
                )
            })
        })
        .map_err(StoreError::from)
    }

    async fn insert(&self, user: &User, digest: &str) -> Result<(), StoreError> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                USERS,
                " (id, email, digest, name, is_admin, created_at) VALUES ($1, $2, $3, $4, $5, $6)"
            ),
            &[
                &user.id().inner(),
                &user.email(),
                &digest,
                &user.name(),
                &user.is_admin(),
                &user.created_at(),
            ],
        )
        .await
        .map(|_| ())
        .map_err(StoreError::from)
    }
}
