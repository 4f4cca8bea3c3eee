use sf_core::ID;
use sf_core::Unique;
use std::time::SystemTime;

/// Registered account with verified identity.
///
/// The password digest is not part of the domain type; the store carries it
/// alongside and it never crosses the HTTP boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: ID<Self>,
    email: String,
    name: Option<String>,
    is_admin: bool,
    created_at: SystemTime,
}

impl User {
    /// A freshly registered user. Never an administrator.
    pub fn new(id: ID<Self>, email: String, name: Option<String>) -> Self {
        Self {
            id,
            email,
            name,
            is_admin: false,
            created_at: SystemTime::now(),
        }
    }
    /// Reconstructs a user from its stored row.
    pub fn hydrate(
        id: ID<Self>,
        email: String,
        name: Option<String>,
        is_admin: bool,
        created_at: SystemTime,
    ) -> Self {
        Self {
            id,
            email,
            name,
            is_admin,
            created_at,
        }
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }
}

impl Unique for User {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use sf_pg::*;

    /// Email uniqueness lives here, at the store layer; a duplicate insert
    /// surfaces as `StoreError::UniqueViolation`.
    impl Schema for User {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id          UUID PRIMARY KEY,
                    email       VARCHAR(255) UNIQUE NOT NULL,
                    digest      TEXT NOT NULL,
                    name        VARCHAR(255),
                    is_admin    BOOLEAN NOT NULL DEFAULT FALSE,
                    created_at  TIMESTAMPTZ NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_email ON ",
                USERS,
                " (email);"
            )
        }
    }
}
