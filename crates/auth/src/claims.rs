use super::*;
use sf_core::ID;

/// Fixed token lifetime: one hour from issuance.
pub const TOKEN_TTL: std::time::Duration = std::time::Duration::from_secs(60 * 60);

/// Identity facts embedded in a session token.
///
/// Serialized field names are part of the wire contract: `userId`, `email`,
/// `isAdmin`, plus the standard `exp` claim.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: uuid::Uuid,
    pub email: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: ID<User>, email: String, is_admin: bool) -> Self {
        Self {
            user_id: user.inner(),
            email,
            is_admin,
            exp: unix_now() + TOKEN_TTL.as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp < unix_now()
    }
    pub fn user(&self) -> ID<User> {
        ID::from(self.user_id)
    }
}

impl From<&User> for Claims {
    fn from(user: &User) -> Self {
        use sf_core::Unique;
        Self::new(user.id(), user.email().to_string(), user.is_admin())
    }
}

pub(crate) fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time")
        .as_secs() as i64
}
