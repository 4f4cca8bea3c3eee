use super::*;

/// Token verification failure kinds.
///
/// `Expired` and `Invalid` are deliberately distinct: callers map the former
/// to 401 (reauthenticate) and the latter to 403 (reject outright).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// No signing secret is configured. Every operation fails closed.
    #[error("token signing secret not configured")]
    Unconfigured,
    /// Signature is valid but the embedded expiry has passed.
    #[error("token expired")]
    Expired,
    /// Bad signature, malformed structure, or wrong algorithm.
    #[error("token invalid")]
    Invalid,
}

#[derive(Clone)]
struct Keys {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
}

/// HS256 token issuer and verifier.
///
/// The secret is process-wide configuration loaded once at startup. An
/// instance built without a secret refuses all operations rather than
/// skipping verification.
#[derive(Clone)]
pub struct Tokens {
    keys: Option<Keys>,
}

impl Tokens {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            keys: Some(Keys {
                encoding: jsonwebtoken::EncodingKey::from_secret(secret),
                decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            }),
        }
    }
    /// An instance with no secret; every issue/verify fails closed.
    pub fn unconfigured() -> Self {
        Self { keys: None }
    }
    /// Reads `JWT_SECRET`. A missing or empty value yields an unconfigured
    /// instance, which disables all authenticated functionality.
    pub fn from_env() -> Self {
        match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Self::new(secret.as_bytes()),
            _ => {
                log::error!("JWT_SECRET not set; authenticated endpoints will fail closed");
                Self::unconfigured()
            }
        }
    }
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let keys = self.keys.as_ref().ok_or(TokenError::Unconfigured)?;
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &keys.encoding)
            .map_err(|_| TokenError::Invalid)
    }
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let keys = self.keys.as_ref().ok_or(TokenError::Unconfigured)?;
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        // expiry is exact: the embedded instant is the logical timeout
        validation.leeway = 0;
        jsonwebtoken::decode::<Claims>(token, &keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::ID;

    fn claims() -> Claims {
        Claims::new(ID::default(), "a@x.com".into(), true)
    }

    #[test]
    fn roundtrip_preserves_claims() {
        let tokens = Tokens::new(b"secret");
        let claims = claims();
        let token = tokens.issue(&claims).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), claims);
    }

    #[test]
    fn expired_token_is_distinguished() {
        let tokens = Tokens::new(b"secret");
        let mut claims = claims();
        claims.exp = unix_now() - 10;
        let token = tokens.issue(&claims).unwrap();
        assert_eq!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn foreign_secret_is_invalid() {
        let theirs = Tokens::new(b"theirs");
        let ours = Tokens::new(b"ours");
        let token = theirs.issue(&claims()).unwrap();
        assert_eq!(ours.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn garbage_is_invalid() {
        let tokens = Tokens::new(b"secret");
        assert_eq!(tokens.verify("not.a.token"), Err(TokenError::Invalid));
        assert_eq!(tokens.verify(""), Err(TokenError::Invalid));
    }

    #[test]
    fn unconfigured_fails_closed() {
        let tokens = Tokens::unconfigured();
        assert_eq!(tokens.issue(&claims()), Err(TokenError::Unconfigured));
        let valid = Tokens::new(b"secret").issue(&claims()).unwrap();
        assert_eq!(tokens.verify(&valid), Err(TokenError::Unconfigured));
    }
}
