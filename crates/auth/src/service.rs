use super::*;
use sf_core::ID;

/// Registration and login orchestration.
///
/// The credential store and token issuer are injected at construction; the
/// service holds no other state and performs no retries. bcrypt work runs on
/// the blocking pool so concurrent in-flight hashes never stall the async
/// workers.
pub struct AuthService<S> {
    store: S,
    tokens: Tokens,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(store: S, tokens: Tokens) -> Self {
        Self { store, tokens }
    }

    /// Validate → check uniqueness → hash → persist. Returns the public view
    /// only; the digest stays between the hasher and the store.
    pub async fn register(&self, req: RegisterRequest) -> Result<UserView, AuthError> {
        if req.email.is_empty() || req.password.is_empty() {
            return Err(AuthError::Validation("Email and password are required"));
        }
        if req.password.len() < 6 {
            return Err(AuthError::Validation(
                "Password must be at least 6 characters long",
            ));
        }
        if self.store.find_by_email(&req.email).await?.is_some() {
            return Err(AuthError::Conflict);
        }
        let password = req.password;
        let digest = tokio::task::spawn_blocking(move || password::hash(&password))
            .await
            .map_err(|e| {
                log::error!("hashing task failed: {}", e);
                AuthError::Internal
            })?
            .map_err(|e| {
                log::error!("password hashing failed: {}", e);
                AuthError::Internal
            })?;
        let user = User::new(ID::default(), req.email, req.name);
        // the lookup above races with concurrent registration; the UNIQUE
        // column settles it, and that loss is still a Conflict
        self.store.insert(&user, &digest).await?;
        Ok(UserView::from(&user))
    }

    /// Lookup → verify → issue. A missing account and a wrong password are
    /// indistinguishable to the caller.
    pub async fn login(&self, req: LoginRequest) -> Result<(String, UserView), AuthError> {
        if req.email.is_empty() || req.password.is_empty() {
            return Err(AuthError::Validation("Email and password are required"));
        }
        let Some((user, digest)) = self.store.find_by_email(&req.email).await? else {
            return Err(AuthError::InvalidCredentials);
        };
        let password = req.password;
        let matched = tokio::task::spawn_blocking(move || password::verify(&password, &digest))
            .await
            .map_err(|e| {
                log::error!("verification task failed: {}", e);
                AuthError::Internal
            })?;
        if !matched {
            return Err(AuthError::InvalidCredentials);
        }
        let claims = Claims::from(&user);
        let token = self.tokens.issue(&claims).map_err(|e| match e {
            TokenError::Unconfigured => {
                log::error!("JWT_SECRET not configured; refusing login");
                AuthError::Configuration
            }
            e => {
                log::error!("token issuance failed: {}", e);
                AuthError::Internal
            }
        })?;
        Ok((token, UserView::from(&user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_pg::StoreError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemStore(Mutex<HashMap<String, (User, String)>>);

    impl UserStore for MemStore {
        async fn find_by_email(&self, email: &str) -> Result<Option<(User, String)>, StoreError> {
            Ok(self.0.lock().unwrap().get(email).cloned())
        }
        async fn insert(&self, user: &User, digest: &str) -> Result<(), StoreError> {
            let mut map = self.0.lock().unwrap();
            if map.contains_key(user.email()) {
                return Err(StoreError::UniqueViolation);
            }
            map.insert(
                user.email().to_string(),
                (user.clone(), digest.to_string()),
            );
            Ok(())
        }
    }

    fn service() -> AuthService<MemStore> {
        AuthService::new(MemStore::default(), Tokens::new(b"test-secret"))
    }

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            password: password.into(),
            name: None,
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn register_then_login() {
        let service = service();
        let user = service
            .register(register_request("a@x.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(user.email, "a@x.com");
        assert!(!user.is_admin);
        let (token, view) = service
            .login(login_request("a@x.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(view, user);
        let claims = Tokens::new(b"test-secret").verify(&token).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert!(!claims.is_admin);
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_regardless_of_password() {
        let service = service();
        service
            .register(register_request("a@x.com", "secret1"))
            .await
            .unwrap();
        let err = service
            .register(register_request("a@x.com", "different"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::Conflict);
    }

    #[tokio::test]
    async fn short_password_rejected() {
        let err = service()
            .register(register_request("a@x.com", "12345"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_fields_rejected() {
        let service = service();
        for (email, password) in [("", "secret1"), ("a@x.com", ""), ("", "")] {
            let err = service
                .register(register_request(email, password))
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)));
            let err = service
                .login(login_request(email, password))
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_identical() {
        let service = service();
        service
            .register(register_request("a@x.com", "secret1"))
            .await
            .unwrap();
        let wrong = service
            .login(login_request("a@x.com", "wrong"))
            .await
            .unwrap_err();
        let unknown = service
            .login(login_request("b@x.com", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(wrong, AuthError::InvalidCredentials);
        assert_eq!(unknown, AuthError::InvalidCredentials);
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[tokio::test]
    async fn view_never_carries_digest() {
        let user = service()
            .register(register_request("a@x.com", "secret1"))
            .await
            .unwrap();
        let json = serde_json::to_value(&user).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("digest"));
        assert!(object.contains_key("createdAt"));
    }

    #[tokio::test]
    async fn unconfigured_tokens_fail_closed_at_login() {
        let service = AuthService::new(MemStore::default(), Tokens::unconfigured());
        service
            .register(register_request("a@x.com", "secret1"))
            .await
            .unwrap();
        let err = service
            .login(login_request("a@x.com", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::Configuration);
    }
}
