use sf_pg::StoreError;

/// Authentication failure taxonomy.
///
/// Every variant maps to exactly one HTTP status; message text is what the
/// caller sees. 500-class variants log their cause server-side and say
/// nothing specific outward.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Caller input malformed — 400.
    #[error("{0}")]
    Validation(&'static str),
    /// Email uniqueness violated — 409.
    #[error("Email already in use")]
    Conflict,
    /// Login failure, intentionally generic about which factor was wrong — 401.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Missing or expired token — 401.
    #[error("{0}")]
    Unauthenticated(&'static str),
    /// Invalid token or insufficient role — 403.
    #[error("{0}")]
    Unauthorized(&'static str),
    /// Server secret missing — 500, fail closed.
    #[error("Internal server error: JWT configuration missing")]
    Configuration,
    /// Unexpected store or infrastructure failure — 500.
    #[error("Internal server error")]
    Internal,
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UniqueViolation => Self::Conflict,
            e => {
                log::error!("store failure during auth: {}", e);
                Self::Internal
            }
        }
    }
}

#[cfg(feature = "server")]
mod http {
    use super::AuthError;
    use actix_web::HttpResponse;
    use actix_web::http::StatusCode;

    impl actix_web::ResponseError for AuthError {
        fn status_code(&self) -> StatusCode {
            match self {
                AuthError::Validation(_) => StatusCode::BAD_REQUEST,
                AuthError::Conflict => StatusCode::CONFLICT,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
                AuthError::Unauthorized(_) => StatusCode::FORBIDDEN,
                AuthError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
                AuthError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
        fn error_response(&self) -> HttpResponse {
            HttpResponse::build(self.status_code())
                .json(serde_json::json!({ "message": self.to_string() }))
        }
    }

}
