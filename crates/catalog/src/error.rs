use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use sf_pg::StoreError;

/// Catalog failure taxonomy, translated to a status plus JSON message at the
/// request boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    #[error("Internal server error")]
    Internal,
}

impl actix_web::ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "message": self.to_string() }))
    }
}

/// Fallback mapping for store failures a handler has no specific answer for.
pub(crate) fn internal(e: StoreError) -> CatalogError {
    log::error!("store failure in catalog: {}", e);
    CatalogError::Internal
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn status_mapping() {
        assert_eq!(
            CatalogError::Validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::NotFound("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::Conflict("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CatalogError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
