use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use std::future::Ready;
use std::future::ready;

/// Extractor for authenticated requests.
///
/// Verifies the bearer token and exposes its claims to the handler. Token
/// verification is pure computation, so extraction completes immediately.
/// Outcomes: no token 401, expired 401, invalid 403, missing secret 500.
pub struct Auth(pub Claims);

impl Auth {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
    pub fn user(&self) -> sf_core::ID<User> {
        self.0.user()
    }
}

impl FromRequest for Auth {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(Auth))
    }
}

/// Extractor for admin-only routes. Runs the same authentication, then
/// requires the admin flag.
pub struct Admin(pub Claims);

impl Admin {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl FromRequest for Admin {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).and_then(|claims| {
            if claims.is_admin {
                Ok(Admin(claims))
            } else {
                Err(AuthError::Unauthorized("Forbidden: Requires admin access"))
            }
        }))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Claims, AuthError> {
    let tokens = req.app_data::<web::Data<Tokens>>().ok_or_else(|| {
        log::error!("token service not registered on app");
        AuthError::Configuration
    })?;
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AuthError::Unauthenticated("Unauthorized: No token provided"))?;
    match tokens.verify(token) {
        Ok(claims) => Ok(claims),
        Err(TokenError::Expired) => Err(AuthError::Unauthenticated("Unauthorized: Token expired")),
        Err(TokenError::Unconfigured) => {
            log::error!("JWT_SECRET not configured; refusing authenticated request");
            Err(AuthError::Configuration)
        }
        Err(TokenError::Invalid) => Err(AuthError::Unauthorized("Forbidden: Invalid token")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::HttpResponse;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use sf_core::ID;

    async fn private(auth: Auth) -> HttpResponse {
        HttpResponse::Ok().json(auth.claims())
    }

    async fn admin_only(_admin: Admin) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    fn routes(cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(Tokens::new(b"test-secret")))
            .route("/private", web::get().to(private))
            .route("/admin", web::get().to(admin_only));
    }

    fn bearer(claims: &Claims) -> (&'static str, String) {
        let token = Tokens::new(b"test-secret").issue(claims).unwrap();
        ("Authorization", format!("Bearer {}", token))
    }

    #[actix_web::test]
    async fn no_header_is_401() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get().uri("/private").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn garbage_token_is_403() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get()
            .uri("/private")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn expired_token_is_401() {
        let app = test::init_service(App::new().configure(routes)).await;
        let mut claims = Claims::new(ID::default(), "a@x.com".into(), false);
        claims.exp = unix_now() - 10;
        let req = test::TestRequest::get()
            .uri("/private")
            .insert_header(bearer(&claims))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn valid_token_reaches_handler_with_claims() {
        let app = test::init_service(App::new().configure(routes)).await;
        let claims = Claims::new(ID::default(), "a@x.com".into(), false);
        let req = test::TestRequest::get()
            .uri("/private")
            .insert_header(bearer(&claims))
            .to_request();
        let echoed: Claims = test::call_and_read_body_json(&app, req).await;
        assert_eq!(echoed, claims);
    }

    #[actix_web::test]
    async fn non_admin_on_admin_route_is_403() {
        let app = test::init_service(App::new().configure(routes)).await;
        let claims = Claims::new(ID::default(), "a@x.com".into(), false);
        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(bearer(&claims))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn admin_token_passes_role_gate() {
        let app = test::init_service(App::new().configure(routes)).await;
        let claims = Claims::new(ID::default(), "root@x.com".into(), true);
        let req = test::TestRequest::get()
            .uri("/admin")
            .insert_header(bearer(&claims))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn unconfigured_secret_is_500_even_with_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Tokens::unconfigured()))
                .route("/private", web::get().to(private)),
        )
        .await;
        let claims = Claims::new(ID::default(), "a@x.com".into(), false);
        let req = test::TestRequest::get()
            .uri("/private")
            .insert_header(bearer(&claims))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
